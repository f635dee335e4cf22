//! Text normalization and decorative-tag stripping.
//!
//! Normalization is deliberately lossy: diacritics fold to ASCII
//! best-effort, curly quotes straighten to apostrophes, and whitespace
//! collapses. The matchers downstream all assume this canonical form.

use regex::Regex;

use roster_core::{Result, TitleVocabulary};

use crate::rx;

/// Fold a single character to its ASCII approximation, when one exists.
///
/// Covers Latin-1 and the common Latin Extended-A letters seen in artist
/// names; anything else passes through unchanged.
fn fold_char(c: char) -> Option<&'static str> {
    let folded = match c {
        '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{00B4}' | '`' => "'",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' => "A",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'ç' | 'ć' | 'č' => "c",
        'Ç' | 'Ć' | 'Č' => "C",
        'ñ' | 'ń' => "n",
        'Ñ' => "N",
        'ý' | 'ÿ' => "y",
        'ś' | 'š' => "s",
        'Ś' | 'Š' => "S",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ł' => "l",
        'Ł' => "L",
        'đ' | 'ð' => "d",
        'Đ' => "D",
        'ğ' => "g",
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'þ' => "th",
        _ => return None,
    };
    Some(folded)
}

/// Fold diacritics, straighten quotes, and collapse whitespace.
#[must_use]
pub fn fold_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match fold_char(c) {
            Some(folded) => out.push_str(folded),
            None => out.push(c),
        }
    }
    collapse_whitespace(&out)
}

/// Collapse runs of whitespace to single spaces and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compiled normalization passes for video titles.
#[derive(Debug)]
pub struct Normalizer {
    rx_official_suffix: Regex,
    rx_bracket_tags: Regex,
    junk: Vec<Regex>,
    rx_empty_group: Regex,
    rx_csv: Regex,
}

impl Normalizer {
    /// Compile the junk-descriptor patterns from the vocabulary.
    ///
    /// # Errors
    /// Returns an error if any configured pattern is invalid.
    pub fn new(vocab: &TitleVocabulary) -> Result<Self> {
        let junk = vocab
            .junk_descriptors
            .iter()
            .map(|p| rx::compile_ci(p))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rx_official_suffix: rx::compile_ci(r"\s*[\(\[]\s*official\s+video\s*[\)\]]\s*$")?,
            rx_bracket_tags: rx::compile_ci(
                r"\s*[\[\(][^\)\]]*(official|audio|video|hq|mv|lyric)[^\)\]]*[\]\)]",
            )?,
            junk,
            rx_empty_group: rx::compile(r"\(\s*\)|\[\s*\]")?,
            rx_csv: rx::compile(r#"^([A-Za-z0-9_-]{11}),([A-Za-z0-9]{12}),"(.*)"$"#)?,
        })
    }

    /// Normalize a title: fold text, then strip a verbatim trailing
    /// `(Official Video)` / `[Official Video]` suffix.
    #[must_use]
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let folded = fold_text(text);
        let stripped = self.rx_official_suffix.replace(&folded, "");
        stripped.trim().to_string()
    }

    /// Remove decorative bracket tags and junk descriptors.
    ///
    /// Runs before the special-case matchers so their regexes see clean
    /// input. Featuring clauses inside brackets survive because the tag
    /// pattern requires an official/audio/video-style token.
    #[must_use]
    pub fn strip_decorations(&self, text: &str) -> String {
        let mut cleaned = self.rx_bracket_tags.replace_all(text, "").into_owned();
        for pattern in &self.junk {
            cleaned = pattern.replace_all(&cleaned, "").into_owned();
        }
        cleaned = self.rx_empty_group.replace_all(&cleaned, "").into_owned();
        collapse_whitespace(&cleaned)
    }

    /// Recover a title that arrived wrapped in a CSV row
    /// (`<video id>,<ISRC>,"title"`). Returns `None` when the text is not
    /// CSV-shaped.
    #[must_use]
    pub fn unwrap_csv_mangled(&self, text: &str) -> Option<String> {
        let caps = self.rx_csv.captures(text.trim())?;
        let title = caps.get(3)?.as_str().replace("\"\"", "\"");
        if title.is_empty() {
            return None;
        }
        Some(title)
    }
}
