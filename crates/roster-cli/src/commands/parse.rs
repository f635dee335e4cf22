use std::path::PathBuf;

use anyhow::{Context, Result};

use roster_attribution::TitleAttributionEngine;
use roster_core::vocab::Vocabulary;
use roster_core::ParsedTitle;

use super::read_lines;

/// Parse a single title and print the attribution.
pub fn run_parse(
    vocabulary: &Vocabulary,
    title: &str,
    channel: Option<&str>,
    json: bool,
) -> Result<()> {
    let engine = build_engine(vocabulary)?;
    let parsed = engine.parse_title(title, channel);

    if json {
        println!("{}", serde_json::to_string(&parsed)?);
    } else {
        print_parsed(&parsed);
    }

    Ok(())
}

/// Parse tab-separated `title<TAB>channel` lines into JSON lines.
pub fn run_batch_parse(vocabulary: &Vocabulary, input: Option<PathBuf>) -> Result<()> {
    let engine = build_engine(vocabulary)?;

    let mut count = 0usize;
    for line in read_lines(input)? {
        let line = line.context("Failed to read input line")?;
        if line.trim().is_empty() {
            continue;
        }

        let (title, channel) = match line.split_once('\t') {
            Some((title, channel)) if !channel.trim().is_empty() => {
                (title, Some(channel.trim()))
            }
            Some((title, _)) => (title, None),
            None => (line.as_str(), None),
        };

        let parsed = engine.parse_title(title, channel);
        println!("{}", serde_json::to_string(&parsed)?);
        count += 1;
    }

    // Stdout carries the JSON stream; the summary goes to stderr.
    eprintln!("Parsed {count} titles");
    Ok(())
}

fn build_engine(vocabulary: &Vocabulary) -> Result<TitleAttributionEngine> {
    TitleAttributionEngine::new(vocabulary.title.clone())
        .context("Failed to build title attribution engine")
}

fn print_parsed(parsed: &ParsedTitle) {
    println!("Title:    {}", parsed.cleaned_title);
    println!("Primary:  {}", join_or_dash(&parsed.primary_artists));
    println!("Featured: {}", join_or_dash(&parsed.featured_artists));
    println!("Version:  {}", parsed.version_type);
    if let Some(broadcaster) = &parsed.broadcaster {
        println!("Broadcaster: {broadcaster}");
    }
}

fn join_or_dash(artists: &[String]) -> String {
    if artists.is_empty() {
        "-".to_string()
    } else {
        artists.join(", ")
    }
}
