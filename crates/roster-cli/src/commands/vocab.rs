use std::path::PathBuf;

use anyhow::{Context, Result};

use roster_core::vocab::Vocabulary;

/// Write the active vocabulary tables as TOML, to a file or stdout.
pub fn dump_vocab(vocabulary: &Vocabulary, out: Option<PathBuf>) -> Result<()> {
    let rendered =
        toml::to_string_pretty(vocabulary).context("Failed to render vocabulary as TOML")?;

    match out {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote vocabulary tables to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
