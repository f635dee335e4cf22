use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};

pub mod analyze;
pub mod parse;
pub mod vocab;

pub use analyze::{run_analyze, run_batch_analyze};
pub use parse::{run_batch_parse, run_parse};
pub use vocab::dump_vocab;

/// Line iterator over the given file, or stdin when no file was given.
pub(crate) fn read_lines(
    input: Option<PathBuf>,
) -> Result<Box<dyn Iterator<Item = io::Result<String>>>> {
    match input {
        Some(path) => {
            let file = std::fs::File::open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(Box::new(io::BufReader::new(file).lines()))
        }
        None => Ok(Box::new(io::stdin().lock().lines())),
    }
}
