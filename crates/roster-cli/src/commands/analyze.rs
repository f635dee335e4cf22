use std::path::PathBuf;

use anyhow::{Context, Result};

use roster_core::vocab::Vocabulary;
use roster_core::CommentAnalysis;
use roster_sentiment::CommentAnalysisEngine;

use super::read_lines;

/// Analyze a single comment and print the result.
pub fn run_analyze(vocabulary: &Vocabulary, text: &str, json: bool) -> Result<()> {
    let engine = build_engine(vocabulary)?;
    let analysis = engine.analyze_comment(text);

    if json {
        println!("{}", serde_json::to_string(&analysis)?);
    } else {
        print_analysis(&analysis);
    }

    Ok(())
}

/// Analyze one comment per input line into JSON lines.
pub fn run_batch_analyze(vocabulary: &Vocabulary, input: Option<PathBuf>) -> Result<()> {
    let engine = build_engine(vocabulary)?;

    let mut count = 0usize;
    for line in read_lines(input)? {
        let line = line.context("Failed to read input line")?;
        if line.trim().is_empty() {
            continue;
        }

        let analysis = engine.analyze_comment(&line);
        println!("{}", serde_json::to_string(&analysis)?);
        count += 1;
    }

    eprintln!("Analyzed {count} comments");
    Ok(())
}

fn build_engine(vocabulary: &Vocabulary) -> Result<CommentAnalysisEngine> {
    CommentAnalysisEngine::new(vocabulary.sentiment.clone())
        .context("Failed to build comment analysis engine")
}

fn print_analysis(analysis: &CommentAnalysis) {
    println!(
        "Sentiment: {} (confidence {:.2})",
        analysis.sentiment, analysis.confidence
    );
    println!("Intent:    {}", analysis.intent);
    println!("Aspect:    {}", analysis.aspect);
    println!("Boosters:  {:.2}", analysis.booster_score);
    if analysis.beat_appreciation {
        println!("Beat appreciation: yes");
    }
    println!("Why:       {}", analysis.explanation);
}
