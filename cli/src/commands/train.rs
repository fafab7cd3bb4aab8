//! Train command implementation.

use anyhow::{Context, Result as AnyhowResult};
use bytepair_tokenizer::Tokenizer;
use clap::Parser;
use log::info;
use std::path::Path;
use std::time::Instant;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus
    #[arg(short, long)]
    pub input: String,

    /// Output file for the trained tokenizer
    #[arg(short, long)]
    pub output: String,

    /// Target vocabulary size
    #[arg(short, long, default_value_t = 5_000)]
    pub vocab_size: usize,

    /// Log progress every this many merges
    #[arg(short, long, default_value_t = 250)]
    pub progress_interval: usize,

    /// Text used for the round-trip check after training
    #[arg(short, long, default_value = "एकवचनम्")]
    pub sample: String,
}

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    // Invalid UTF-8 in the corpus is replaced, not fatal
    let raw = std::fs::read(&cmd.input)
        .with_context(|| format!("failed to read corpus {}", cmd.input))?;
    let data = String::from_utf8_lossy(&raw);
    info!("Loaded corpus {}: {} characters", cmd.input, data.chars().count());

    let mut tokenizer = Tokenizer::builder()
        .vocab_size(cmd.vocab_size)
        .progress_interval(cmd.progress_interval)
        .build()?;

    let start = Instant::now();
    tokenizer.train(&data)?;
    info!("Training completed in {:.2}s", start.elapsed().as_secs_f64());

    tokenizer.save(Path::new(&cmd.output))?;

    println!("Tokenizer saved to {}", cmd.output);
    println!("Vocabulary size: {}", tokenizer.vocab_size());
    println!("Number of merges: {}", tokenizer.merges().len());

    let encoded = tokenizer.encode(&cmd.sample);
    let decoded = tokenizer.decode(&encoded)?;
    println!();
    println!("Original: {}", cmd.sample);
    println!("Encoded: {:?}", encoded);
    println!("Decoded: {}", decoded);
    println!("Match: {}", decoded == cmd.sample);

    Ok(())
}
