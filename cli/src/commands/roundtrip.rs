//! Roundtrip command implementation.

use super::{read_input, ModelArgs};
use anyhow::Result as AnyhowResult;
use clap::Parser;

/// Roundtrip command arguments.
#[derive(Parser)]
pub struct RoundtripCommand {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Text to encode and decode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,
}

pub fn run(cmd: RoundtripCommand) -> AnyhowResult<()> {
    let tokenizer = cmd.model.open()?;
    let text = read_input(&cmd.input)?;

    let ids = tokenizer.encode(&text);
    let decoded = tokenizer.decode(&ids)?;

    println!("Original text: {}", text);
    println!("Token IDs: {}", serde_json::to_string(&ids)?);
    println!("Number of tokens: {}", ids.len());
    println!("Decoded text: {}", decoded);
    println!("Match: {}", if decoded == text { "yes" } else { "no" });

    Ok(())
}
