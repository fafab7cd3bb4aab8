//! Decode command implementation.

use super::{read_input, ModelArgs};
use anyhow::Result as AnyhowResult;
use bytepair_tokenizer::parse_token_ids;
use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Token IDs to decode, e.g. "[256, 370, 401]" or "256,370,401" ("-" reads stdin)
    #[arg(long)]
    pub tokens: String,
}

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = cmd.model.open()?;

    let ids = parse_token_ids(&read_input(&cmd.tokens)?)?;
    let text = tokenizer.decode(&ids)?;

    println!("{}", text);

    Ok(())
}
