//! Encode command implementation.

use super::{read_input, ModelArgs};
use anyhow::Result as AnyhowResult;
use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = cmd.model.open()?;
    let text = read_input(&cmd.input)?;

    let ids = tokenizer.encode(&text);
    let output = serde_json::to_string(&ids)?;

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("Encoded {} tokens to {}", ids.len(), path);
        }
        None => {
            println!("{}", output);
            println!("Number of tokens: {}", ids.len());
        }
    }

    Ok(())
}
