//! CLI commands for the bytepair tokenizer.

pub mod decode;
pub mod encode;
pub mod roundtrip;
pub mod train;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use roundtrip::RoundtripCommand;
pub use train::TrainCommand;

use anyhow::{Context, Result as AnyhowResult};
use bytepair_tokenizer::{Tokenizer, TokenizerConfig};
use clap::Args;
use std::io::Read;
use std::path::Path;

/// Where to find the trained model, and how to build it if it is missing.
#[derive(Args)]
pub struct ModelArgs {
    /// Path to the trained tokenizer file
    #[arg(short, long)]
    pub tokenizer: String,

    /// Corpus to train on when the tokenizer file does not exist yet
    #[arg(short, long)]
    pub corpus: Option<String>,

    /// Target vocabulary size when training from --corpus
    #[arg(short, long, default_value_t = 5_000)]
    pub vocab_size: usize,
}

impl ModelArgs {
    /// Load the tokenizer, training it first when a corpus was given and no
    /// model exists.
    pub fn open(&self) -> AnyhowResult<Tokenizer> {
        let model_path = Path::new(&self.tokenizer);

        let tokenizer = match &self.corpus {
            Some(corpus) => {
                let config = TokenizerConfig {
                    vocab_size: self.vocab_size,
                    ..Default::default()
                };
                Tokenizer::load_or_train(model_path, Path::new(corpus), config)?
            }
            None => Tokenizer::load(model_path)
                .with_context(|| format!("failed to load tokenizer {}", self.tokenizer))?,
        };

        Ok(tokenizer)
    }
}

/// Read the input argument, or stdin when it is "-".
pub fn read_input(input: &str) -> AnyhowResult<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        Ok(input.to_string())
    }
}
