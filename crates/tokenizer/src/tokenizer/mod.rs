//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties the
//! trainer, the byte-level encoder and persistence together.

use crate::io::{TokenizerLoader, TokenizerSaver};
use bytepair_core::{ByteLevelEncoder, MergeRules, Result, TokenizerError, Vocabulary};
use bytepair_training::{BpeTrainer, TrainingConfig};
use log::info;
use std::path::Path;

/// Configuration for building a tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Target vocabulary size, including the 256 byte tokens
    pub vocab_size: usize,
    /// Log training progress every this many merges
    pub progress_interval: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        let training = TrainingConfig::default();
        Self {
            vocab_size: training.vocab_size,
            progress_interval: training.progress_interval,
        }
    }
}

impl TokenizerConfig {
    fn training_config(&self) -> TrainingConfig {
        TrainingConfig {
            vocab_size: self.vocab_size,
            progress_interval: self.progress_interval,
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target vocabulary size.
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.config.vocab_size = size;
        self
    }

    /// Set how often training reports progress.
    pub fn progress_interval(mut self, merges: usize) -> Self {
        self.config.progress_interval = merges;
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        Tokenizer::new(self.config)
    }
}

/// Main tokenizer struct.
///
/// Before training it knows only the 256 byte tokens, which is already
/// enough to encode and decode any text losslessly. `encode` and `decode`
/// take `&self` and can be called from many threads at once; `train` needs
/// `&mut self`.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Configuration
    config: TokenizerConfig,
    /// Byte-level encoder holding the merge rules and vocabulary
    encoder: ByteLevelEncoder,
}

impl Tokenizer {
    /// Create an untrained tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        config.training_config().validate()?;

        Ok(Self {
            config,
            encoder: ByteLevelEncoder::bytes_only(),
        })
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    fn from_parts(config: TokenizerConfig, merges: MergeRules, vocab: Vocabulary) -> Self {
        Self {
            config,
            encoder: ByteLevelEncoder::new(merges, vocab),
        }
    }

    /// Train the tokenizer on text data.
    ///
    /// Any previously learned merges are discarded.
    pub fn train(&mut self, data: &str) -> Result<()> {
        let trainer = BpeTrainer::new(self.config.training_config());
        let (merges, vocab) = trainer.train(data)?;

        self.encoder = ByteLevelEncoder::new(merges, vocab);
        Ok(())
    }

    /// Encode text to token IDs.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.encoder.encode(text)
    }

    /// Encode a batch of texts (parallelized).
    ///
    /// Results are in input order.
    pub fn encode_batch<S>(&self, texts: &[S]) -> Vec<Vec<u32>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.encode(text.as_ref()))
            .collect()
    }

    /// Decode token IDs back to text.
    ///
    /// Fails with `UnknownTokenId` for an ID outside the vocabulary. Byte
    /// sequences that are not valid UTF-8 decode to U+FFFD.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        self.encoder.decode(ids)
    }

    /// Get the raw bytes behind a token ID.
    pub fn token_bytes(&self, id: u32) -> Option<&[u8]> {
        self.encoder.vocab().get(id)
    }

    /// Get the number of known tokens.
    pub fn vocab_size(&self) -> usize {
        self.encoder.vocab().len()
    }

    /// Get the vocabulary size training aims for.
    pub fn target_vocab_size(&self) -> usize {
        self.config.vocab_size
    }

    /// Get a reference to the merge rules.
    pub fn merges(&self) -> &MergeRules {
        self.encoder.merges()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        self.encoder.vocab()
    }

    /// Get the configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Save the tokenizer to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        TokenizerSaver::new(self.merges(), self.vocab(), self.config.vocab_size).save(path)
    }

    /// Load a tokenizer from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let model = TokenizerLoader::load(path)?;
        let config = TokenizerConfig {
            vocab_size: model.vocab_size,
            ..Default::default()
        };

        Ok(Self::from_parts(config, model.merges, model.vocab))
    }

    /// Load the model at `model_path`, or train one and save it there.
    ///
    /// Training reads `corpus_path`; invalid UTF-8 in the corpus becomes
    /// U+FFFD. The corpus is only needed when no model exists yet.
    pub fn load_or_train(
        model_path: &Path,
        corpus_path: &Path,
        config: TokenizerConfig,
    ) -> Result<Self> {
        if model_path.exists() {
            info!("Loading pre-trained tokenizer from {}", model_path.display());
            return Self::load(model_path);
        }

        info!(
            "No tokenizer at {}, training from {}",
            model_path.display(),
            corpus_path.display()
        );
        let raw = std::fs::read(corpus_path)
            .map_err(|e| TokenizerError::io(corpus_path, e))?;
        let text = String::from_utf8_lossy(&raw);

        let mut tokenizer = Self::new(config)?;
        tokenizer.train(&text)?;
        tokenizer.save(model_path)?;

        Ok(tokenizer)
    }
}
