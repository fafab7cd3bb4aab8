//! BPE trainer implementation.
//!
//! Training repeatedly counts adjacent pairs over the whole corpus, merges
//! the most frequent one everywhere, and records it as the next merge rule.

use bytepair_core::{
    count_pairs, merge_pair, MergeCandidate, MergeRules, Result, TokenizerError, Vocabulary,
    BYTE_VOCAB_SIZE,
};
use log::{debug, info};

/// Configuration for BPE training.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Target vocabulary size, including the 256 byte tokens
    pub vocab_size: usize,
    /// Log progress every this many merges
    pub progress_interval: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            vocab_size: 5_000,
            progress_interval: 250,
        }
    }
}

impl TrainingConfig {
    /// Maximum number of merges this configuration allows.
    pub fn num_merges(&self) -> usize {
        self.vocab_size.saturating_sub(BYTE_VOCAB_SIZE)
    }

    /// Check the configuration before training.
    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(TokenizerError::InvalidConfig(
                "progress_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// BPE trainer.
///
/// Trains a byte-level BPE merge table from text by iteratively merging the
/// most frequent adjacent pair. Ties on frequency go to the lowest pair so
/// training is reproducible.
pub struct BpeTrainer {
    /// Configuration
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new BPE trainer with the default progress interval.
    pub fn with_vocab_size(vocab_size: usize) -> Self {
        Self::new(TrainingConfig {
            vocab_size,
            ..Default::default()
        })
    }

    /// Get the trainer configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on the UTF-8 bytes of `text`.
    ///
    /// # Returns
    /// The learned merge rules and the vocabulary built alongside them
    pub fn train(&self, text: &str) -> Result<(MergeRules, Vocabulary)> {
        self.train_bytes(text.as_bytes())
    }

    /// Train on a raw byte corpus.
    pub fn train_bytes(&self, corpus: &[u8]) -> Result<(MergeRules, Vocabulary)> {
        self.config.validate()?;

        let num_merges = self.config.num_merges();
        // A corpus of n bytes saturates after at most n - 1 merges
        let capacity = num_merges.min(corpus.len().saturating_sub(1));
        let mut merges = MergeRules::with_capacity(capacity);
        let mut vocab = Vocabulary::with_capacity(BYTE_VOCAB_SIZE + capacity);
        let mut ids: Vec<u32> = corpus.iter().map(|&b| u32::from(b)).collect();

        info!(
            "Training on {} bytes, up to {} merges",
            corpus.len(),
            num_merges
        );

        for i in 0..num_merges {
            let candidate = match MergeCandidate::best(&count_pairs(&ids)) {
                Some(c) => c,
                None => {
                    info!(
                        "Corpus saturated after {} merges ({} tokens left)",
                        i,
                        ids.len()
                    );
                    break;
                }
            };

            let new_token_id = merges.push(candidate.pair)?;
            vocab.add_merge(candidate.pair, new_token_id)?;
            ids = merge_pair(&ids, candidate.pair, new_token_id);

            debug!(
                "Merge {}: ({}, {}) x{} -> {}",
                i + 1,
                candidate.pair.0,
                candidate.pair.1,
                candidate.count,
                new_token_id
            );
            if (i + 1) % self.config.progress_interval == 0 {
                info!("Progress: {}/{} merges completed", i + 1, num_merges);
            }
        }

        info!(
            "Training finished: {} merges, vocabulary size {}, corpus compressed to {} tokens",
            merges.len(),
            vocab.len(),
            ids.len()
        );

        Ok((merges, vocab))
    }
}

impl Default for BpeTrainer {
    fn default() -> Self {
        Self::new(TrainingConfig::default())
    }
}
