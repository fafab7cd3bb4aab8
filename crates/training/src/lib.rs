//! Bytepair-training - BPE training infrastructure
//!
//! This crate learns BPE merge rules from a text corpus.
//!
//! # Features
//!
//! - Byte-level training: the corpus is an opaque UTF-8 byte stream
//! - Reproducible merge order with a fixed tie-break on equal frequencies
//! - Early stop once no adjacent pairs remain
//!
//! # Example
//!
//! ```rust
//! use bytepair_training::{BpeTrainer, TrainingConfig};
//!
//! let trainer = BpeTrainer::new(TrainingConfig {
//!     vocab_size: 258,
//!     ..Default::default()
//! });
//! let (merges, vocab) = trainer.train("aaaa")?;
//! assert_eq!(merges.len(), 2);
//! assert_eq!(vocab.get(257), Some(&b"aaaa"[..]));
//! # Ok::<(), bytepair_training::TokenizerError>(())
//! ```

pub use bytepair_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{BpeTrainer, TrainingConfig};
