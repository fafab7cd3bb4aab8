//! Training infrastructure for BPE tokenizers.
//!
//! This module provides the training algorithm for learning BPE merge
//! rules from text data.

pub mod trainer;

pub use trainer::{BpeTrainer, TrainingConfig};
