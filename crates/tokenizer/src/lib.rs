//! Bytepair-tokenizer - High-level tokenizer API
//!
//! This crate provides a user-friendly interface for byte-level BPE
//! tokenization, integrating training, encoding, decoding and persistence
//! into a single API.
//!
//! # Features
//!
//! - Simple builder pattern for tokenizer configuration
//! - Lossless encode/decode for any UTF-8 text
//! - Parallel batch encoding
//! - Validated JSON persistence and a load-or-train startup step
//!
//! # Example
//!
//! ```rust
//! use bytepair_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::builder().vocab_size(300).build()?;
//! tokenizer.train("hello hello hello world")?;
//!
//! let ids = tokenizer.encode("hello world");
//! assert_eq!(tokenizer.decode(&ids)?, "hello world");
//! # Ok::<(), bytepair_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use bytepair_core::{MergeRules, Pair, Result, TokenizerError, Vocabulary};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Tokenizer, TokenizerBuilder, TokenizerConfig};

// IO/Serialization
pub mod io;
pub use io::{LoadedModel, TokenizerLoader, TokenizerSaver};

// Utilities
pub mod utils;
pub use utils::parse_token_ids;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
