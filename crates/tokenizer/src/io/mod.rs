//! Serialization and deserialization for BPE models.
//!
//! Tokenizers are stored as a single JSON file holding the target
//! vocabulary size, the merge rules and every token's bytes.

pub mod format;
pub mod load;
pub mod save;

pub use format::{SerializedMerge, SerializedToken, SerializedTokenizer, FORMAT_VERSION};
pub use load::{LoadedModel, TokenizerLoader};
pub use save::TokenizerSaver;
