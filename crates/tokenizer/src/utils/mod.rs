//! Utility functions for the tokenizer.

pub mod ids;

pub use ids::parse_token_ids;
