//! Encoding and decoding against learned merge tables.

pub mod byte_level;

pub use byte_level::ByteLevelEncoder;
