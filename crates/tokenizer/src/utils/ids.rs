//! Parsing of caller-supplied token ID lists.
//!
//! Accepts either a JSON array (`[256, 370, 401]`) or plain IDs separated
//! by commas and/or whitespace (`256, 370 401`).

use bytepair_core::{Result, TokenizerError};
use serde_json::Value;

/// Parse a list of token IDs.
///
/// Empty input is an empty list. Anything that is not a non-negative
/// integer fitting in `u32` is rejected.
pub fn parse_token_ids(input: &str) -> Result<Vec<u32>> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with(['[', '{', '"']) {
        parse_json(trimmed)
    } else {
        trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u32>().map_err(|_| {
                    TokenizerError::InvalidInput(format!("'{}' is not a valid token ID", part))
                })
            })
            .collect()
    }
}

fn parse_json(input: &str) -> Result<Vec<u32>> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| TokenizerError::InvalidInput(format!("malformed token list: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(TokenizerError::InvalidInput(format!(
                "token IDs must be a list of integers, got {}",
                other
            )))
        }
    };

    items
        .iter()
        .map(|item| {
            item.as_u64()
                .and_then(|id| u32::try_from(id).ok())
                .ok_or_else(|| {
                    TokenizerError::InvalidInput(format!("'{}' is not a valid token ID", item))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        assert_eq!(parse_token_ids("[256, 370, 401]").unwrap(), vec![256, 370, 401]);
        assert_eq!(parse_token_ids("  []  ").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_separated_list() {
        assert_eq!(parse_token_ids("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_token_ids("1 2\t3\n").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_token_ids("256, 370 ,401").unwrap(), vec![256, 370, 401]);
        assert_eq!(parse_token_ids("42").unwrap(), vec![42]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_token_ids("").unwrap().is_empty());
        assert!(parse_token_ids("   ").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_negative() {
        assert!(matches!(
            parse_token_ids("[1, -2]"),
            Err(TokenizerError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_token_ids("1, -2"),
            Err(TokenizerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_non_integer() {
        for input in ["[1.5]", "[\"7\"]", "[null]", "[[1]]", "1, x", "2.0"] {
            assert!(
                matches!(parse_token_ids(input), Err(TokenizerError::InvalidInput(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(parse_token_ids("[4294967296]").is_err());
        assert!(parse_token_ids("4294967296").is_err());
        assert_eq!(parse_token_ids("[4294967295]").unwrap(), vec![u32::MAX]);
    }

    #[test]
    fn test_rejects_non_list_json() {
        assert!(parse_token_ids("{\"ids\": [1]}").is_err());
        assert!(parse_token_ids("\"1,2\"").is_err());
        assert!(parse_token_ids("[1, 2").is_err());
    }
}
