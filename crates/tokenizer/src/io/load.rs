//! Load functionality for pre-trained tokenizers.
//!
//! A loaded record is rebuilt merge by merge and checked against the
//! stored vocabulary, so a tokenizer never runs on half-valid tables.

use super::format::{SerializedTokenizer, FORMAT_VERSION};
use bytepair_core::{MergeRules, Result, TokenizerError, Vocabulary, BYTE_VOCAB_SIZE};
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Tables recovered from a saved tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModel {
    /// Target vocabulary size the model was trained with
    pub vocab_size: usize,
    pub merges: MergeRules,
    pub vocab: Vocabulary,
}

/// Tokenizer loader - handles loading trained models.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load a tokenizer from a JSON file.
    pub fn load(path: &Path) -> Result<LoadedModel> {
        let file = File::open(path).map_err(|e| TokenizerError::io(path, e))?;
        let model = Self::read_from(BufReader::new(file))?;

        info!(
            "Loaded tokenizer from {} ({} merges, {} tokens)",
            path.display(),
            model.merges.len(),
            model.vocab.len()
        );
        Ok(model)
    }

    /// Read and validate a JSON record from any reader.
    pub fn read_from<R: Read>(reader: R) -> Result<LoadedModel> {
        let serialized: SerializedTokenizer = serde_json::from_reader(reader)
            .map_err(|e| TokenizerError::Load(format!("Failed to deserialize tokenizer: {}", e)))?;

        Self::deserialize(serialized)
    }

    /// Rebuild the tables from a serialized structure.
    fn deserialize(mut data: SerializedTokenizer) -> Result<LoadedModel> {
        if data.version != FORMAT_VERSION {
            return Err(TokenizerError::Load(format!(
                "unsupported format version {:?}, expected {:?}",
                data.version, FORMAT_VERSION
            )));
        }

        let max_merges = data.vocab_size.saturating_sub(BYTE_VOCAB_SIZE);
        if data.merges.len() > max_merges {
            return Err(TokenizerError::Load(format!(
                "{} merges exceed the {} allowed by vocab_size {}",
                data.merges.len(),
                max_merges,
                data.vocab_size
            )));
        }

        // IDs define the order, not the position in the file
        data.merges.sort_by_key(|m| m.id);
        data.vocab.sort_by_key(|t| t.id);

        let mut merges = MergeRules::with_capacity(data.merges.len());
        let mut vocab = Vocabulary::with_capacity(BYTE_VOCAB_SIZE + data.merges.len());

        for record in &data.merges {
            let pair = (record.pair[0], record.pair[1]);
            let id = merges.push(pair).map_err(|e| TokenizerError::Load(e.to_string()))?;
            if id != record.id {
                return Err(TokenizerError::Load(format!(
                    "merge ({}, {}) has id {}, expected {}",
                    pair.0, pair.1, record.id, id
                )));
            }
            vocab
                .add_merge(pair, id)
                .map_err(|e| TokenizerError::Load(e.to_string()))?;
        }

        if data.vocab.len() != vocab.len() {
            return Err(TokenizerError::Load(format!(
                "vocabulary has {} entries, expected {}",
                data.vocab.len(),
                vocab.len()
            )));
        }

        for (index, token) in data.vocab.iter().enumerate() {
            if token.id as usize != index {
                return Err(TokenizerError::Load(format!(
                    "vocabulary is missing id {} (found {} in its place)",
                    index, token.id
                )));
            }
            if vocab.get(token.id) != Some(token.bytes.as_slice()) {
                return Err(TokenizerError::Load(format!(
                    "bytes for token {} do not match its definition",
                    token.id
                )));
            }
        }

        Ok(LoadedModel {
            vocab_size: data.vocab_size,
            merges,
            vocab,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::save::TokenizerSaver;

    fn trained_record() -> SerializedTokenizer {
        let mut merges = MergeRules::new();
        let mut vocab = Vocabulary::new();
        for pair in [(97, 97), (256, 256)] {
            let id = merges.push(pair).unwrap();
            vocab.add_merge(pair, id).unwrap();
        }
        TokenizerSaver::new(&merges, &vocab, 258).serialize()
    }

    fn load_json(data: &SerializedTokenizer) -> Result<LoadedModel> {
        let json = serde_json::to_vec(data).unwrap();
        TokenizerLoader::read_from(json.as_slice())
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");

        let mut merges = MergeRules::new();
        let mut vocab = Vocabulary::new();
        let id = merges.push((104, 105)).unwrap();
        vocab.add_merge((104, 105), id).unwrap();
        TokenizerSaver::new(&merges, &vocab, 500).save(&path).unwrap();

        let loaded = TokenizerLoader::load(&path).unwrap();
        assert_eq!(loaded.vocab_size, 500);
        assert_eq!(loaded.merges, merges);
        assert_eq!(loaded.vocab, vocab);
    }

    #[test]
    fn test_accepts_shuffled_records() {
        let mut data = trained_record();
        data.merges.reverse();
        data.vocab.reverse();

        let loaded = load_json(&data).unwrap();
        assert_eq!(loaded.merges.get((97, 97)), Some(256));
        assert_eq!(loaded.merges.get((256, 256)), Some(257));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TokenizerLoader::load(&dir.path().join("absent.json"));

        assert!(matches!(result, Err(TokenizerError::Io { .. })));
    }

    #[test]
    fn test_truncated_json() {
        let json = serde_json::to_string(&trained_record()).unwrap();
        let truncated = &json[..json.len() / 2];

        assert!(matches!(
            TokenizerLoader::read_from(truncated.as_bytes()),
            Err(TokenizerError::Load(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut data = trained_record();
        data.version = "99".to_string();

        assert!(matches!(load_json(&data), Err(TokenizerError::Load(_))));
    }

    #[test]
    fn test_rejects_gap_in_merge_ids() {
        let mut data = trained_record();
        data.merges[1].id = 300;

        assert!(matches!(load_json(&data), Err(TokenizerError::Load(_))));
    }

    #[test]
    fn test_rejects_forward_reference() {
        let mut data = trained_record();
        data.merges[0].pair = [257, 97];

        assert!(matches!(load_json(&data), Err(TokenizerError::Load(_))));
    }

    #[test]
    fn test_rejects_missing_vocab_entry() {
        let mut data = trained_record();
        data.vocab.remove(10);

        assert!(matches!(load_json(&data), Err(TokenizerError::Load(_))));
    }

    #[test]
    fn test_rejects_duplicate_vocab_id() {
        let mut data = trained_record();
        data.vocab[10].id = 11;

        assert!(matches!(load_json(&data), Err(TokenizerError::Load(_))));
    }

    #[test]
    fn test_rejects_wrong_token_bytes() {
        let mut data = trained_record();
        data.vocab[257].bytes = b"aaa".to_vec();

        assert!(matches!(load_json(&data), Err(TokenizerError::Load(_))));

        let mut data = trained_record();
        data.vocab[65].bytes = vec![66];

        assert!(matches!(load_json(&data), Err(TokenizerError::Load(_))));
    }

    #[test]
    fn test_rejects_vocab_without_merges() {
        let mut data = trained_record();
        data.merges.pop();

        assert!(matches!(load_json(&data), Err(TokenizerError::Load(_))));
    }

    #[test]
    fn test_rejects_more_merges_than_vocab_size() {
        let mut data = trained_record();
        data.vocab_size = 257;

        assert!(matches!(load_json(&data), Err(TokenizerError::Load(_))));
    }
}
