//! Save functionality for trained tokenizers.

use super::format::{SerializedMerge, SerializedToken, SerializedTokenizer, FORMAT_VERSION};
use bytepair_core::{MergeRules, Result, TokenizerError, Vocabulary};
use log::info;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Tokenizer saver - handles saving trained models.
pub struct TokenizerSaver<'a> {
    /// Merge rules reference
    merges: &'a MergeRules,
    /// Vocabulary reference
    vocab: &'a Vocabulary,
    /// Target vocabulary size
    vocab_size: usize,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(merges: &'a MergeRules, vocab: &'a Vocabulary, vocab_size: usize) -> Self {
        Self {
            merges,
            vocab,
            vocab_size,
        }
    }

    /// Save the tokenizer to a JSON file, creating parent directories.
    ///
    /// The record is written to a temporary file next to `path` and renamed
    /// into place, so an existing model is only replaced by a complete one.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent).map_err(|e| TokenizerError::io(parent, e))?;
                parent
            }
            None => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(parent).map_err(|e| TokenizerError::io(parent, e))?;
        self.write_to(BufWriter::new(&mut file))
            .map_err(|e| TokenizerError::Save(format!("{}: {}", path.display(), e)))?;
        file.as_file()
            .sync_all()
            .map_err(|e| TokenizerError::io(file.path(), e))?;
        file.persist(path)
            .map_err(|e| TokenizerError::io(path, e.error))?;

        info!(
            "Saved tokenizer to {} ({} merges, {} tokens)",
            path.display(),
            self.merges.len(),
            self.vocab.len()
        );
        Ok(())
    }

    /// Write the JSON record to any writer and flush it.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, &self.serialize())?;
        writer
            .flush()
            .map_err(|e| TokenizerError::Save(format!("Failed to flush tokenizer: {}", e)))
    }

    /// Serialize the tokenizer to a structure.
    pub(crate) fn serialize(&self) -> SerializedTokenizer {
        let merges = self
            .merges
            .iter()
            .map(|(pair, id)| SerializedMerge {
                pair: [pair.0, pair.1],
                id,
            })
            .collect();

        let vocab = self
            .vocab
            .iter()
            .map(|(id, bytes)| SerializedToken {
                id,
                bytes: bytes.to_vec(),
            })
            .collect();

        SerializedTokenizer {
            version: FORMAT_VERSION.to_string(),
            vocab_size: self.vocab_size,
            merges,
            vocab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let mut merges = MergeRules::new();
        let mut vocab = Vocabulary::new();
        let id = merges.push((97, 98)).unwrap();
        vocab.add_merge((97, 98), id).unwrap();

        let saver = TokenizerSaver::new(&merges, &vocab, 1000);
        let serialized = saver.serialize();

        assert_eq!(serialized.version, FORMAT_VERSION);
        assert_eq!(serialized.vocab_size, 1000);
        assert_eq!(
            serialized.merges,
            vec![SerializedMerge {
                pair: [97, 98],
                id: 256
            }]
        );
        assert_eq!(serialized.vocab.len(), 257);
        assert_eq!(serialized.vocab[0].bytes, vec![0]);
        assert_eq!(serialized.vocab[256].bytes, b"ab".to_vec());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("model.json");

        let merges = MergeRules::new();
        let vocab = Vocabulary::new();
        TokenizerSaver::new(&merges, &vocab, 256).save(&path).unwrap();

        assert!(path.is_file());
    }

    #[test]
    fn test_save_replaces_existing_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let merges = MergeRules::new();
        let vocab = Vocabulary::new();
        TokenizerSaver::new(&merges, &vocab, 256).save(&path).unwrap();

        let mut merges = MergeRules::new();
        let mut vocab = Vocabulary::new();
        let id = merges.push((97, 98)).unwrap();
        vocab.add_merge((97, 98), id).unwrap();
        TokenizerSaver::new(&merges, &vocab, 300).save(&path).unwrap();

        let saved: crate::io::SerializedTokenizer =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(saved.vocab_size, 300);
        assert_eq!(saved.merges.len(), 1);

        // Only the model itself is left behind
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_failed_save_keeps_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        // A non-empty directory cannot be replaced by a file
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep.txt"), b"keep").unwrap();

        let merges = MergeRules::new();
        let vocab = Vocabulary::new();
        let result = TokenizerSaver::new(&merges, &vocab, 256).save(&path);

        assert!(matches!(result, Err(TokenizerError::Io { .. })));
        assert_eq!(std::fs::read(path.join("keep.txt")).unwrap(), b"keep");
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
