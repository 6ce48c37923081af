//! Corpus loading
//!
//! Reads every export fragment in an archive directory, repairs the
//! mangled apostrophe on the raw bytes, and merges the fragments into a
//! single in-memory [`Corpus`]. Any unreadable or malformed fragment
//! aborts the load: a partial corpus skews both the Markov chains and the
//! nickname history without any visible sign.

mod repair;

pub use repair::repair_bytes;

use crate::models::{ExportFragment, RawMessage};
use indexmap::IndexSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// File extension that marks an export fragment
const FRAGMENT_EXTENSION: &str = "json";

/// Errors that abort corpus loading
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    #[error("{} is not a valid export fragment: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No export fragments (*.json) found in {}", .0.display())]
    NoFragments(PathBuf),
}

/// All messages and participants of one archive
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Messages in file-then-list order
    pub messages: Vec<RawMessage>,
    /// Participant names, deduplicated, in first-appearance order
    pub participants: IndexSet<String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one fragment into the corpus.
    pub fn absorb(&mut self, fragment: ExportFragment) {
        self.participants
            .extend(fragment.participants.into_iter().map(|p| p.name));
        self.messages.extend(fragment.messages);
    }

    pub fn from_fragments(fragments: impl IntoIterator<Item = ExportFragment>) -> Self {
        let mut corpus = Self::new();
        for fragment in fragments {
            corpus.absorb(fragment);
        }
        corpus
    }
}

/// Parse one fragment from raw file bytes.
pub fn decode_fragment(path: &Path, raw: &[u8]) -> Result<ExportFragment, CorpusError> {
    let text = String::from_utf8(repair_bytes(raw)).map_err(|source| CorpusError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse one fragment file.
pub fn load_fragment(path: &Path) -> Result<ExportFragment, CorpusError> {
    let raw = std::fs::read(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let fragment = decode_fragment(path, &raw)?;
    debug!(
        "Loaded {} ({} messages, {} participants)",
        path.display(),
        fragment.messages.len(),
        fragment.participants.len()
    );
    Ok(fragment)
}

/// List the fragment files directly inside `dir`, sorted by file name.
pub fn discover_fragments(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let io_err = |source| CorpusError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut fragments = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_fragment = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(FRAGMENT_EXTENSION));
        if is_fragment {
            fragments.push(path);
        }
    }
    fragments.sort();
    Ok(fragments)
}

/// Load every fragment in `dir` into one corpus.
pub fn load_corpus(dir: &Path) -> Result<Corpus, CorpusError> {
    let paths = discover_fragments(dir)?;
    if paths.is_empty() {
        return Err(CorpusError::NoFragments(dir.to_path_buf()));
    }

    let mut corpus = Corpus::new();
    for path in &paths {
        corpus.absorb(load_fragment(path)?);
    }

    info!(
        "Loaded {} messages from {} fragment(s), {} participants",
        corpus.messages.len(),
        paths.len(),
        corpus.participants.len()
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &[u8]) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_absorb_deduplicates_participants() {
        let a: ExportFragment = serde_json::from_str(
            r#"{"participants": [{"name": "Ann"}, {"name": "Bo"}],
                "messages": [{"sender_name": "Ann", "content": "one"}]}"#,
        )
        .unwrap();
        let b: ExportFragment = serde_json::from_str(
            r#"{"participants": [{"name": "Bo"}, {"name": "Cy"}],
                "messages": [{"sender_name": "Cy", "content": "two"}]}"#,
        )
        .unwrap();

        let corpus = Corpus::from_fragments([a, b]);
        assert_eq!(
            corpus.participants.iter().collect::<Vec<_>>(),
            vec!["Ann", "Bo", "Cy"]
        );
        let contents: Vec<_> = corpus.messages.iter().filter_map(|m| m.text()).collect();
        assert_eq!(contents, vec!["one", "two"]);
    }

    #[test]
    fn test_decode_repairs_before_parsing() {
        let raw = concat!(
            r#"{"messages": [{"content": "it"#,
            "\\u00e2\\u0080\\u0099",
            r#"s here"}]}"#
        );
        let fragment = decode_fragment(Path::new("message_1.json"), raw.as_bytes()).unwrap();
        assert_eq!(fragment.messages[0].text(), Some("it's here"));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode_fragment(Path::new("bad.json"), b"{\"messages\": [\xff]}").unwrap_err();
        assert!(matches!(err, CorpusError::Decode { .. }));
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let err = decode_fragment(Path::new("bad.json"), b"{\"messages\": [").unwrap_err();
        assert!(matches!(err, CorpusError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_discover_only_json_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "message_2.json", b"{}");
        write(dir.path(), "message_1.json", b"{}");
        write(dir.path(), "notes.txt", b"ignored");
        std::fs::create_dir(dir.path().join("photos.json")).unwrap();

        let found = discover_fragments(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["message_1.json", "message_2.json"]);
    }

    #[test]
    fn test_load_corpus_merges_fragments() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "message_1.json",
            br#"{"participants": [{"name": "Ann"}], "messages": [{"content": "a"}]}"#,
        );
        write(
            dir.path(),
            "message_2.json",
            br#"{"participants": [{"name": "Ann"}, {"name": "Bo"}], "messages": [{"content": "b"}]}"#,
        );

        let corpus = load_corpus(dir.path()).unwrap();
        assert_eq!(corpus.messages.len(), 2);
        assert_eq!(corpus.participants.len(), 2);
    }

    #[test]
    fn test_load_corpus_fails_on_any_bad_fragment() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "message_1.json", br#"{"messages": []}"#);
        write(dir.path(), "message_2.json", b"not json");

        let err = load_corpus(dir.path()).unwrap_err();
        assert!(matches!(err, CorpusError::Parse { .. }));
    }

    #[test]
    fn test_load_corpus_without_fragments() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_corpus(dir.path()).unwrap_err();
        assert!(matches!(err, CorpusError::NoFragments(_)));
    }

    #[test]
    fn test_load_corpus_missing_dir() {
        let err = load_corpus(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }
}
