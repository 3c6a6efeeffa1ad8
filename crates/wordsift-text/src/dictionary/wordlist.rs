// Word list dictionaries
//
// A word list has one word per line. Lines are trimmed and lowercased on
// load and blank lines are skipped. The classic `words` files shipped with
// Unix systems are ISO-8859-1, so both UTF-8 and Latin-1 decoding are
// supported.

use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use tracing::debug;

use super::Lexicon;

/// Error type for word list loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list file could not be read.
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A UTF-8 word list contained invalid bytes.
    #[error("word list is not valid UTF-8 (line {line})")]
    Encoding { line: usize },
}

/// Character encoding of a word list file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordListEncoding {
    /// UTF-8. Invalid input is rejected.
    #[default]
    Utf8,
    /// ISO-8859-1. Every byte maps to the code point of the same value, so
    /// decoding cannot fail.
    Latin1,
}

impl WordListEncoding {
    /// Decode raw word list bytes.
    pub fn decode(self, bytes: &[u8]) -> Result<String, DictionaryError> {
        match self {
            WordListEncoding::Utf8 => match std::str::from_utf8(bytes) {
                Ok(text) => Ok(text.to_string()),
                Err(e) => {
                    let valid = &bytes[..e.valid_up_to()];
                    let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
                    Err(DictionaryError::Encoding { line })
                }
            },
            WordListEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

/// Normalize one word list entry. Returns `None` for blank lines.
fn normalize_entry(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

/// A set of lowercase words.
///
/// Read-only after loading; it is `Send + Sync` and can be shared between
/// threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from individual words. Each word is trimmed and
    /// lowercased; blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize_entry(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Build a dictionary from word list text, one word per line.
    pub fn from_word_list(list: &str) -> Self {
        Self::from_words(list.lines())
    }

    /// Build a dictionary from raw word list bytes.
    pub fn from_bytes(bytes: &[u8], encoding: WordListEncoding) -> Result<Self, DictionaryError> {
        let text = encoding.decode(bytes)?;
        Ok(Self::from_word_list(&text))
    }

    /// Load a word list file.
    pub fn load(path: impl AsRef<Path>, encoding: WordListEncoding) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_bytes(&bytes, encoding)?;
        debug!(
            path = %path.display(),
            ?encoding,
            words = dict.len(),
            "loaded word list"
        );
        Ok(dict)
    }

    /// Add a word. Returns `true` if it was not present yet.
    pub fn insert(&mut self, word: &str) -> bool {
        match normalize_entry(word) {
            Some(word) => self.words.insert(word),
            None => false,
        }
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership test after lowercasing `word`.
    pub fn contains_ignore_case(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        Dictionary::contains(self, word)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
