// Text checking: find words a dictionary does not recognize
//
// Owns a dictionary and a normalizer and runs the whole pipeline:
// extract → normalize → lowercase → dictionary / compound lookup.
// The result keeps every word with its span so a renderer can mark the
// unrecognized ones in the original text.

use hashbrown::HashSet;
use tracing::{debug, trace};

use wordsift_core::character::is_numeric_word;
use wordsift_core::token::NormalizedWord;

use crate::dictionary::{Dictionary, Lexicon};
use crate::hyphen;
use crate::normalizer::{DEFAULT_CONNECTORS, Normalizer};
use crate::tokenizer;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for [`TextChecker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Never flag words made only of numeric characters.
    pub skip_numbers: bool,

    /// Connector words handed to the normalizer.
    pub connectors: Vec<String>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            skip_numbers: true,
            connectors: DEFAULT_CONNECTORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Result of checking one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Every normalized word, in text order.
    pub words: Vec<NormalizedWord>,

    /// The words that were not recognized, in text order.
    pub unknown: Vec<NormalizedWord>,
}

impl CheckReport {
    /// Number of distinct word texts.
    pub fn unique_words(&self) -> usize {
        count_unique(&self.words)
    }

    /// Number of distinct unrecognized word texts.
    pub fn unique_unknown(&self) -> usize {
        count_unique(&self.unknown)
    }

    /// Share of distinct words that are unrecognized, in percent. Zero for a
    /// text without words.
    pub fn percent_unknown(&self) -> f64 {
        let total = self.unique_words();
        if total == 0 {
            return 0.0;
        }
        self.unique_unknown() as f64 / total as f64 * 100.0
    }

    /// `true` when every word was recognized.
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty()
    }

    /// Character spans of the unrecognized words.
    pub fn unknown_spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.unknown.iter().map(|w| (w.start, w.end))
    }
}

fn count_unique(words: &[NormalizedWord]) -> usize {
    words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<HashSet<_>>()
        .len()
}

// ---------------------------------------------------------------------------
// TextChecker
// ---------------------------------------------------------------------------

/// Top-level checker owning a lexicon and the normalizer configuration.
///
/// All methods take `&self`; a checker can be shared between threads when
/// its lexicon can.
#[derive(Debug, Clone)]
pub struct TextChecker<L = Dictionary> {
    lexicon: L,
    normalizer: Normalizer,
    options: CheckOptions,
}

impl<L: Lexicon> TextChecker<L> {
    /// Create a checker with default options.
    pub fn new(lexicon: L) -> Self {
        Self::with_options(lexicon, CheckOptions::default())
    }

    /// Create a checker with explicit options.
    pub fn with_options(lexicon: L, options: CheckOptions) -> Self {
        let normalizer = Normalizer::with_connectors(options.connectors.iter().cloned());
        Self {
            lexicon,
            normalizer,
            options,
        }
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Set whether purely numeric words are skipped.
    pub fn set_skip_numbers(&mut self, value: bool) {
        self.options.skip_numbers = value;
    }

    /// Replace the connector list.
    pub fn set_connectors<I, S>(&mut self, connectors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.connectors = connectors.into_iter().map(Into::into).collect();
        self.normalizer = Normalizer::with_connectors(self.options.connectors.iter().cloned());
    }

    /// Extract and normalize the words of `text`.
    pub fn words(&self, text: &str) -> Vec<NormalizedWord> {
        let chars: Vec<char> = text.chars().collect();
        let tokens = tokenizer::extract_chars(&chars);
        self.normalizer.normalize_chars(&tokens, &chars)
    }

    /// Check a single normalized word. The word is lowercased; hyphenated
    /// words go through compound classification.
    pub fn is_known(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        hyphen::is_known(&lower, &self.lexicon)
    }

    /// Whether `word` is exempt from checking under the current options.
    fn is_skipped(&self, word: &str) -> bool {
        self.options.skip_numbers && is_numeric_word(word)
    }

    /// Check every word of `text`.
    pub fn check(&self, text: &str) -> CheckReport {
        let words = self.words(text);
        let unknown: Vec<NormalizedWord> = words
            .iter()
            .filter(|w| !self.is_skipped(&w.text) && !self.is_known(&w.text))
            .cloned()
            .collect();

        for word in &unknown {
            trace!(word = %word.text, start = word.start, end = word.end, "unrecognized word");
        }
        debug!(words = words.len(), unknown = unknown.len(), "checked text");

        CheckReport { words, unknown }
    }
}
