// Word normalization
//
// Turns scanner tokens into dictionary lookup units:
// 1. Runs of capitalized tokens separated only by whitespace become a single
//    name ("New York"). Lowercase connector words may sit between the
//    capitalized tokens ("United States of America").
// 2. A trailing possessive `'s` is removed, shrinking the span.
// 3. Curly apostrophes are rewritten to ASCII.
//
// The merge pass keeps one `PendingChain` per call: the capitalized phrase
// being built plus any connectors that may still join it to the next
// capitalized token. Whenever the chain cannot continue it is flushed, which
// emits the phrase and every buffered connector as separate words.

use wordsift_core::character::{
    ASCII_APOSTROPHE, count_newlines, is_apostrophe, is_blank, starts_upper,
};
use wordsift_core::token::{NormalizedWord, RawToken};

use crate::tokenizer;

/// Lowercase words allowed to join two capitalized words into one name.
pub const DEFAULT_CONNECTORS: &[&str] = &["the", "a", "of", "and"];

/// Two capitalized words separated by this many line breaks or more are kept
/// apart: the second one most likely starts a new paragraph or follows a
/// quotation attribution. A single break is tolerated so that a name wrapped
/// across lines ("New\nYork") still merges.
const MAX_NEWLINES_IN_NAME: usize = 2;

// ---------------------------------------------------------------------------
// Pending chain
// ---------------------------------------------------------------------------

/// The capitalized phrase under construction.
#[derive(Debug, Default)]
struct PendingChain {
    /// The phrase so far. `None` when no capitalized token is pending.
    word: Option<NormalizedWord>,

    /// Connector words seen after `word` that have not yet been linked.
    connectors: Vec<NormalizedWord>,
}

impl PendingChain {
    /// Start a new phrase with `token` as its only word.
    fn start(&mut self, token: &RawToken) {
        debug_assert!(self.word.is_none() && self.connectors.is_empty());
        self.word = Some(NormalizedWord::from(token.clone()));
    }

    /// End offset of the pending phrase.
    fn word_end(&self) -> Option<usize> {
        self.word.as_ref().map(|w| w.end)
    }

    /// End offset of the last buffered connector.
    fn connector_end(&self) -> Option<usize> {
        self.connectors.last().map(|c| c.end)
    }

    /// End offset of whatever was buffered last.
    fn last_end(&self) -> Option<usize> {
        self.connector_end().or_else(|| self.word_end())
    }

    /// Append `sep` and `token` to the phrase.
    fn extend(&mut self, sep: &[char], token: &RawToken) {
        if let Some(word) = self.word.as_mut() {
            word.text.extend(sep);
            word.text.push_str(&token.text);
            word.end = token.end;
        }
    }

    /// Fold every buffered connector and then `token` into the phrase, using
    /// the original separators between them.
    fn link(&mut self, text: &[char], token: &RawToken) {
        let Some(word) = self.word.as_mut() else {
            return;
        };
        let tail = std::iter::once(NormalizedWord::from(token.clone()));
        for part in self.connectors.drain(..).chain(tail) {
            word.text.extend(separator(text, word.end, part.start));
            word.text.push_str(&part.text);
            word.end = part.end;
        }
    }

    /// Emit the phrase followed by each buffered connector, leaving the chain
    /// empty.
    fn flush_into(&mut self, out: &mut Vec<NormalizedWord>) {
        if let Some(word) = self.word.take() {
            out.push(word);
        }
        out.append(&mut self.connectors);
    }
}

/// The text between two offsets. Offsets outside the text give an empty
/// separator, which never counts as whitespace.
fn separator(text: &[char], from: usize, to: usize) -> &[char] {
    text.get(from..to).unwrap_or(&[])
}

// ---------------------------------------------------------------------------
// Post-processing
// ---------------------------------------------------------------------------

/// Byte index where a trailing apostrophe + `s` starts, if present.
fn possessive_suffix_start(text: &str) -> Option<usize> {
    let mut rev = text.char_indices().rev();
    let (_, last) = rev.next()?;
    let (idx, apostrophe) = rev.next()?;
    (last == 's' && is_apostrophe(apostrophe)).then_some(idx)
}

/// Strip a possessive suffix and canonicalize apostrophes.
fn finish(mut word: NormalizedWord) -> NormalizedWord {
    if let Some(idx) = possessive_suffix_start(&word.text) {
        word.text.truncate(idx);
        word.end -= 2;
    }
    if word.text.chars().any(|c| is_apostrophe(c) && c != ASCII_APOSTROPHE) {
        word.text = word
            .text
            .chars()
            .map(|c| if is_apostrophe(c) { ASCII_APOSTROPHE } else { c })
            .collect();
    }
    word
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Merges capitalized phrases and normalizes word forms.
///
/// The only configuration is the connector list. Each call to
/// [`Normalizer::normalize`] owns its own chain state, so one normalizer can
/// be shared between threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    connectors: Vec<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::with_connectors(DEFAULT_CONNECTORS.iter().copied())
    }
}

impl Normalizer {
    /// A normalizer using [`DEFAULT_CONNECTORS`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A normalizer with a custom connector list. Connectors are matched
    /// exactly and case-sensitively.
    pub fn with_connectors<I, S>(connectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            connectors: connectors.into_iter().map(Into::into).collect(),
        }
    }

    /// The connector list in use.
    pub fn connectors(&self) -> &[String] {
        &self.connectors
    }

    /// Check whether `word` is a connector.
    pub fn is_connector(&self, word: &str) -> bool {
        self.connectors.iter().any(|c| c == word)
    }

    /// Normalize tokens extracted from `text`.
    pub fn normalize(&self, tokens: &[RawToken], text: &str) -> Vec<NormalizedWord> {
        let chars: Vec<char> = text.chars().collect();
        self.normalize_chars(tokens, &chars)
    }

    /// Normalize tokens extracted from a character slice.
    ///
    /// `tokens` are expected to come from [`tokenizer::extract_chars`] on the
    /// same text. Offsets that do not fit the text are tolerated: the
    /// separator is treated as non-whitespace and the chain is broken there.
    pub fn normalize_chars(&self, tokens: &[RawToken], text: &[char]) -> Vec<NormalizedWord> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut chain = PendingChain::default();

        for token in tokens {
            if starts_upper(&token.text) {
                match (chain.word_end(), chain.connector_end()) {
                    (Some(_), Some(connector_end)) => {
                        let sep = separator(text, connector_end, token.start);
                        if is_blank(sep) {
                            chain.link(text, token);
                        } else {
                            chain.flush_into(&mut out);
                            chain.start(token);
                        }
                    }
                    (Some(word_end), None) => {
                        let sep = separator(text, word_end, token.start);
                        if is_blank(sep) && count_newlines(sep) < MAX_NEWLINES_IN_NAME {
                            chain.extend(sep, token);
                        } else {
                            chain.flush_into(&mut out);
                            chain.start(token);
                        }
                    }
                    (None, _) => chain.start(token),
                }
            } else if chain.word.is_some() && self.is_connector(&token.text) {
                let from = chain.last_end().unwrap_or(token.start);
                let sep = separator(text, from, token.start);
                chain.connectors.push(NormalizedWord::from(token.clone()));
                if !is_blank(sep) {
                    chain.flush_into(&mut out);
                }
            } else {
                chain.flush_into(&mut out);
                out.push(NormalizedWord::from(token.clone()));
            }
        }
        chain.flush_into(&mut out);

        out.into_iter().map(finish).collect()
    }
}

/// Normalize tokens with the default connector list.
pub fn normalize(tokens: &[RawToken], text: &str) -> Vec<NormalizedWord> {
    Normalizer::default().normalize(tokens, text)
}

/// Extract and normalize in one step.
pub fn words(text: &str) -> Vec<NormalizedWord> {
    let chars: Vec<char> = text.chars().collect();
    let tokens = tokenizer::extract_chars(&chars);
    Normalizer::default().normalize_chars(&tokens, &chars)
}
