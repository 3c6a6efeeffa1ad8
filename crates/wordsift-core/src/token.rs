// Token and word public API types
//
// Offsets are character positions (Unicode scalar values), not bytes, so a
// span can be mapped back onto the original text no matter how many bytes
// each character occupies.

// ---------------------------------------------------------------------------
// RawToken
// ---------------------------------------------------------------------------

/// A maximal match of the word grammar in the source text.
///
/// `start..end` is a half-open range of character offsets into the text the
/// token was extracted from, and `text` is exactly that range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawToken {
    /// The matched characters.
    pub text: String,

    /// Offset of the first character.
    pub start: usize,

    /// Offset one past the last character.
    pub end: usize,
}

impl RawToken {
    /// Create a token from its text and start offset. The end offset is
    /// derived from the character length of `text`.
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.chars().count();
        Self { text, start, end }
    }

    /// Length of the token in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Tokens produced by the scanner are never empty; this exists for
    /// completeness next to [`RawToken::len`].
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// ---------------------------------------------------------------------------
// NormalizedWord
// ---------------------------------------------------------------------------

/// A word after capitalized-phrase merging and possessive stripping.
///
/// Unlike [`RawToken`], `text` is not necessarily the literal source range:
/// it may have lost a trailing `'s`, and curly apostrophes are rewritten to
/// ASCII. `start` and `end` still point into the original text, so the span
/// is what a highlighter should mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedWord {
    /// The normalized text used for dictionary lookup.
    pub text: String,

    /// Offset of the first character in the original text.
    pub start: usize,

    /// Offset one past the last character in the original text.
    pub end: usize,
}

impl NormalizedWord {
    /// Create a word with an explicit span.
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Width of the span in the original text, in characters.
    pub fn span_len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the word text contains a hyphen.
    pub fn is_hyphenated(&self) -> bool {
        self.text.contains('-')
    }
}

impl From<RawToken> for NormalizedWord {
    fn from(token: RawToken) -> Self {
        Self {
            text: token.text,
            start: token.start,
            end: token.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- RawToken tests --

    #[test]
    fn raw_token_new() {
        let tok = RawToken::new("once", 0);
        assert_eq!(tok.text, "once");
        assert_eq!(tok.start, 0);
        assert_eq!(tok.end, 4);
        assert_eq!(tok.len(), 4);
        assert!(!tok.is_empty());
    }

    #[test]
    fn raw_token_with_position() {
        let tok = RawToken::new("upon", 5);
        assert_eq!(tok.start, 5);
        assert_eq!(tok.end, 9);
    }

    #[test]
    fn raw_token_unicode_length() {
        // "clichés" is 7 characters, 8 bytes in UTF-8
        let tok = RawToken::new("clich\u{00E9}s", 3);
        assert_eq!(tok.len(), 7);
        assert_eq!(tok.end, 10);
    }

    // -- NormalizedWord tests --

    #[test]
    fn normalized_word_from_token() {
        let word = NormalizedWord::from(RawToken::new("time", 12));
        assert_eq!(word, NormalizedWord::new("time", 12, 16));
        assert_eq!(word.span_len(), 4);
    }

    #[test]
    fn normalized_word_span_may_exceed_text() {
        // "mobile's" with the possessive stripped keeps the shorter span
        // but a merged name keeps its original spacing in the span.
        let word = NormalizedWord::new("mobile", 0, 6);
        assert_eq!(word.span_len(), 6);
        let merged = NormalizedWord::new("New   York", 10, 20);
        assert_eq!(merged.span_len(), merged.text.chars().count());
    }

    #[test]
    fn normalized_word_hyphenated() {
        assert!(NormalizedWord::new("anti-flag", 0, 9).is_hyphenated());
        assert!(!NormalizedWord::new("flag", 0, 4).is_hyphenated());
    }
}
