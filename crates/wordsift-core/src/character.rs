// Character classification used by the scanner and the normalizer

// ---------------------------------------------------------------------------
// Apostrophes
// ---------------------------------------------------------------------------

/// Characters treated as apostrophes: ASCII `'` and U+2019.
pub const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// The canonical apostrophe written into normalized words.
pub const ASCII_APOSTROPHE: char = '\'';

/// Check whether a character is one of the [`APOSTROPHES`].
pub fn is_apostrophe(c: char) -> bool {
    APOSTROPHES.contains(&c)
}

// ---------------------------------------------------------------------------
// Word characters
// ---------------------------------------------------------------------------

/// Check whether a character belongs to the word class: any Unicode
/// alphabetic or numeric character, or underscore.
///
/// Modifier letters such as U+02B9 are alphabetic and therefore part of a
/// word, while apostrophes, hyphens and quotation marks are not.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// Check whether a word starts with an uppercase letter.
pub fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(is_upper)
}

/// Check whether every character of a non-empty word is numeric.
pub fn is_numeric_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_numeric)
}

// ---------------------------------------------------------------------------
// Whitespace and line breaks
// ---------------------------------------------------------------------------

/// Check whether a character is whitespace.
///
/// This is the Unicode whitespace set plus the ASCII information separators
/// U+001C..U+001F, which plain-text sources use as record breaks.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || (0x1C..=0x20).contains(&cp)
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// Check whether a separator is non-empty and made only of whitespace.
///
/// An empty separator is not blank: two tokens that touch are not "separated
/// by whitespace".
pub fn is_blank(sep: &[char]) -> bool {
    !sep.is_empty() && sep.iter().all(|&c| is_whitespace(c))
}

/// Count line breaks in a separator.
///
/// A separator is assumed to use a single line-ending convention, so the
/// result is the largest of the `\n`, `\r\n`, `\n\r` and `\r` counts. A
/// Windows `\r\n` therefore counts once, not twice.
pub fn count_newlines(sep: &[char]) -> usize {
    let lf = sep.iter().filter(|&&c| c == '\n').count();
    let cr = sep.iter().filter(|&&c| c == '\r').count();
    let crlf = count_pairs(sep, '\r', '\n');
    let lfcr = count_pairs(sep, '\n', '\r');
    lf.max(cr).max(crlf).max(lfcr)
}

/// Count non-overlapping occurrences of the pair `a b`.
fn count_pairs(sep: &[char], a: char, b: char) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i + 1 < sep.len() {
        if sep[i] == a && sep[i + 1] == b {
            count += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    count
}
