// Word scanner
//
// Splits text into candidate words. At every position the scanner tries three
// alternatives in a fixed order and takes the first one that matches:
//
//   1. hyphenated compound:  w+ (-w+)+ ('w+)?
//   2. apostrophe word:      w+ '? w+
//   3. single character:     w
//
// where `w` is a word character and `'` is any apostrophe character. The
// order matters: the compound rule must run before the apostrophe rule so
// that "ab-c're" is one token and not "ab" followed by "c're".

use wordsift_core::character::{is_apostrophe, is_word_char};
use wordsift_core::token::RawToken;

// ============================================================================
// Grammar alternatives
// ============================================================================

/// Length of the run of word characters at the start of `text`.
fn word_run(text: &[char]) -> usize {
    text.iter().take_while(|&&c| is_word_char(c)).count()
}

/// Length of an apostrophe followed by at least one word character at the
/// start of `text`, or 0.
fn apostrophe_suffix_length(text: &[char]) -> usize {
    match text.first() {
        Some(&c) if is_apostrophe(c) => {
            let run = word_run(&text[1..]);
            if run == 0 { 0 } else { 1 + run }
        }
        _ => 0,
    }
}

/// Alternative 1: `w+ (-w+)+` with an optional apostrophe suffix.
///
/// Returns the match length, or 0 when `text` does not start with a
/// hyphenated compound. A hyphen is only consumed when a word character
/// follows it, so "a-b-" matches "a-b".
fn hyphenated_length(text: &[char]) -> usize {
    let mut len = word_run(text);
    if len == 0 {
        return 0;
    }

    let mut groups = 0;
    while text.get(len) == Some(&'-') {
        let run = word_run(&text[len + 1..]);
        if run == 0 {
            break;
        }
        len += 1 + run;
        groups += 1;
    }
    if groups == 0 {
        return 0;
    }

    len + apostrophe_suffix_length(&text[len..])
}

/// Alternative 2: `w+ '? w+`.
///
/// Needs at least two word characters. When the apostrophe is not followed
/// by a word character, it is left out of the match ("sus'" matches "sus").
fn apostrophe_word_length(text: &[char]) -> usize {
    let run = word_run(text);
    if run == 0 {
        return 0;
    }
    let suffix = apostrophe_suffix_length(&text[run..]);
    if suffix > 0 {
        return run + suffix;
    }
    if run >= 2 { run } else { 0 }
}

/// Length of the grammar match anchored at the start of `text`, or 0 when
/// `text` does not start with a word character.
pub fn match_length(text: &[char]) -> usize {
    let len = hyphenated_length(text);
    if len > 0 {
        return len;
    }
    let len = apostrophe_word_length(text);
    if len > 0 {
        return len;
    }
    match text.first() {
        Some(&c) if is_word_char(c) => 1,
        _ => 0,
    }
}

// ============================================================================
// Public scanner API
// ============================================================================

/// Find the leftmost match at or after `pos`.
///
/// Returns `(start, length)` in characters, or `None` when the rest of the
/// text holds no word character. Every alternative begins with a word
/// character, so the leftmost match starts at the first word character.
pub fn next_match(text: &[char], pos: usize) -> Option<(usize, usize)> {
    let offset = text.get(pos..)?.iter().position(|&c| is_word_char(c))?;
    let start = pos + offset;
    let len = match_length(&text[start..]);
    debug_assert!(len > 0, "a word character always matches");
    Some((start, len))
}

/// Extract every token from a character slice.
pub fn extract_chars(text: &[char]) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while let Some((start, len)) = next_match(text, pos) {
        let token_text: String = text[start..start + len].iter().collect();
        tokens.push(RawToken {
            text: token_text,
            start,
            end: start + len,
        });
        pos = start + len;
    }
    tokens
}

/// Extract every token from `text`, in order, with character offsets.
///
/// Total over all inputs: empty text or text without any word character
/// yields an empty vector.
pub fn extract(text: &str) -> Vec<RawToken> {
    let chars: Vec<char> = text.chars().collect();
    extract_chars(&chars)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Helpers --------------------------------------------------------------

    fn texts(s: &str) -> Vec<String> {
        extract(s).into_iter().map(|t| t.text).collect()
    }

    fn len_at_start(s: &str) -> usize {
        let chars: Vec<char> = s.chars().collect();
        match_length(&chars)
    }

    // -- Empty and trivial inputs ---

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn punctuation_only_has_no_tokens() {
        assert!(extract("!!! ... ;;; -- ''").is_empty());
    }

    #[test]
    fn single_letter() {
        assert_eq!(texts("a"), vec!["a"]);
    }

    #[test]
    fn single_digit() {
        assert_eq!(texts("5"), vec!["5"]);
    }

    // -- Alternatives ---

    #[test]
    fn plain_word_length() {
        assert_eq!(len_at_start("upon a time"), 4);
    }

    #[test]
    fn non_word_start_has_no_match() {
        assert_eq!(len_at_start("-abc"), 0);
        assert_eq!(len_at_start(""), 0);
    }

    #[test]
    fn compound_with_trailing_contraction() {
        assert_eq!(len_at_start("ab-c're;"), 7);
    }

    #[test]
    fn compound_prefers_hyphen_rule_over_apostrophe_rule() {
        // The apostrophe rule alone would only reach "a-b" then "c'd".
        assert_eq!(texts("a-b'c'd"), vec!["a-b'c", "d"]);
    }

    #[test]
    fn dangling_hyphen_is_not_consumed() {
        assert_eq!(texts("a-b-"), vec!["a-b"]);
        assert_eq!(texts("koira- kissa"), vec!["koira", "kissa"]);
    }

    #[test]
    fn leading_hyphen_is_separator() {
        assert_eq!(texts("-abc"), vec!["abc"]);
    }

    #[test]
    fn line_break_after_hyphen_splits() {
        assert_eq!(texts("amer-\nican"), vec!["amer", "ican"]);
    }

    #[test]
    fn inner_apostrophe_kept() {
        assert_eq!(texts("didn't it's"), vec!["didn't", "it's"]);
    }

    #[test]
    fn trailing_apostrophe_dropped() {
        assert_eq!(texts("sus' cabbages"), vec!["sus", "cabbages"]);
    }

    #[test]
    fn only_one_apostrophe_per_word() {
        assert_eq!(texts("ab'cd'ef"), vec!["ab'cd", "ef"]);
    }

    #[test]
    fn single_letter_contraction() {
        assert_eq!(texts("a'b"), vec!["a'b"]);
    }

    #[test]
    fn apostrophe_word_then_hyphen() {
        assert_eq!(texts("x'y-z"), vec!["x'y", "z"]);
    }

    #[test]
    fn underscore_is_word_char() {
        assert_eq!(texts("snake_case here"), vec!["snake_case", "here"]);
    }

    // -- Sentences ---

    #[test]
    fn basic_sentence() {
        let sentence = "once upon a time there lived a buddah in a grassy cavern";
        let expected: Vec<&str> = sentence.split_whitespace().collect();
        assert_eq!(texts(sentence), expected);
    }

    #[test]
    fn digits_split_on_dot() {
        assert_eq!(texts("here laYeth 4.51"), vec!["here", "laYeth", "4", "51"]);
    }

    #[test]
    fn hyphenated_words() {
        assert_eq!(
            texts("a-b-c;ab-c're;anti-flag;strong-bad-fun"),
            vec!["a-b-c", "ab-c're", "anti-flag", "strong-bad-fun"]
        );
    }

    #[test]
    fn extra_punctuation() {
        assert_eq!(
            texts("[Ever] wonder 100% & gather $100 ~ {filthy} [greens?] <hobby>"),
            vec!["Ever", "wonder", "100", "gather", "100", "filthy", "greens", "hobby"]
        );
    }

    // -- Unicode ---

    #[test]
    fn cjk_runs_are_single_tokens() {
        assert_eq!(
            texts("\u{30C1}\u{30E0}\u{30D6}\u{30EC} \u{4E2D}\u{56FD}\u{8BDD}\u{4E0D}\u{7528}\u{5F41}\u{5B57} 4.57"),
            vec![
                "\u{30C1}\u{30E0}\u{30D6}\u{30EC}",
                "\u{4E2D}\u{56FD}\u{8BDD}\u{4E0D}\u{7528}\u{5F41}\u{5B57}",
                "4",
                "57"
            ]
        );
    }

    #[test]
    fn accented_word_not_split() {
        assert_eq!(texts("clich\u{00E9}s"), vec!["clich\u{00E9}s"]);
    }

    #[test]
    fn curly_apostrophe_inside_word() {
        assert_eq!(texts("hamstrung\u{2019}re"), vec!["hamstrung\u{2019}re"]);
    }

    #[test]
    fn quotation_marks_are_separators() {
        // ‘thats’‚ ‛too “funny”′wasteʹ ‴man‴
        let s = "\u{2018}thats\u{2019}\u{201A} \u{201B}too \u{201C}funny\u{201D}\u{2032}waste\u{02B9} \u{2034}man\u{2034}";
        assert_eq!(
            texts(s),
            vec!["thats", "too", "funny", "waste\u{02B9}", "man"]
        );
    }

    #[test]
    fn quoted_word() {
        assert_eq!(texts("'whatever'"), vec!["whatever"]);
    }

    // -- Offsets ---

    #[test]
    fn offsets_are_character_positions() {
        let tokens = extract("\u{00E9}t\u{00E9} a b");
        assert_eq!(tokens[0], RawToken::new("\u{00E9}t\u{00E9}", 0));
        assert_eq!((tokens[1].start, tokens[1].end), (4, 5));
        assert_eq!((tokens[2].start, tokens[2].end), (6, 7));
    }

    #[test]
    fn next_match_skips_separators() {
        let chars: Vec<char> = "  ;;word".chars().collect();
        assert_eq!(next_match(&chars, 0), Some((4, 4)));
        assert_eq!(next_match(&chars, 8), None);
        assert_eq!(next_match(&chars, 42), None);
    }
}
