// Hyphenated compound classification
//
// A token with hyphens is recognized in one of four ways:
//
// 1. Two or more hyphens: a run of words or letters ("a-b-c",
//    "anti-flaming-axe-league"). Every part must be a known word.
// 2. One hyphen, the whole compound is a dictionary entry ("co-dependent").
// 3. One hyphen left over from a line-wrap ("amer-ican"): the token with the
//    hyphen removed is a dictionary entry.
// 4. One hyphen joining two words ("pro-keyboardist"): both halves are
//    known words.

use crate::dictionary::Lexicon;

/// Decide whether a hyphenated token is recognized by `lexicon`.
///
/// `first_hyphen` is the byte index of the first `-` in `token`, as returned
/// by `token.find('-')`. Passing an index that does not hold a hyphen is a
/// caller bug; it is caught by a debug assertion and otherwise gives an
/// unspecified answer.
///
/// Lookups use `token` exactly as given. Callers checking free text lowercase
/// the token first, since dictionaries are stored lowercase.
pub fn is_recognized<L>(token: &str, first_hyphen: usize, lexicon: &L) -> bool
where
    L: Lexicon + ?Sized,
{
    debug_assert_eq!(
        token.as_bytes().get(first_hyphen),
        Some(&b'-'),
        "no hyphen at index {first_hyphen} in {token:?}"
    );

    let more_hyphens = token
        .get(first_hyphen + 1..)
        .is_some_and(|rest| rest.contains('-'));
    if more_hyphens {
        return token.split('-').all(|part| lexicon.contains(part));
    }

    if lexicon.contains(token) {
        return true;
    }
    if lexicon.contains(&token.replacen('-', "", 1)) {
        return true;
    }
    match token.split_once('-') {
        Some((head, tail)) => lexicon.contains(head) && lexicon.contains(tail),
        None => false,
    }
}

/// Check any token against `lexicon`, routing hyphenated tokens through
/// [`is_recognized`] and plain tokens through a direct lookup.
pub fn is_known<L>(token: &str, lexicon: &L) -> bool
where
    L: Lexicon + ?Sized,
{
    match token.find('-') {
        Some(idx) => is_recognized(token, idx, lexicon),
        None => lexicon.contains(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn recognized(token: &str, lexicon: &HashSet<String>) -> bool {
        let idx = token.find('-').expect("test token has a hyphen");
        is_recognized(token, idx, lexicon)
    }

    // -- Several hyphens: every part must be known ---

    #[test]
    fn multi_hyphen_all_parts_known() {
        assert!(is_recognized("a-b-c", 1, &set(&["a", "b", "c"])));
    }

    #[test]
    fn multi_hyphen_any_missing_part_fails() {
        assert!(!recognized("a-b-c", &set(&["b", "c"])));
        assert!(!recognized("a-b-c", &set(&["a", "c"])));
        assert!(!recognized("a-b-c", &set(&["a", "b"])));
    }

    #[test]
    fn multi_hyphen_ignores_whole_and_joined_forms() {
        let lexicon = set(&["a-b-c", "abc"]);
        assert!(!recognized("a-b-c", &lexicon));
    }

    #[test]
    fn multi_hyphen_with_contraction() {
        assert!(recognized("a-b-c's", &set(&["a", "b", "c's"])));
    }

    // -- One hyphen: any of three forms ---

    #[test]
    fn single_hyphen_whole_token() {
        assert!(recognized("co-dependent", &set(&["co-dependent"])));
    }

    #[test]
    fn single_hyphen_line_wrap() {
        assert!(recognized("amer-ican", &set(&["american"])));
    }

    #[test]
    fn single_hyphen_both_halves() {
        assert!(recognized("anti-death", &set(&["anti", "death"])));
    }

    #[test]
    fn single_hyphen_one_half_missing() {
        assert!(!recognized("anti-death", &set(&["anti"])));
        assert!(!recognized("anti-death", &set(&["death"])));
    }

    #[test]
    fn single_hyphen_unknown() {
        assert!(!recognized("zorp-blat", &set(&["zorp", "blatt"])));
    }

    #[test]
    fn lookups_are_exact() {
        assert!(!recognized("Co-Dependent", &set(&["co-dependent"])));
    }

    // -- Lexicon types ---

    #[test]
    fn slice_lexicon() {
        let words = ["a", "b", "c", "c's", "anti", "death", "co-dependent", "american"];
        for token in ["a-b-c", "anti-death", "co-dependent", "amer-ican"] {
            let idx = token.find('-').unwrap();
            assert!(is_recognized(token, idx, &words[..]), "{token} not recognized");
        }
    }

    #[test]
    fn known_without_hyphen() {
        let lexicon = set(&["flag"]);
        assert!(is_known("flag", &lexicon));
        assert!(!is_known("flags", &lexicon));
    }

    #[test]
    fn known_with_hyphen() {
        let lexicon = set(&["anti", "flag"]);
        assert!(is_known("anti-flag", &lexicon));
    }
}
