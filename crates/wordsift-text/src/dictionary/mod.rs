// Dictionary lookup
//
// The scanner and normalizer never touch a dictionary. Classification only
// needs a membership test, expressed by the `Lexicon` trait so callers can
// pass a loaded `Dictionary` or any plain set of words.

pub mod wordlist;

pub use wordlist::{Dictionary, DictionaryError, WordListEncoding};

use std::collections::HashSet as StdHashSet;
use std::hash::BuildHasher;

/// Trait for word membership tests.
///
/// Implementations compare words exactly. Case folding is the caller's job:
/// word lists are stored lowercase and text is lowercased before lookup.
pub trait Lexicon {
    /// Check whether `word` is a known word.
    fn contains(&self, word: &str) -> bool;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<S: BuildHasher> Lexicon for StdHashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        StdHashSet::contains(self, word)
    }
}

impl<S: BuildHasher> Lexicon for StdHashSet<&str, S> {
    fn contains(&self, word: &str) -> bool {
        StdHashSet::contains(self, word)
    }
}

impl<S: BuildHasher> Lexicon for hashbrown::HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        hashbrown::HashSet::contains(self, word)
    }
}

impl Lexicon for [&str] {
    fn contains(&self, word: &str) -> bool {
        self.iter().any(|w| *w == word)
    }
}

impl Lexicon for [String] {
    fn contains(&self, word: &str) -> bool {
        self.iter().any(|w| w == word)
    }
}
