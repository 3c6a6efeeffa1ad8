//! Word extraction and dictionary checking for English-like text.
//!
//! The pipeline has three stages, each usable on its own:
//!
//! - [`tokenizer`] -- scan text into raw word tokens with character spans
//! - [`normalizer`] -- merge capitalized names, strip possessives, canonicalize
//!   apostrophes
//! - [`hyphen`] -- decide whether a hyphenated compound is a known word
//!
//! On top of these sit the word list [`dictionary`], the [`checker`] that runs
//! the whole pipeline (feature `check`) and the console / HTML [`render`]ers
//! (feature `render`).
//!
//! All offsets are character (Unicode scalar) offsets into the input, never
//! byte offsets.

pub mod dictionary;
pub mod hyphen;
pub mod normalizer;
pub mod tokenizer;

#[cfg(feature = "check")]
pub mod checker;

#[cfg(feature = "render")]
pub mod render;

pub use dictionary::{Dictionary, DictionaryError, Lexicon, WordListEncoding};
pub use hyphen::{is_known, is_recognized};
pub use normalizer::{Normalizer, normalize, words};
pub use tokenizer::extract;
pub use wordsift_core::token::{NormalizedWord, RawToken};

#[cfg(feature = "check")]
pub use checker::{CheckOptions, CheckReport, TextChecker};
