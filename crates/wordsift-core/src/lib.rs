//! Shared types for wordsift.
//!
//! - [`token`] -- raw scanner tokens and normalized words, both carrying
//!   character offsets into the source text
//! - [`character`] -- word-character, apostrophe, whitespace and newline
//!   classification used by the scanner and the normalizer

pub mod character;
pub mod token;

pub use token::{NormalizedWord, RawToken};
