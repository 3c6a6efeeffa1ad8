// WASM bindings for wordsift.
//
// Provides a `WasmWordSift` class exported via wasm-bindgen that wraps a
// `TextChecker` over an in-memory word list. Word lists are passed as
// strings or bytes, since the browser has no file system. Word spans are
// serialized to JavaScript objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const sift = new WasmWordSift(wordListText);
//   sift.words("Once in New York");     // => [{ text: "Once", start: 0, end: 4 }, ...]
//   sift.unknownWords("a tyme");        // => [{ text: "tyme", start: 2, end: 6 }]
//   sift.checkHtml("a tyme");           // => "<!DOCTYPE html>..."
//   sift.isKnown("anti-flag");          // => true
//   sift.wordCount();                   // => 235886

use serde::Serialize;
use wasm_bindgen::prelude::*;

use wordsift_text::render::{render_html, summary};
use wordsift_text::{Dictionary, DictionaryError, NormalizedWord, TextChecker, WordListEncoding};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a word and its character span.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct JsWord {
    text: String,
    start: usize,
    end: usize,
}

impl From<NormalizedWord> for JsWord {
    fn from(word: NormalizedWord) -> Self {
        JsWord {
            text: word.text,
            start: word.start,
            end: word.end,
        }
    }
}

fn to_js_words(words: Vec<NormalizedWord>) -> Vec<JsWord> {
    words.into_iter().map(JsWord::from).collect()
}

fn dictionary_error_to_js(e: DictionaryError) -> JsError {
    JsError::new(&e.to_string())
}

fn serialize<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmWordSift
// ============================================================================

/// Unrecognized-word finder for WebAssembly.
#[wasm_bindgen]
pub struct WasmWordSift {
    checker: TextChecker,
}

#[wasm_bindgen]
impl WasmWordSift {
    /// Create an instance from word list text, one word per line.
    #[wasm_bindgen(constructor)]
    pub fn new(word_list: &str) -> WasmWordSift {
        WasmWordSift {
            checker: TextChecker::new(Dictionary::from_word_list(word_list)),
        }
    }

    /// Create an instance from raw word list bytes.
    ///
    /// - `latin1`: decode as ISO-8859-1 instead of UTF-8
    #[wasm_bindgen(js_name = "fromBytes")]
    pub fn from_bytes(data: &[u8], latin1: bool) -> Result<WasmWordSift, JsError> {
        let encoding = if latin1 {
            WordListEncoding::Latin1
        } else {
            WordListEncoding::Utf8
        };
        let dictionary = Dictionary::from_bytes(data, encoding).map_err(dictionary_error_to_js)?;
        Ok(WasmWordSift {
            checker: TextChecker::new(dictionary),
        })
    }

    /// Extract the normalized words of a text.
    ///
    /// Returns a JavaScript array of `{ text, start, end }` objects. Offsets
    /// count Unicode code points, not UTF-16 units.
    pub fn words(&self, text: &str) -> Result<JsValue, JsError> {
        serialize(&to_js_words(self.checker.words(text)))
    }

    /// The words of a text that are not in the word list, with their spans.
    #[wasm_bindgen(js_name = "unknownWords")]
    pub fn unknown_words(&self, text: &str) -> Result<JsValue, JsError> {
        serialize(&to_js_words(self.checker.check(text).unknown))
    }

    /// Render a standalone HTML page with unrecognized words highlighted.
    #[wasm_bindgen(js_name = "checkHtml")]
    pub fn check_html(&self, text: &str) -> String {
        render_html(text, &self.checker.check(text))
    }

    /// The one-line statistics summary for a text.
    pub fn summary(&self, text: &str) -> String {
        summary(&self.checker.check(text))
    }

    /// Check a single word. Hyphenated compounds are split as needed.
    #[wasm_bindgen(js_name = "isKnown")]
    pub fn is_known(&self, word: &str) -> bool {
        self.checker.is_known(word)
    }

    /// Number of distinct words in the word list.
    #[wasm_bindgen(js_name = "wordCount")]
    pub fn word_count(&self) -> usize {
        self.checker.lexicon().len()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set whether words made only of digits are skipped.
    #[wasm_bindgen(js_name = "setSkipNumbers")]
    pub fn set_skip_numbers(&mut self, value: bool) {
        self.checker.set_skip_numbers(value);
    }

    /// Replace the connector words used to merge capitalized names.
    #[wasm_bindgen(js_name = "setConnectors")]
    pub fn set_connectors(&mut self, connectors: Vec<String>) {
        self.checker.set_connectors(connectors);
    }
}
