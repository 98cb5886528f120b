//! Word Tokenizer Module
//!
//! This module turns raw text into the words the letter index is built from.
//! It is the first stage of the pipeline: everything after it only ever sees
//! lower-cased words.
//!
//! ## What It Does
//!
//! The input is cut into raw tokens on a single separator byte (a plain space
//! by default). Each raw token is then scanned character by character, and every
//! character that is neither a letter nor a digit closes the current run:
//!
//! ```text
//! "john.doe123@gmail.com"  ->  "john", "doe123", "gmail", "com"
//! ",,john"                 ->  "", "", "john"
//! "a  b"                   ->  "a", "b"        (the empty raw token emits nothing)
//! ```
//!
//! A delimiter always emits the run in front of it, even when that run is empty.
//! The run after the last delimiter is emitted only if it is non-empty. Empty
//! words never reach the letter index because they contain no letter.
//!
//! ## Usage
//!
//! ```rust
//! use letterdex_core::analyzer::tokenizer::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::default();
//! let mut words = Vec::new();
//! tokenizer.tokenize(",Hello World", |word| words.push(word));
//! assert_eq!(words, vec!["", "Hello", "World"]);
//!
//! let unique = tokenizer.unique_words("Ala ala ALA");
//! assert_eq!(unique.len(), 1);
//! assert!(unique.contains("ala"));
//! ```

use letterdex_types::IndexerConfig;
use log::trace;
use memchr::memchr_iter;
use rustc_hash::FxHashSet;
use unicode_normalization::char::is_combining_mark;

/// Returns `true` for alphabetic characters that are not combining marks.
#[inline]
pub fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !is_combining_mark(ch)
}

/// Returns `true` for characters that continue a word.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    is_letter(ch) || ch.is_numeric()
}

/// Splits text into letter-or-digit runs.
///
/// `tokenize` borrows slices from the input and never allocates;
/// `unique_words` lower-cases and deduplicates them.
#[derive(Debug, Copy, Clone, Default)]
#[repr(transparent)]
pub struct WordTokenizer {
    config: IndexerConfig,
}

impl WordTokenizer {
    /// Creates a tokenizer with the given configuration.
    #[inline]
    pub const fn new(config: IndexerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[inline(always)]
    pub const fn config(&self) -> IndexerConfig {
        self.config
    }

    /// Emits every run of `text`, left to right, exactly as written.
    #[allow(clippy::needless_lifetimes)]
    pub fn tokenize<'n, F>(&self, text: &'n str, mut emit: F)
    where
        F: FnMut(&'n str),
    {
        let mut start = 0usize;

        // The separator is ASCII, so every match sits on a char boundary.
        for i in memchr_iter(self.config.separator(), text.as_bytes()) {
            split_runs(&text[start..i], &mut emit);
            start = i + 1;
        }

        split_runs(&text[start..], &mut emit);
    }

    /// Returns the distinct lower-cased words of `text`.
    ///
    /// The empty word is kept when some delimiter opens a token or follows
    /// another delimiter.
    pub fn unique_words(&self, text: &str) -> FxHashSet<String> {
        let mut words = FxHashSet::default();
        let mut emitted = 0usize;

        self.tokenize(text, |run| {
            emitted += 1;
            words.insert(run.to_lowercase());
        });

        trace!(
            "tokenized {} bytes: {} runs, {} unique words",
            text.len(),
            emitted,
            words.len()
        );
        words
    }
}

/// Returns the distinct lower-cased words of `text` using the default separator.
pub fn extract_unique_words(text: &str) -> FxHashSet<String> {
    WordTokenizer::default().unique_words(text)
}

fn split_runs<'n, F>(token: &'n str, emit: &mut F)
where
    F: FnMut(&'n str),
{
    let mut start = 0usize;

    for (i, ch) in token.char_indices() {
        if !is_word_char(ch) {
            emit(&token[start..i]);
            start = i + ch.len_utf8();
        }
    }

    if start < token.len() {
        emit(&token[start..]);
    }
}
