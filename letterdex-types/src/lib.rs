//! Core types for the letterdex word-letter indexer.
//!
//! This crate holds the values shared between the indexing core and its
//! callers:
//!
//! - **[`LetterIndex`]**: the letter → sorted word set mapping
//! - **[`IndexStats`]**: a cheap summary of an index
//! - **[`IndexError`]**: the single failure an indexing call can report
//! - **[`IndexerConfig`]**: tokenizer settings

#![warn(missing_docs)]

use core::fmt;
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

/// Message carried by [`IndexError::InvalidInput`].
pub const INVALID_INPUT_MESSAGE: &str = "Input text cannot be null or empty";

/// Errors that can occur when indexing a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// The input text was absent or had zero length.
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,
}

/// Tokenizer configuration.
///
/// Raw tokens are cut on a single ASCII byte before being scanned for
/// letter-or-digit runs. The default is the plain space (0x20); tabs and
/// newlines are *not* separators and instead act as in-token delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexerConfig {
    separator: u8,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl IndexerConfig {
    /// Space-separated tokens.
    pub const DEFAULT: Self = Self { separator: b' ' };

    /// Creates a configuration splitting raw tokens on `separator`.
    ///
    /// Returns `None` for non-ASCII bytes, which could land inside a
    /// multi-byte UTF-8 sequence.
    pub const fn with_separator(separator: u8) -> Option<Self> {
        if separator.is_ascii() {
            Some(Self { separator })
        } else {
            None
        }
    }

    /// The byte raw tokens are split on.
    #[inline(always)]
    pub const fn separator(&self) -> u8 {
        self.separator
    }
}

/// Mapping from a letter to the sorted, duplicate-free set of words containing it.
///
/// Keys iterate in ascending order. A key is present only while at least one
/// word is stored under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterIndex {
    letters: BTreeMap<char, BTreeSet<String>>,
}

impl LetterIndex {
    /// Creates an empty index.
    #[inline]
    pub const fn new() -> Self {
        Self {
            letters: BTreeMap::new(),
        }
    }

    /// Files `word` under `letter`, creating the entry on first use.
    ///
    /// Returns `true` if the word was not already stored under that letter.
    pub fn insert(&mut self, letter: char, word: impl Into<String>) -> bool {
        self.letters.entry(letter).or_default().insert(word.into())
    }

    /// Returns the word set for `letter`, if any word contains it.
    #[inline]
    pub fn get(&self, letter: char) -> Option<&BTreeSet<String>> {
        self.letters.get(&letter)
    }

    /// Returns the words containing `letter` in sorted order (empty when absent).
    pub fn words(&self, letter: char) -> Vec<&str> {
        self.get(letter)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns `true` if `word` is stored under `letter`.
    pub fn contains(&self, letter: char, word: &str) -> bool {
        self.get(letter).is_some_and(|set| set.contains(word))
    }

    /// Iterates over the indexed letters in ascending order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.keys().copied()
    }

    /// Iterates over `(letter, words)` pairs in ascending letter order.
    pub fn iter(&self) -> btree_map::Iter<'_, char, BTreeSet<String>> {
        self.letters.iter()
    }

    /// Number of indexed letters.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if no letter is indexed.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns a summary of the index.
    pub fn stats(&self) -> IndexStats {
        let mut distinct: BTreeSet<&str> = BTreeSet::new();
        let mut total_postings = 0usize;

        for words in self.letters.values() {
            total_postings += words.len();
            distinct.extend(words.iter().map(String::as_str));
        }

        IndexStats {
            num_letters: self.letters.len(),
            num_words: distinct.len(),
            total_postings,
        }
    }

    /// Consumes the index and returns the underlying map.
    pub fn into_inner(self) -> BTreeMap<char, BTreeSet<String>> {
        self.letters
    }
}

impl FromIterator<(char, String)> for LetterIndex {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (letter, word) in iter {
            index.insert(letter, word);
        }
        index
    }
}

impl IntoIterator for LetterIndex {
    type Item = (char, BTreeSet<String>);
    type IntoIter = btree_map::IntoIter<char, BTreeSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.into_iter()
    }
}

impl<'a> IntoIterator for &'a LetterIndex {
    type Item = (&'a char, &'a BTreeSet<String>);
    type IntoIter = btree_map::Iter<'a, char, BTreeSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

impl fmt::Display for LetterIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, words) in &self.letters {
            write!(f, "{}: [", letter)?;
            for (i, word) in words.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(word)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// A snapshot of index statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of indexed letters.
    pub num_letters: usize,
    /// Number of distinct words stored under any letter.
    pub num_words: usize,
    /// Sum of the per-letter word set sizes.
    pub total_postings: usize,
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} letters, {} words, {} postings",
            self.num_letters, self.num_words, self.total_postings
        )
    }
}
