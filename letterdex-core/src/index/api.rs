//! Public API for indexing texts.

use crate::index::builder::build_letter_index;
use crate::index::types::LetterIndexer;
use letterdex_types::{IndexError, LetterIndex};
use log::debug;

impl LetterIndexer {
    /// Maps every letter of `text` to the sorted set of words containing it.
    ///
    /// Accepts either a `&str` or an `Option<&str>`; `None` stands for an
    /// absent input.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::InvalidInput` if `text` is absent or empty.
    /// Whitespace-only or punctuation-only text is valid and yields an empty index.
    pub fn index<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<LetterIndex, IndexError> {
        let text = match text.into() {
            Some(text) if !text.is_empty() => text,
            _ => {
                debug!("rejected input: {}", IndexError::InvalidInput);
                return Err(IndexError::InvalidInput);
            }
        };

        let words = self.tokenizer.unique_words(text);
        let index = build_letter_index(&words);

        debug!(
            "indexed {} bytes: {} unique words, {} letters",
            text.len(),
            words.len(),
            index.len()
        );

        Ok(index)
    }
}

/// Maps every letter of `text` to the sorted set of words containing it,
/// using the default configuration.
///
/// # Errors
///
/// Returns `IndexError::InvalidInput` if `text` is `None` or empty.
///
/// # Example
///
/// ```
/// use letterdex_core::map_words_to_letters;
///
/// let index = map_words_to_letters("ala ma kota").unwrap();
/// assert_eq!(index.words('a'), vec!["ala", "kota", "ma"]);
/// assert!(map_words_to_letters(None::<&str>).is_err());
/// ```
pub fn map_words_to_letters<'a>(
    text: impl Into<Option<&'a str>>,
) -> Result<LetterIndex, IndexError> {
    LetterIndexer::new().index(text)
}
