//! Word-letter indexing.
//!
//! Given a block of text, builds a mapping from each letter to the sorted set
//! of distinct lower-cased words containing it:
//!
//! ```
//! use letterdex_core::map_words_to_letters;
//!
//! let index = map_words_to_letters("john.doe123@gmail.com")?;
//! assert_eq!(index.words('j'), vec!["john"]);
//! assert_eq!(index.words('d'), vec!["doe123"]);
//! assert_eq!(index.len(), 12);
//! # Ok::<(), letterdex_core::IndexError>(())
//! ```

pub mod analyzer;
pub mod index;

pub use analyzer::{extract_unique_words, WordTokenizer};
pub use index::{build_letter_index, map_words_to_letters, LetterIndexer};
pub use letterdex_types::{IndexError, IndexStats, IndexerConfig, LetterIndex};
