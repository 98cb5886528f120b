//! Text analysis pipeline.
//!
//! - **Tokenizer**: cuts raw text into lower-cased letter-or-digit words

pub mod tokenizer;

pub use tokenizer::{extract_unique_words, is_letter, is_word_char, WordTokenizer};
