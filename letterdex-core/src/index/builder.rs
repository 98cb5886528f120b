//! Letter index building logic.

use crate::analyzer::tokenizer::is_letter;
use letterdex_types::LetterIndex;

/// Folds a set of words into a letter index.
///
/// Every letter of a word files the word under that letter; digits,
/// combining marks and any other characters are skipped. Words without a letter
/// (numbers, the empty word) leave no trace in the result.
pub fn build_letter_index<I, S>(words: I) -> LetterIndex
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index = LetterIndex::new();

    for word in words {
        let word = word.as_ref();
        for letter in word.chars().filter(|&c| is_letter(c)) {
            if !index.contains(letter, word) {
                index.insert(letter, word);
            }
        }
    }

    index
}
