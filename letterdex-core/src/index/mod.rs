//! Letter indexing.
//!
//! Two passes per call, nothing kept between calls:
//! - the tokenizer reduces the text to a set of distinct lower-cased words
//! - the builder files each word under every letter it contains
//!
//! Threading:
//! - [`LetterIndexer`] is `Copy` and carries no mutable state, so it may be
//!   shared freely across threads.

mod api;
mod builder;
mod types;

pub use api::map_words_to_letters;
pub use builder::build_letter_index;
pub use types::LetterIndexer;

#[cfg(test)]
mod tests {
    use super::*;
    use letterdex_types::{IndexError, IndexerConfig};

    fn keys(text: &str) -> Vec<char> {
        map_words_to_letters(text)
            .expect("should index text")
            .letters()
            .collect()
    }

    #[test]
    fn absent_input_is_rejected() {
        let err = map_words_to_letters(None::<&str>).unwrap_err();
        assert_eq!(err, IndexError::InvalidInput);
        assert_eq!(err.to_string(), "Input text cannot be null or empty");
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = map_words_to_letters("").unwrap_err();
        assert_eq!(err.to_string(), "Input text cannot be null or empty");
    }

    #[test]
    fn whitespace_only_yields_empty_index() {
        let index = map_words_to_letters("     ").expect("whitespace is valid");
        assert!(index.is_empty());
    }

    #[test]
    fn special_signs_only_yield_empty_index() {
        let index =
            map_words_to_letters(" ,,,,.$%^&* ^&#&%^><<? *.*.*.*").expect("punctuation is valid");
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn letter_case_collapses() {
        let index = map_words_to_letters("ala, ala, Ala, ALa, ALA, aLa, aLA, alA")
            .expect("should index text");
        assert_eq!(index.len(), 2);
        assert_eq!(index.letters().collect::<Vec<_>>(), vec!['a', 'l']);
        assert_eq!(index.words('a'), vec!["ala"]);
        assert_eq!(index.words('l'), vec!["ala"]);
    }

    #[test]
    fn email_like_token_splits_on_signs() {
        let index = map_words_to_letters("john.doe123@gmail.com").expect("should index text");
        assert_eq!(index.len(), 12);
        assert_eq!(
            index.letters().collect::<Vec<_>>(),
            vec!['a', 'c', 'd', 'e', 'g', 'h', 'i', 'j', 'l', 'm', 'n', 'o']
        );
        assert_eq!(index.words('j'), vec!["john"]);
        assert_eq!(index.words('d'), vec!["doe123"]);
        assert_eq!(index.words('g'), vec!["gmail"]);
        assert_eq!(index.words('c'), vec!["com"]);
        assert_eq!(index.words('o'), vec!["com", "doe123", "john"]);
    }

    #[test]
    fn leading_signs_and_numeric_prefix() {
        let index = map_words_to_letters(",,,,.john 123john").expect("should index text");
        assert_eq!(index.len(), 4);
        assert_eq!(keys(",,,,.john 123john"), vec!['h', 'j', 'n', 'o']);
        for letter in ['h', 'j', 'n', 'o'] {
            assert_eq!(index.words(letter), vec!["123john", "john"]);
        }
    }

    #[test]
    fn multiple_spaces_and_single_letter_words() {
        let index = map_words_to_letters("john      /john doe@ j.o.h.n").expect("should index text");
        assert_eq!(index.len(), 6);
        assert_eq!(
            index.letters().collect::<Vec<_>>(),
            vec!['d', 'e', 'h', 'j', 'n', 'o']
        );
        assert_eq!(index.words('j'), vec!["j", "john"]);
    }

    #[test]
    fn doubled_words_across_sentence() {
        let index =
            map_words_to_letters("ala ma kota, kot koduje w Javie Kota").expect("should index text");
        assert_eq!(index.len(), 13);
        assert_eq!(
            index.letters().collect::<Vec<_>>(),
            vec!['a', 'd', 'e', 'i', 'j', 'k', 'l', 'm', 'o', 't', 'u', 'v', 'w']
        );
        assert_eq!(index.words('a'), vec!["ala", "javie", "kota", "ma"]);
        assert_eq!(index.words('d'), vec!["koduje"]);
        assert_eq!(index.words('e'), vec!["javie", "koduje"]);
        assert_eq!(index.words('i'), vec!["javie"]);
        assert_eq!(index.words('j'), vec!["javie", "koduje"]);
        assert_eq!(index.words('k'), vec!["koduje", "kot", "kota"]);
        assert_eq!(index.words('l'), vec!["ala"]);
        assert_eq!(index.words('m'), vec!["ma"]);
        assert_eq!(index.words('o'), vec!["koduje", "kot", "kota"]);
        assert_eq!(index.words('t'), vec!["kot", "kota"]);
        assert_eq!(index.words('u'), vec!["koduje"]);
        assert_eq!(index.words('v'), vec!["javie"]);
        assert_eq!(index.words('w'), vec!["w"]);
    }

    #[test]
    fn numbers_only_yield_empty_index() {
        let index = map_words_to_letters("123 456,789").expect("should index text");
        assert!(index.is_empty());
    }

    #[test]
    fn indexer_is_reusable() {
        let indexer = LetterIndexer::new();
        let first = indexer.index("ala ma kota").expect("should index text");
        let second = indexer.index("ala ma kota").expect("should index text");
        assert_eq!(first, second);
        assert_eq!(indexer.index("w").expect("should index text").len(), 1);
    }

    #[test]
    fn custom_separator_changes_raw_tokens() {
        let config = IndexerConfig::with_separator(b'\n').expect("ascii separator");
        let indexer = LetterIndexer::with_config(config);
        assert_eq!(indexer.config().separator(), b'\n');

        let index = indexer.index("ab\ncd").expect("should index text");
        assert_eq!(index.words('a'), vec!["ab"]);
        assert_eq!(index.words('c'), vec!["cd"]);
    }

    #[test]
    fn rejected_input_leaves_no_partial_result() {
        let indexer = LetterIndexer::new();
        assert_eq!(indexer.index(""), Err(IndexError::InvalidInput));
        assert_eq!(indexer.index(None::<&str>), Err(IndexError::InvalidInput));
        assert_eq!(indexer.index("ala").map(|i| i.len()), Ok(2));
    }

    #[test]
    fn superscript_digits_stay_in_words() {
        let index = map_words_to_letters("x\u{00B2}y").expect("should index text");
        assert_eq!(index.words('x'), vec!["x\u{00B2}y"]);
        assert_eq!(index.letters().collect::<Vec<_>>(), vec!['x', 'y']);
    }

    #[test]
    fn combining_marks_never_become_keys() {
        let index = map_words_to_letters("a\u{0345}b").expect("should index text");
        assert_eq!(index.letters().collect::<Vec<_>>(), vec!['a', 'b']);
        assert_eq!(index.words('a'), vec!["a"]);
        assert_eq!(index.words('b'), vec!["b"]);
    }

    #[test]
    fn concurrent_callers_agree() {
        let indexer = LetterIndexer::new();
        let expected = indexer.index("ala ma kota").expect("should index text");

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| indexer.index("ala ma kota").expect("should index text")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().expect("thread should finish"), expected);
            }
        });
    }
}
