//! Indexer handle.

use crate::analyzer::tokenizer::WordTokenizer;
use letterdex_types::IndexerConfig;

/// Reusable word-letter indexer.
///
/// Holds only its configuration, so one instance can serve any number of
/// calls, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterIndexer {
    pub(crate) tokenizer: WordTokenizer,
}

impl LetterIndexer {
    /// Creates an indexer with the default configuration.
    pub const fn new() -> Self {
        Self::with_config(IndexerConfig::DEFAULT)
    }

    /// Creates an indexer with a custom configuration.
    pub const fn with_config(config: IndexerConfig) -> Self {
        Self {
            tokenizer: WordTokenizer::new(config),
        }
    }

    /// Returns the active configuration.
    #[inline(always)]
    pub const fn config(&self) -> IndexerConfig {
        self.tokenizer.config()
    }
}
