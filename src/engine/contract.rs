use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of characters a word keeps before counting.
pub const WORD_CAP: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// An absent word reference was passed to `add_word`. Checked before
    /// any other condition and never swallowed.
    #[error("invalid argument: word reference is absent")]
    InvalidArgument,
}

/// One row of a statistics report.
///
/// Field order matters: the derived `Ord` compares count first, then word,
/// which is exactly the whole-pair ordering some catalogue variants abuse.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordCount {
    pub count: u32,
    pub word: String,
}

impl WordCount {
    pub fn new(count: u32, word: impl Into<String>) -> Self {
        Self {
            count,
            word: word.into(),
        }
    }
}

/// The two-operation word-statistics capability every engine implements.
///
/// Contract (the reference behavior; variants deviate on exactly one axis):
/// - `add_word(None)` fails with [`StatsError::InvalidArgument`], checked
///   before anything else.
/// - Empty and whitespace-only words are silently ignored.
/// - Other words are truncated to the first [`WORD_CAP`] characters when
///   longer, folded to lowercase, and counted under that key.
/// - `get_statistics` returns a fresh report ordered by count descending,
///   ties broken by word ascending. It never fails and reads repeatably.
pub trait WordStatistics {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError>;

    fn get_statistics(&self) -> Vec<WordCount>;
}
