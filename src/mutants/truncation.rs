//! Variants that cut words to the wrong length, or fail to cut them at all.

use crate::engine::{rank, truncate_to_cap, FrequencyTable, StatsError, WordCount, WordStatistics, WORD_CAP};

fn take_chars(word: &str, limit: usize) -> &str {
    match word.char_indices().nth(limit) {
        Some((byte_idx, _)) => &word[..byte_idx],
        None => word,
    }
}

/// Slices the first [`WORD_CAP`] bytes with no length check. Any word
/// shorter than the cap (or with a multi-byte character straddling it)
/// panics inside `add_word`.
#[derive(Debug, Default)]
pub struct UncheckedTruncation {
    table: FrequencyTable,
}

impl UncheckedTruncation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for UncheckedTruncation {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument)?;
        if word.chars().all(char::is_whitespace) {
            return Ok(());
        }
        let word = &word[..WORD_CAP];
        self.table.increment(&word.to_lowercase());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.table.entries())
    }
}

/// Never truncates: an eleven-character word and its ten-character prefix
/// count separately.
#[derive(Debug, Default)]
pub struct MissingTruncation {
    table: FrequencyTable,
}

impl MissingTruncation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for MissingTruncation {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument)?;
        if word.chars().all(char::is_whitespace) {
            return Ok(());
        }
        self.table.increment(&word.to_lowercase());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.table.entries())
    }
}

/// Truncates over-cap words correctly but also shrinks words of six to ten
/// characters by one.
#[derive(Debug, Default)]
pub struct OverTruncation {
    table: FrequencyTable,
}

impl OverTruncation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for OverTruncation {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument)?;
        if word.chars().all(char::is_whitespace) {
            return Ok(());
        }
        let chars = word.chars().count();
        let word = if chars > WORD_CAP {
            truncate_to_cap(word)
        } else if chars > 5 {
            take_chars(word, chars - 1)
        } else {
            word
        };
        self.table.increment(&word.to_lowercase());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.table.entries())
    }
}

/// Truncates only when `length - 1 > WORD_CAP`, so eleven-character words
/// slip through whole.
#[derive(Debug, Default)]
pub struct OffByOneTruncation {
    table: FrequencyTable,
}

impl OffByOneTruncation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for OffByOneTruncation {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument)?;
        if word.chars().all(char::is_whitespace) {
            return Ok(());
        }
        let chars = word.chars().count();
        let word = if chars - 1 > WORD_CAP {
            truncate_to_cap(word)
        } else {
            word
        };
        self.table.increment(&word.to_lowercase());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.table.entries())
    }
}
