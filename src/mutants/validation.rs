//! Variants that get the argument-validation boundary wrong: which inputs
//! raise, which are silently ignored, and in what order the checks run.

use crate::engine::{rank, truncate_to_cap, FrequencyTable, StatsError, WordCount, WordStatistics};

/// Raises `InvalidArgument` on empty and whitespace-only words instead of
/// silently ignoring them.
#[derive(Debug, Default)]
pub struct WhitespaceRejection {
    table: FrequencyTable,
}

impl WhitespaceRejection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for WhitespaceRejection {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        match word {
            Some(word) if !word.chars().all(char::is_whitespace) => {
                let word = truncate_to_cap(word);
                self.table.increment(&word.to_lowercase());
                Ok(())
            }
            _ => Err(StatsError::InvalidArgument),
        }
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.table.entries())
    }
}

/// Treats an absent word as a no-op: the mandatory `InvalidArgument` never
/// surfaces.
#[derive(Debug, Default)]
pub struct SilentNullDrop {
    table: FrequencyTable,
}

impl SilentNullDrop {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for SilentNullDrop {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let Some(word) = word else {
            return Ok(());
        };
        if word.chars().all(char::is_whitespace) {
            return Ok(());
        }
        let word = truncate_to_cap(word);
        self.table.increment(&word.to_lowercase());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.table.entries())
    }
}

/// Runs the blank check after truncation, so a long word whose first ten
/// characters are whitespace is dropped instead of counted.
#[derive(Debug, Default)]
pub struct LateEmptinessCheck {
    table: FrequencyTable,
}

impl LateEmptinessCheck {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for LateEmptinessCheck {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument)?;
        let word = truncate_to_cap(word);
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

/// Skips null rejection entirely and recognizes only ASCII whitespace as
/// blank, so `\u{00A0}` and friends get counted.
#[derive(Debug, Default)]
pub struct AsciiBlankCheck {
    table: FrequencyTable,
}

impl AsciiBlankCheck {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for AsciiBlankCheck {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.unwrap_or("");
        if word.is_empty() || word.bytes().all(|b| b.is_ascii_whitespace()) {
            return Ok(());
        }
        let word = truncate_to_cap(word);
        self.table.increment(&word.to_lowercase());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.table.entries())
    }
}

/// Ignores only the literally empty string; whitespace-only words are
/// counted as keys.
#[derive(Debug, Default)]
pub struct EmptyOnlyCheck {
    table: FrequencyTable,
}

impl EmptyOnlyCheck {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for EmptyOnlyCheck {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument)?;
        if word.is_empty() {
            return Ok(());
        }
        let word = truncate_to_cap(word);
        self.table.increment(&word.to_lowercase());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.table.entries())
    }
}
