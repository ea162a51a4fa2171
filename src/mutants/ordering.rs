//! Variants that count correctly but order the report wrong. The first
//! three compose the reference admission policy with their own sort; the
//! wrappers re-sort the reference engine's finished report.

use crate::engine::{admit_word, FrequencyTable, ReferenceStatistics, StatsError, WordCount, WordStatistics};

/// Orders by word ascending only, discarding the count ordering entirely.
#[derive(Debug, Default)]
pub struct WordOrderOnly {
    table: FrequencyTable,
}

impl WordOrderOnly {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for WordOrderOnly {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        admit_word(&mut self.table, word)
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let mut report = self.table.entries();
        report.sort_by(|a, b| a.word.cmp(&b.word));
        report
    }
}

/// Orders by count descending only. Ties keep insertion order instead of
/// breaking by word ascending.
#[derive(Debug, Default)]
pub struct CountOrderOnly {
    table: FrequencyTable,
}

impl CountOrderOnly {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for CountOrderOnly {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        admit_word(&mut self.table, word)
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let mut report = self.table.entries();
        report.sort_by(|a, b| b.count.cmp(&a.count));
        report
    }
}

/// Orders by count ascending: the rarest words come first.
#[derive(Debug, Default)]
pub struct AscendingCountOrder {
    table: FrequencyTable,
}

impl AscendingCountOrder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for AscendingCountOrder {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        admit_word(&mut self.table, word)
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let mut report = self.table.entries();
        report.sort_by(|a, b| a.count.cmp(&b.count));
        report
    }
}

/// Takes the reference engine's report and re-sorts it by word ascending,
/// silently throwing the count ordering away.
#[derive(Debug, Default)]
pub struct ReorderedByWord {
    inner: ReferenceStatistics,
}

impl ReorderedByWord {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for ReorderedByWord {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        self.inner.add_word(word)
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let mut report = self.inner.get_statistics();
        report.sort_by(|a, b| a.word.cmp(&b.word));
        report
    }
}

/// Re-sorts the reference engine's report descending on the whole pair, so
/// equal counts break by word descending instead of ascending.
#[derive(Debug, Default)]
pub struct DescendingPairOrder {
    inner: ReferenceStatistics,
}

impl DescendingPairOrder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for DescendingPairOrder {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        self.inner.add_word(word)
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let mut report = self.inner.get_statistics();
        report.sort_by(|a, b| b.cmp(a));
        report
    }
}
