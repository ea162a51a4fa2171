use std::cmp::Ordering;

use crate::engine::contract::{StatsError, WordCount, WordStatistics};
use crate::engine::table::{truncate_to_cap, FrequencyTable};

/// The reference admission policy: validate, normalize, count.
///
/// Shared with the variants that deviate only in storage or ordering, so
/// each of those differs from the reference on exactly one axis.
pub fn admit_word(table: &mut FrequencyTable, word: Option<&str>) -> Result<(), StatsError> {
    let word = word.ok_or(StatsError::InvalidArgument)?;
    if word.chars().all(char::is_whitespace) {
        // Empty and whitespace-only words are defined no-ops, not errors.
        return Ok(());
    }
    let word = truncate_to_cap(word);
    table.increment(&word.to_lowercase());
    Ok(())
}

/// The reference ordering policy: count descending, ties by word ascending.
pub fn rank(mut entries: Vec<WordCount>) -> Vec<WordCount> {
    entries.sort_by(|a, b| match b.count.cmp(&a.count) {
        Ordering::Equal => a.word.cmp(&b.word),
        unequal => unequal,
    });
    entries
}

/// The correct engine. Every assertion in the shared suite must pass on it.
#[derive(Debug, Default)]
pub struct ReferenceStatistics {
    table: FrequencyTable,
}

impl ReferenceStatistics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for ReferenceStatistics {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        admit_word(&mut self.table, word)
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let report = rank(self.table.entries());

        debug_assert!(report.windows(2).all(|pair| {
            let a = &pair[0];
            let b = &pair[1];
            a.count > b.count || (a.count == b.count && a.word < b.word)
        }));

        report
    }
}
