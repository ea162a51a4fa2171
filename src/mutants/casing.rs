//! Variants that fold case incompletely or key their counts inconsistently.

use crate::engine::{rank, truncate_to_cap, FrequencyTable, StatsError, WordCount, WordStatistics};

/// Probes existence on the folded key but counts under the original casing,
/// so case variants of one word fragment into separate entries.
#[derive(Debug, Default)]
pub struct MixedCaseKeys {
    table: FrequencyTable,
}

impl MixedCaseKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for MixedCaseKeys {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument)?;
        if word.chars().all(char::is_whitespace) {
            return Ok(());
        }
        let word = truncate_to_cap(word);
        let folded = word.to_lowercase();
        if !self.table.contains(&folded) {
            self.table.seed(word);
        }
        self.table.increment(word);
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.table.entries())
    }
}

// Both alphabets are deliberately incomplete: the Latin one is missing `K`,
// the Cyrillic one is missing `Ж`, `Х`, `Ъ`, `Э`, `Б`, `Ю` and `Ё`.
const FOLDED_LATIN: &str = "QWERTYUIOPLJHGFDSAZXCVBNM";
const FOLDED_CYRILLIC: &str = "ЙЦУКЕНГШЩЗФЫВАПРОЛДЯЧСМИТЬ";

fn fold_char(c: char) -> char {
    if FOLDED_LATIN.contains(c) || FOLDED_CYRILLIC.contains(c) {
        // Both listed alphabets sit exactly 32 code points above their
        // lowercase forms.
        char::from_u32(c as u32 + 32).unwrap_or(c)
    } else {
        c
    }
}

fn fold(word: &str) -> String {
    word.chars().map(fold_char).collect()
}

/// Folds only two hardcoded uppercase alphabets instead of applying
/// locale-invariant lowercasing; any uppercase letter outside them keeps
/// its case and splits the count.
#[derive(Debug, Default)]
pub struct PartialAlphabetFolding {
    table: FrequencyTable,
}

impl PartialAlphabetFolding {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for PartialAlphabetFolding {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument)?;
        if word.chars().all(char::is_whitespace) {
            return Ok(());
        }
        let word = truncate_to_cap(word);
        self.table.increment(&fold(word));
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.table.entries())
    }
}
