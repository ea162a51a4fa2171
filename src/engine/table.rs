use std::collections::HashMap;

use crate::engine::contract::{WordCount, WORD_CAP};

/// Counting storage shared by the reference engine and most variants.
///
/// Keys enumerate in insertion order, so variants that only partially sort
/// their output still behave deterministically under test. Counts and order
/// are kept in step: a key appears in `order` exactly when it has an entry
/// in `counts`.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the count for `key`, inserting it at 1 when absent.
    pub fn increment(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
                self.order.push(key.to_string());
            }
        }
    }

    /// Insert `key` with a zero count when absent, without bumping it.
    /// Only the mixed-case-keys variant needs this; the reference contract
    /// never stores a zero.
    pub fn seed(&mut self, key: &str) {
        if !self.counts.contains_key(key) {
            self.counts.insert(key.to_string(), 0);
            self.order.push(key.to_string());
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.order.clear();
    }

    /// Snapshot of the table in insertion order.
    pub fn entries(&self) -> Vec<WordCount> {
        self.order
            .iter()
            .map(|word| WordCount::new(self.counts[word], word.clone()))
            .collect()
    }
}

/// Cut `word` down to its first [`WORD_CAP`] characters when longer.
pub fn truncate_to_cap(word: &str) -> &str {
    match word.char_indices().nth(WORD_CAP) {
        Some((byte_idx, _)) => &word[..byte_idx],
        None => word,
    }
}
