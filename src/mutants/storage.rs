//! Variants that store counts in the wrong place: a table shared across
//! instances, a fixed block of hash slots with silent collisions, and two
//! list-backed tables whose updates degrade linearly.

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use fnv::FnvHasher;

use crate::engine::{admit_word, rank, truncate_to_cap, FrequencyTable, StatsError, WordCount, WordStatistics};

/// All handles constructed from one registry entry share a single injected
/// table, and each construction wipes it. Two live instances corrupt each
/// other's counts.
#[derive(Debug)]
pub struct SharedTableStatistics {
    table: Rc<RefCell<FrequencyTable>>,
}

impl SharedTableStatistics {
    /// Attach a new handle to `table`, clearing whatever previous handles
    /// accumulated in it.
    pub fn attach(table: Rc<RefCell<FrequencyTable>>) -> Self {
        table.borrow_mut().clear();
        Self { table }
    }
}

impl WordStatistics for SharedTableStatistics {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        admit_word(&mut self.table.borrow_mut(), word)
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.table.borrow().entries())
    }
}

/// Slot count of the bounded hash table. Prime, but far too small for the
/// vocabulary it claims to handle.
pub const SLOT_CAPACITY: usize = 12_347;

/// A fixed block of hash slots addressed by FNV modulo capacity, with no
/// collision resolution: colliding words pool their counts and the slot
/// remembers whichever word arrived last.
#[derive(Debug)]
pub struct FixedSlotTable {
    counts: Vec<u32>,
    words: Vec<Option<String>>,
}

impl FixedSlotTable {
    pub fn new() -> Self {
        Self {
            counts: vec![0; SLOT_CAPACITY],
            words: vec![None; SLOT_CAPACITY],
        }
    }

    fn slot(key: &str) -> usize {
        let mut hasher = FnvHasher::default();
        key.hash(&mut hasher);
        (hasher.finish() % SLOT_CAPACITY as u64) as usize
    }
}

impl Default for FixedSlotTable {
    fn default() -> Self {
        Self::new()
    }
}

impl WordStatistics for FixedSlotTable {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument)?;
        if word.chars().all(char::is_whitespace) {
            return Ok(());
        }
        let key = truncate_to_cap(word).to_lowercase();
        let slot = Self::slot(&key);
        self.counts[slot] += 1;
        self.words[slot] = Some(key);
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let entries = self
            .counts
            .iter()
            .zip(&self.words)
            .filter(|(count, _)| **count > 0)
            .map(|(count, word)| WordCount::new(*count, word.clone().unwrap_or_default()))
            .collect();
        rank(entries)
    }
}

/// Keeps a list of `(negated count, word)` pairs that it re-sorts in full
/// on every add, after a linear scan for the existing entry. The report is
/// correct; the time per update is not.
#[derive(Debug, Default)]
pub struct ResortingList {
    entries: Vec<(i64, String)>,
}

impl ResortingList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for ResortingList {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument)?;
        if word.chars().all(char::is_whitespace) {
            return Ok(());
        }
        let key = truncate_to_cap(word).to_lowercase();
        let negated = match self.entries.iter().position(|(_, entry)| *entry == key) {
            Some(pos) => self.entries.remove(pos).0,
            None => 0,
        };
        self.entries.push((negated - 1, key));
        // Negated counts make the tuple sort come out count-descending,
        // word-ascending.
        self.entries.sort();
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        self.entries
            .iter()
            .map(|(negated, word)| WordCount::new((-negated) as u32, word.clone()))
            .collect()
    }
}

/// Tracks seen words in a set but keeps counts in a plain list, so every
/// duplicate update scans, removes and re-pushes its row.
#[derive(Debug, Default)]
pub struct LinearScanList {
    seen: HashSet<String>,
    rows: Vec<WordCount>,
}

impl LinearScanList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for LinearScanList {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument)?;
        if word.chars().all(char::is_whitespace) {
            return Ok(());
        }
        let key = truncate_to_cap(word).to_lowercase();
        if self.seen.contains(&key) {
            if let Some(pos) = self.rows.iter().position(|row| row.word == key) {
                let row = self.rows.remove(pos);
                self.rows.push(WordCount::new(row.count + 1, row.word));
            }
        } else {
            self.rows.push(WordCount::new(1, key.clone()));
            self.seen.insert(key);
        }
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        rank(self.rows.clone())
    }
}
