pub mod contract;
pub mod reference;
pub mod table;

pub use contract::{StatsError, WordCount, WordStatistics, WORD_CAP};
pub use reference::{admit_word, rank, ReferenceStatistics};
pub use table::{truncate_to_cap, FrequencyTable};
