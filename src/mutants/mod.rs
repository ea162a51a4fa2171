//! The mutant catalogue: a closed set of engines that each violate the
//! reference contract on exactly one axis, registered statically so the
//! harness can walk them in a fixed order.

pub mod casing;
pub mod ordering;
pub mod storage;
pub mod truncation;
pub mod validation;

use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::{FrequencyTable, WordStatistics};

pub use casing::{MixedCaseKeys, PartialAlphabetFolding};
pub use ordering::{AscendingCountOrder, CountOrderOnly, DescendingPairOrder, ReorderedByWord, WordOrderOnly};
pub use storage::{FixedSlotTable, LinearScanList, ResortingList, SharedTableStatistics, SLOT_CAPACITY};
pub use truncation::{MissingTruncation, OffByOneTruncation, OverTruncation, UncheckedTruncation};
pub use validation::{AsciiBlankCheck, EmptyOnlyCheck, LateEmptinessCheck, SilentNullDrop, WhitespaceRejection};

/// Constructor for one catalogue engine. Boxed because the shared-table
/// entry captures the table all of its instances share.
pub type EngineFactory = Box<dyn Fn() -> Box<dyn WordStatistics>>;

pub struct CatalogueEntry {
    pub name: &'static str,
    pub make: EngineFactory,
}

fn entry(name: &'static str, make: fn() -> Box<dyn WordStatistics>) -> CatalogueEntry {
    CatalogueEntry {
        name,
        make: Box::new(make),
    }
}

/// The full catalogue in a fixed order, grouped by deviation axis.
///
/// Each call returns fresh factories; in particular the `shared-table`
/// entry gets a new shared table per catalogue, so separate harness runs
/// stay independent while instances within one run leak into each other.
pub fn catalogue() -> Vec<CatalogueEntry> {
    let shared = Rc::new(RefCell::new(FrequencyTable::new()));
    let shared_table = CatalogueEntry {
        name: "shared-table",
        make: Box::new(move || -> Box<dyn WordStatistics> {
            Box::new(SharedTableStatistics::attach(Rc::clone(&shared)))
        }),
    };

    vec![
        entry("whitespace-rejection", || Box::new(WhitespaceRejection::new())),
        entry("silent-null-drop", || Box::new(SilentNullDrop::new())),
        entry("late-emptiness-check", || Box::new(LateEmptinessCheck::new())),
        entry("ascii-blank-check", || Box::new(AsciiBlankCheck::new())),
        entry("empty-only-check", || Box::new(EmptyOnlyCheck::new())),
        entry("unchecked-truncation", || Box::new(UncheckedTruncation::new())),
        entry("missing-truncation", || Box::new(MissingTruncation::new())),
        entry("over-truncation", || Box::new(OverTruncation::new())),
        entry("off-by-one-truncation", || Box::new(OffByOneTruncation::new())),
        entry("mixed-case-keys", || Box::new(MixedCaseKeys::new())),
        entry("partial-alphabet-folding", || Box::new(PartialAlphabetFolding::new())),
        entry("word-order-only", || Box::new(WordOrderOnly::new())),
        entry("count-order-only", || Box::new(CountOrderOnly::new())),
        entry("ascending-count-order", || Box::new(AscendingCountOrder::new())),
        entry("reordered-by-word", || Box::new(ReorderedByWord::new())),
        entry("descending-pair-order", || Box::new(DescendingPairOrder::new())),
        shared_table,
        entry("fixed-slot-table", || Box::new(FixedSlotTable::new())),
        entry("resorting-list", || Box::new(ResortingList::new())),
        entry("linear-scan-list", || Box::new(LinearScanList::new())),
    ]
}
