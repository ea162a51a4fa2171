//! Each catalogue variant must reproduce its documented deviation exactly,
//! not merely "be wrong somehow". These tests pin the observable behavior
//! the shared suite relies on to kill them.

use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use wordstats_kata::engine::{FrequencyTable, WordStatistics};
use wordstats_kata::mutants::{
    AsciiBlankCheck, AscendingCountOrder, CountOrderOnly, DescendingPairOrder, EmptyOnlyCheck,
    FixedSlotTable, LateEmptinessCheck, LinearScanList, MissingTruncation, MixedCaseKeys,
    OffByOneTruncation, OverTruncation, PartialAlphabetFolding, ReorderedByWord, ResortingList,
    SharedTableStatistics, SilentNullDrop, UncheckedTruncation, WhitespaceRejection, WordOrderOnly,
    SLOT_CAPACITY,
};

fn pairs(stat: &dyn WordStatistics) -> Vec<(u32, String)> {
    stat.get_statistics()
        .into_iter()
        .map(|row| (row.count, row.word))
        .collect()
}

fn add_all(stat: &mut dyn WordStatistics, words: &[&str]) {
    for word in words {
        stat.add_word(Some(word)).unwrap();
    }
}

#[test]
fn whitespace_rejection_raises_on_blank_words() {
    let mut stat = WhitespaceRejection::new();
    assert!(stat.add_word(Some("   ")).is_err());
    assert!(stat.add_word(Some("")).is_err());
    assert!(stat.add_word(None).is_err());
    assert!(stat.add_word(Some("word")).is_ok());
}

#[test]
fn silent_null_drop_accepts_an_absent_word() {
    let mut stat = SilentNullDrop::new();
    assert!(stat.add_word(None).is_ok());
    assert!(stat.get_statistics().is_empty());
}

#[test]
fn late_emptiness_check_drops_blank_prefixed_long_words() {
    let mut stat = LateEmptinessCheck::new();
    add_all(&mut stat, &["          x"]);
    assert!(stat.get_statistics().is_empty());
}

#[test]
fn ascii_blank_check_counts_unicode_whitespace() {
    let mut stat = AsciiBlankCheck::new();
    assert!(stat.add_word(None).is_ok());
    add_all(&mut stat, &["\u{00A0}", "   "]);
    assert_eq!(pairs(&stat), vec![(1, "\u{00A0}".to_string())]);
}

#[test]
fn empty_only_check_counts_blank_words() {
    let mut stat = EmptyOnlyCheck::new();
    add_all(&mut stat, &["", "   "]);
    assert_eq!(pairs(&stat), vec![(1, "   ".to_string())]);
}

#[test]
fn unchecked_truncation_panics_on_short_words() {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut stat = UncheckedTruncation::new();
        stat.add_word(Some("abc"))
    }));
    assert!(outcome.is_err());

    // Exactly ten bytes is the one width it handles.
    let mut stat = UncheckedTruncation::new();
    add_all(&mut stat, &["abcdefghij"]);
    assert_eq!(pairs(&stat), vec![(1, "abcdefghij".to_string())]);
}

#[test]
fn missing_truncation_keeps_long_words_whole() {
    let mut stat = MissingTruncation::new();
    add_all(&mut stat, &["abcdefghijk"]);
    assert_eq!(pairs(&stat), vec![(1, "abcdefghijk".to_string())]);
}

#[test]
fn over_truncation_shrinks_medium_words_by_one() {
    let mut stat = OverTruncation::new();
    add_all(&mut stat, &["abcdef", "abcde"]);
    // "abcdef" loses a character and collides with "abcde", which is short
    // enough to survive whole.
    assert_eq!(pairs(&stat), vec![(2, "abcde".to_string())]);
}

#[test]
fn off_by_one_truncation_lets_eleven_characters_through() {
    let mut stat = OffByOneTruncation::new();
    add_all(&mut stat, &["abcdefghijk", "abcdefghijkl"]);
    assert_eq!(
        pairs(&stat),
        vec![
            (1, "abcdefghij".to_string()),
            (1, "abcdefghijk".to_string()),
        ]
    );
}

#[test]
fn mixed_case_keys_fragment_case_variants() {
    let mut stat = MixedCaseKeys::new();
    add_all(&mut stat, &["Foo", "foo", "FOO"]);
    assert_eq!(
        pairs(&stat),
        vec![
            (1, "FOO".to_string()),
            (1, "Foo".to_string()),
            (1, "foo".to_string()),
        ]
    );
}

#[test]
fn partial_alphabet_folding_misses_some_letters() {
    let mut stat = PartialAlphabetFolding::new();
    add_all(&mut stat, &["Q", "q"]);
    assert_eq!(pairs(&stat), vec![(2, "q".to_string())]);

    let mut stat = PartialAlphabetFolding::new();
    add_all(&mut stat, &["K", "k", "Ж", "ж"]);
    assert_eq!(stat.get_statistics().len(), 4);
}

#[test]
fn word_order_only_ignores_counts() {
    let mut stat = WordOrderOnly::new();
    add_all(&mut stat, &["bb", "bb", "aa"]);
    assert_eq!(
        pairs(&stat),
        vec![(1, "aa".to_string()), (2, "bb".to_string())]
    );
}

#[test]
fn count_order_only_leaves_ties_in_insertion_order() {
    let mut stat = CountOrderOnly::new();
    add_all(&mut stat, &["zz", "yy"]);
    assert_eq!(
        pairs(&stat),
        vec![(1, "zz".to_string()), (1, "yy".to_string())]
    );
}

#[test]
fn ascending_count_order_reports_rarest_first() {
    let mut stat = AscendingCountOrder::new();
    add_all(&mut stat, &["bb", "bb", "aa"]);
    assert_eq!(
        pairs(&stat),
        vec![(1, "aa".to_string()), (2, "bb".to_string())]
    );
}

#[test]
fn reordered_by_word_discards_count_ordering() {
    let mut stat = ReorderedByWord::new();
    add_all(&mut stat, &["bb", "bb", "aa"]);
    assert_eq!(
        pairs(&stat),
        vec![(1, "aa".to_string()), (2, "bb".to_string())]
    );
}

#[test]
fn descending_pair_order_breaks_ties_by_word_descending() {
    let mut stat = DescendingPairOrder::new();
    add_all(&mut stat, &["yy", "zz"]);
    assert_eq!(
        pairs(&stat),
        vec![(1, "zz".to_string()), (1, "yy".to_string())]
    );
}

#[test]
fn shared_table_leaks_across_instances() {
    let shared = Rc::new(RefCell::new(FrequencyTable::new()));

    let mut first = SharedTableStatistics::attach(Rc::clone(&shared));
    add_all(&mut first, &["xx"]);
    assert_eq!(first.get_statistics().len(), 1);

    // Constructing a second handle wipes the table out from under the
    // first.
    let mut second = SharedTableStatistics::attach(Rc::clone(&shared));
    assert!(first.get_statistics().is_empty());

    add_all(&mut second, &["yy"]);
    assert_eq!(pairs(&first), vec![(1, "yy".to_string())]);
}

#[test]
fn fixed_slot_table_loses_words_to_collisions() {
    let mut stat = FixedSlotTable::new();
    let distinct = SLOT_CAPACITY + 1;
    for i in 0..distinct {
        stat.add_word(Some(&format!("w{i:05}"))).unwrap();
    }
    // Pigeonhole: at least two words landed in the same slot.
    assert!(stat.get_statistics().len() < distinct);
}

#[test]
fn resorting_list_still_reports_the_reference_order() {
    let mut stat = ResortingList::new();
    add_all(&mut stat, &["b", "c", "b", "a", "c", "a", "c", "b", "a", "c", "c"]);
    assert_eq!(
        pairs(&stat),
        vec![
            (5, "c".to_string()),
            (3, "a".to_string()),
            (3, "b".to_string()),
        ]
    );
}

#[test]
fn linear_scan_list_counts_duplicates_correctly() {
    let mut stat = LinearScanList::new();
    add_all(&mut stat, &["aa", "bb", "aa"]);
    assert_eq!(
        pairs(&stat),
        vec![(2, "aa".to_string()), (1, "bb".to_string())]
    );
}
