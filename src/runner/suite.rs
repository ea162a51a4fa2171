//! The shared assertion suite. Every assertion must pass on the reference
//! engine; together they must fail at least once on every catalogue
//! variant. Assertions take a factory rather than an instance so the
//! isolation check can construct more than one engine.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::engine::{StatsError, WordStatistics};

/// Time budget for the bulk assertions. Generous for anything that updates
/// in constant time per word, hopeless for the list-backed variants.
const BULK_BUDGET: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    pub message: String,
}

impl AssertionFailure {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<StatsError> for AssertionFailure {
    fn from(err: StatsError) -> Self {
        Self::new(format!("unexpected error: {err}"))
    }
}

/// One named check of the engine contract.
pub struct Assertion {
    pub name: &'static str,
    pub check: fn(&dyn Fn() -> Box<dyn WordStatistics>) -> Result<(), AssertionFailure>,
}

/// The suite in a fixed order.
pub fn assertions() -> Vec<Assertion> {
    fn named(
        name: &'static str,
        check: fn(&dyn Fn() -> Box<dyn WordStatistics>) -> Result<(), AssertionFailure>,
    ) -> Assertion {
        Assertion { name, check }
    }

    vec![
        named("empty_after_creation", empty_after_creation),
        named("repeated_word_accumulates", repeated_word_accumulates),
        named("case_variants_share_a_count", case_variants_share_a_count),
        named("uncommon_latin_uppercase_folds", uncommon_latin_uppercase_folds),
        named("cyrillic_uppercase_folds", cyrillic_uppercase_folds),
        named("eleven_character_words_truncate", eleven_character_words_truncate),
        named("short_words_survive_whole", short_words_survive_whole),
        named("empty_word_is_ignored", empty_word_is_ignored),
        named("blank_word_is_ignored", blank_word_is_ignored),
        named("unicode_blank_is_ignored", unicode_blank_is_ignored),
        named("blank_prefix_of_long_word_counts", blank_prefix_of_long_word_counts),
        named("null_word_is_rejected", null_word_is_rejected),
        named("report_orders_by_count_then_word", report_orders_by_count_then_word),
        named("equal_counts_tie_break_ascending", equal_counts_tie_break_ascending),
        named("reports_are_repeatable", reports_are_repeatable),
        named("instances_do_not_share_counts", instances_do_not_share_counts),
        named("every_distinct_word_is_reported", every_distinct_word_is_reported),
        named("bulk_updates_finish_promptly", bulk_updates_finish_promptly),
    ]
}

fn ensure(condition: bool, message: impl Into<String>) -> Result<(), AssertionFailure> {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailure::new(message))
    }
}

fn feed(stat: &mut dyn WordStatistics, words: &[&str]) -> Result<(), AssertionFailure> {
    for word in words {
        stat.add_word(Some(word))?;
    }
    Ok(())
}

fn feed_within(
    stat: &mut dyn WordStatistics,
    words: impl IntoIterator<Item = String>,
    budget: Duration,
) -> Result<(), AssertionFailure> {
    let deadline = Instant::now() + budget;
    for word in words {
        stat.add_word(Some(&word))?;
        if Instant::now() > deadline {
            return Err(AssertionFailure::new(format!(
                "updates exceeded the {budget:?} budget"
            )));
        }
    }
    Ok(())
}

fn pairs(stat: &dyn WordStatistics) -> Vec<(u32, String)> {
    stat.get_statistics()
        .into_iter()
        .map(|row| (row.count, row.word))
        .collect()
}

fn expect_report(
    stat: &dyn WordStatistics,
    expected: &[(u32, &str)],
) -> Result<(), AssertionFailure> {
    let actual = pairs(stat);
    let expected: Vec<(u32, String)> = expected
        .iter()
        .map(|(count, word)| (*count, word.to_string()))
        .collect();
    ensure(
        actual == expected,
        format!("expected report {expected:?}, got {actual:?}"),
    )
}

fn empty_after_creation(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let stat = make();
    ensure(
        stat.get_statistics().is_empty(),
        "a fresh engine must report nothing",
    )
}

fn repeated_word_accumulates(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    feed(stat.as_mut(), &["xxxxxxxxxx", "xxxxxxxxxx", "xxxxxxxxxx"])?;
    expect_report(stat.as_ref(), &[(3, "xxxxxxxxxx")])
}

fn case_variants_share_a_count(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    feed(stat.as_mut(), &["Foo", "foo", "FOO"])?;
    expect_report(stat.as_ref(), &[(3, "foo")])
}

fn uncommon_latin_uppercase_folds(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    feed(stat.as_mut(), &["K", "k"])?;
    expect_report(stat.as_ref(), &[(2, "k")])
}

fn cyrillic_uppercase_folds(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    feed(stat.as_mut(), &["Жук", "жук"])?;
    expect_report(stat.as_ref(), &[(2, "жук")])
}

fn eleven_character_words_truncate(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    feed(stat.as_mut(), &["abcdefghijk", "abcdefghij"])?;
    expect_report(stat.as_ref(), &[(2, "abcdefghij")])
}

fn short_words_survive_whole(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    feed(stat.as_mut(), &["abcdef"])?;
    expect_report(stat.as_ref(), &[(1, "abcdef")])
}

fn empty_word_is_ignored(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    feed(stat.as_mut(), &[""])?;
    ensure(
        stat.get_statistics().is_empty(),
        "an empty word must not enter the table",
    )
}

fn blank_word_is_ignored(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    feed(stat.as_mut(), &["   ", "\t\n"])?;
    ensure(
        stat.get_statistics().is_empty(),
        "whitespace-only words must not enter the table",
    )
}

fn unicode_blank_is_ignored(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    feed(stat.as_mut(), &["\u{00A0}\u{2003}"])?;
    ensure(
        stat.get_statistics().is_empty(),
        "non-ASCII whitespace must also be treated as blank",
    )
}

fn blank_prefix_of_long_word_counts(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    // Not blank as a whole, so it must be counted; truncation then leaves
    // only the ten-space prefix as the key.
    let mut stat = make();
    feed(stat.as_mut(), &["          x"])?;
    expect_report(stat.as_ref(), &[(1, "          ")])
}

fn null_word_is_rejected(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    ensure(
        stat.add_word(None).is_err(),
        "an absent word must raise InvalidArgument",
    )?;
    ensure(
        stat.get_statistics().is_empty(),
        "a rejected word must not enter the table",
    )
}

fn report_orders_by_count_then_word(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    // Insertion order bb, cc, aa with counts bb:3 cc:5 aa:3, chosen so any
    // partial or reversed sort produces a visibly different report.
    let mut stat = make();
    feed(
        stat.as_mut(),
        &["bb", "cc", "bb", "aa", "cc", "aa", "cc", "bb", "aa", "cc", "cc"],
    )?;
    expect_report(stat.as_ref(), &[(5, "cc"), (3, "aa"), (3, "bb")])
}

fn equal_counts_tie_break_ascending(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    feed(stat.as_mut(), &["zz", "yy"])?;
    expect_report(stat.as_ref(), &[(1, "yy"), (1, "zz")])
}

fn reports_are_repeatable(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut stat = make();
    feed(stat.as_mut(), &["aa", "bb", "aa"])?;
    let first = pairs(stat.as_ref());
    let second = pairs(stat.as_ref());
    ensure(
        first == second,
        "reading the report twice must give identical results",
    )?;
    feed(stat.as_mut(), &["bb"])?;
    expect_report(stat.as_ref(), &[(2, "aa"), (2, "bb")])
}

fn instances_do_not_share_counts(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    let mut first = make();
    feed(first.as_mut(), &["xx"])?;
    let second = make();
    ensure(
        second.get_statistics().is_empty(),
        "a second instance must start empty",
    )?;
    expect_report(first.as_ref(), &[(1, "xx")])
}

fn every_distinct_word_is_reported(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    // 13,000 distinct words overflow any bounded table by pigeonhole.
    let mut stat = make();
    let words = (0..13_000).map(|i| format!("w{i:05}"));
    feed_within(stat.as_mut(), words, BULK_BUDGET)?;
    let reported = stat.get_statistics().len();
    ensure(
        reported == 13_000,
        format!("expected 13000 distinct entries, got {reported}"),
    )
}

fn bulk_updates_finish_promptly(
    make: &dyn Fn() -> Box<dyn WordStatistics>,
) -> Result<(), AssertionFailure> {
    // One pass of distinct inserts, then a hammer of duplicate updates on
    // the last-inserted word. Storage that scans front to back pays a
    // full scan for every one of those updates: the hot word sits at the
    // end of the list, and updating it puts it right back there, so
    // move-to-back self-organization never shortens the search.
    let mut stat = make();
    let words = (0..20_000).map(|i| format!("bulk{i:05}"));
    let updates = (0..200_000).map(|_| "bulk19999".to_string());
    feed_within(stat.as_mut(), words.chain(updates), BULK_BUDGET)?;

    let report = stat.get_statistics();
    ensure(
        report.len() == 20_000,
        format!("expected 20000 distinct entries, got {}", report.len()),
    )?;
    ensure(
        report.first().map(|row| (row.count, row.word.as_str())) == Some((200_001, "bulk19999")),
        "the most frequent word must lead the report",
    )
}
