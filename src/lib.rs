//! Reference word-frequency engine plus a catalogue of deliberately buggy
//! variants, driven by a harness that measures test-suite strength.
//!
//! `wordstats-kata` provides a correct [`engine::ReferenceStatistics`], a
//! fixed registry of twenty variants that each break the engine contract on
//! exactly one axis ([`mutants::catalogue`]), and a shared assertion suite
//! ([`runner`]) that must pass cleanly on the reference and fail at least
//! once on every variant. All behavior is deterministic: identical input
//! sequences always produce identical reports.

pub mod engine;
pub mod mutants;
pub mod runner;
