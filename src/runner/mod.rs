pub mod harness;
pub mod report;
pub mod suite;

pub use harness::{run_suite, AssertionOutcome, SuiteRun};
pub use report::{evaluate_catalogue, CatalogueReport, VariantOutcome};
pub use suite::{assertions, Assertion, AssertionFailure};
