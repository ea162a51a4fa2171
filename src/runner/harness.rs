//! Executes the shared suite against an engine factory. A panicking engine
//! is a failing engine, so every assertion runs under `catch_unwind`, the
//! way a test runner isolates a crashing implementation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::engine::WordStatistics;
use crate::runner::suite::{assertions, AssertionFailure};

/// Result of one assertion against one engine factory.
#[derive(Debug, Clone)]
pub struct AssertionOutcome {
    pub name: &'static str,
    /// `None` on pass; the failure or panic message otherwise.
    pub failure: Option<String>,
}

/// All outcomes for one engine factory, in suite order.
#[derive(Debug, Clone)]
pub struct SuiteRun {
    pub outcomes: Vec<AssertionOutcome>,
}

impl SuiteRun {
    pub fn failed_names(&self) -> Vec<&'static str> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.failure.is_some())
            .map(|outcome| outcome.name)
            .collect()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.failure.is_none())
    }
}

/// Run the whole suite against `make`, one fresh construction per
/// assertion.
pub fn run_suite(make: &dyn Fn() -> Box<dyn WordStatistics>) -> SuiteRun {
    let outcomes = assertions()
        .into_iter()
        .map(|assertion| {
            let result = panic::catch_unwind(AssertUnwindSafe(|| (assertion.check)(make)));
            let failure = match result {
                Ok(Ok(())) => None,
                Ok(Err(AssertionFailure { message })) => Some(message),
                Err(payload) => Some(panic_text(&*payload)),
            };
            AssertionOutcome {
                name: assertion.name,
                failure,
            }
        })
        .collect();
    SuiteRun { outcomes }
}

fn panic_text(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        format!("engine panicked: {text}")
    } else if let Some(text) = payload.downcast_ref::<String>() {
        format!("engine panicked: {text}")
    } else {
        "engine panicked".to_string()
    }
}
