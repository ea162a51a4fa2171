use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{ReferenceStatistics, WordStatistics};
use crate::mutants::catalogue;
use crate::runner::harness::run_suite;
use crate::runner::suite::assertions;

/// How one catalogue variant fared against the shared suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantOutcome {
    pub variant: String,
    pub failed_assertions: Vec<String>,
}

impl VariantOutcome {
    /// A variant is killed when at least one assertion fails on it.
    pub fn killed(&self) -> bool {
        !self.failed_assertions.is_empty()
    }
}

/// Full evaluation of suite strength: validity on the reference engine
/// plus per-variant kill results. Serializable so an external sink can
/// collect it; `generated_at` is strictly informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueReport {
    pub generated_at: DateTime<Utc>,
    pub assertions: usize,
    pub reference_failures: Vec<String>,
    pub variants: Vec<VariantOutcome>,
}

impl CatalogueReport {
    /// The suite is only meaningful when the reference fails nothing.
    pub fn suite_is_valid(&self) -> bool {
        self.reference_failures.is_empty()
    }

    /// Variants the suite failed to kill. Empty is the goal.
    pub fn escaped(&self) -> Vec<&str> {
        self.variants
            .iter()
            .filter(|variant| !variant.killed())
            .map(|variant| variant.variant.as_str())
            .collect()
    }

    /// Per-variant failure counts in catalogue order: the compact payload
    /// a reporting sink receives to gauge suite strength.
    pub fn fail_counts(&self) -> Vec<usize> {
        self.variants
            .iter()
            .map(|variant| variant.failed_assertions.len())
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Validate the suite against the reference engine, then run it against
/// every catalogue variant in registry order.
pub fn evaluate_catalogue() -> CatalogueReport {
    let reference = run_suite(&|| Box::new(ReferenceStatistics::new()) as Box<dyn WordStatistics>);

    let variants = catalogue()
        .iter()
        .map(|entry| {
            let run = run_suite(&*entry.make);
            VariantOutcome {
                variant: entry.name.to_string(),
                failed_assertions: run
                    .failed_names()
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
            }
        })
        .collect();

    CatalogueReport {
        generated_at: Utc::now(),
        assertions: assertions().len(),
        reference_failures: reference
            .failed_names()
            .iter()
            .map(|name| name.to_string())
            .collect(),
        variants,
    }
}
