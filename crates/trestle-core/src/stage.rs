//! Build stages and their ordering within a pipeline.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of the pipeline a stage belongs to.
///
/// The scheduler deriver keys on this: `Unit` builders are triggered by
/// change arrival, `Acceptance` builders only after the same platform's
/// unit builders succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StageFamily {
    Unit,
    Acceptance,
}

/// One phase of a build pipeline.
///
/// Stages are ordered by their position in a pipeline template; each
/// has a fixed predecessor there and the first stage has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Run the unit-test suite.
    Unit,
    /// Fetch the prebuilt machine images the acceptance suite runs
    /// against.
    AcceptanceBoxes,
    /// Generate the acceptance-suite configuration file.
    AcceptanceConfig,
    /// Run the acceptance-test suite.
    AcceptanceTests,
    /// Collapsed single-stage acceptance phase, for deployments that
    /// run the whole acceptance suite in one builder.
    Acceptance,
}

impl StageKind {
    /// Label used in derived builder names.
    pub fn label(&self) -> &'static str {
        match self {
            StageKind::Unit => "unit",
            StageKind::AcceptanceBoxes => "acceptance-boxes",
            StageKind::AcceptanceConfig => "acceptance-config",
            StageKind::AcceptanceTests => "acceptance-tests",
            StageKind::Acceptance => "acceptance",
        }
    }

    pub fn family(&self) -> StageFamily {
        match self {
            StageKind::Unit => StageFamily::Unit,
            StageKind::AcceptanceBoxes
            | StageKind::AcceptanceConfig
            | StageKind::AcceptanceTests
            | StageKind::Acceptance => StageFamily::Acceptance,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
