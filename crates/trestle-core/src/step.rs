//! Build step descriptions.
//!
//! A step is a declarative record of one executable action; the
//! external engine's generic step executor interprets it. No behavior
//! lives here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a step executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind {
    /// Check out the project source at the scheduled revision.
    Checkout {
        repository: String,
        default_branch: String,
    },
    /// Run a shell command in the build directory.
    Shell { command: Vec<String> },
    /// Transfer a file from the master to the worker.
    Download { source: String, destination: String },
}

/// One executable action within a stage.
///
/// Steps are owned by the pipeline template; builders of a matching
/// stage share the template's step sequence rather than copying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StepSpec {
    pub name: String,
    pub kind: StepKind,
    /// Environment overrides applied for this step only.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Whether a failing step fails the whole build immediately.
    #[serde(default = "default_true")]
    pub halt_on_failure: bool,
}

fn default_timeout() -> u32 {
    1200
}

fn default_true() -> bool {
    true
}

impl StepSpec {
    pub fn checkout(
        name: impl Into<String>,
        repository: impl Into<String>,
        default_branch: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: StepKind::Checkout {
                repository: repository.into(),
                default_branch: default_branch.into(),
            },
            env: BTreeMap::new(),
            timeout_seconds: default_timeout(),
            halt_on_failure: true,
        }
    }

    pub fn shell(name: impl Into<String>, command: &[&str]) -> Self {
        Self {
            name: name.into(),
            kind: StepKind::Shell {
                command: command.iter().map(|s| s.to_string()).collect(),
            },
            env: BTreeMap::new(),
            timeout_seconds: default_timeout(),
            halt_on_failure: true,
        }
    }

    pub fn download(
        name: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: StepKind::Download {
                source: source.into(),
                destination: destination.into(),
            },
            env: BTreeMap::new(),
            timeout_seconds: default_timeout(),
            halt_on_failure: true,
        }
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u32) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}
