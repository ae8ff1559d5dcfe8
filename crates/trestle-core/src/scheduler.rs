//! Derived scheduler definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Trigger rule handed to the engine.
///
/// `Immediate` fires on change-set arrival for a branch, after a
/// stabilization delay that coalesces rapid successive changes.
/// `Dependent` fires only once its upstream scheduler's builders have
/// all succeeded. Within a derived sequence, every `upstream` reference
/// points at an earlier entry, so the chain forms a DAG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchedulerDef {
    Immediate {
        name: String,
        branch_filter: String,
        stable_delay_seconds: u32,
        /// Builder names started by this scheduler.
        triggers: Vec<String>,
    },
    Dependent {
        name: String,
        /// Name of the scheduler whose success releases this one.
        upstream: String,
        triggers: Vec<String>,
    },
}

impl SchedulerDef {
    pub fn name(&self) -> &str {
        match self {
            SchedulerDef::Immediate { name, .. } | SchedulerDef::Dependent { name, .. } => name,
        }
    }

    pub fn triggers(&self) -> &[String] {
        match self {
            SchedulerDef::Immediate { triggers, .. }
            | SchedulerDef::Dependent { triggers, .. } => triggers,
        }
    }

    pub fn upstream(&self) -> Option<&str> {
        match self {
            SchedulerDef::Immediate { .. } => None,
            SchedulerDef::Dependent { upstream, .. } => Some(upstream),
        }
    }
}
