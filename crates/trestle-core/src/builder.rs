//! Derived builder definitions.

use crate::platform::PlatformTag;
use crate::stage::StageKind;
use crate::step::StepSpec;
use crate::worker::WorkerSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named, schedulable unit of work bound to a set of eligible workers
/// and an ordered list of steps.
///
/// A builder is only ever emitted with a non-empty worker set; the
/// engine load-balances a build onto any one of them. The step sequence
/// is shared with the pipeline template, not copied per builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BuilderDef {
    pub name: String,
    pub platform: PlatformTag,
    pub stage: StageKind,
    pub workers: Vec<WorkerSpec>,
    #[schemars(with = "Vec<StepSpec>")]
    pub steps: Arc<[StepSpec]>,
}

impl BuilderDef {
    /// Deterministic builder name: `<platform>-<branch>-<stage-label>`.
    pub fn builder_name(platform: PlatformTag, branch: &str, stage: StageKind) -> String {
        format!("{platform}-{branch}-{stage}")
    }

    pub fn worker_names(&self) -> impl Iterator<Item = &str> {
        self.workers.iter().map(|w| w.name.as_str())
    }
}
