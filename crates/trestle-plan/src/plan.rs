//! The assembled master plan handed to the CI engine.

use crate::builders::BuilderDeriver;
use crate::schedulers::{self, SchedulerDeriver};
use crate::template::PipelineTemplate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use trestle_core::Result;
use trestle_core::builder::BuilderDef;
use trestle_core::platform::PlatformTag;
use trestle_core::scheduler::SchedulerDef;
use trestle_core::worker::WorkerRegistry;

/// Everything the derivation pipeline produces for one branch: the
/// builder definitions and the schedulers that trigger them.
///
/// Built once at configuration load and handed to the engine wholesale;
/// there is no incremental update, a reconfiguration derives a fresh
/// plan and swaps it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MasterPlan {
    pub branch: String,
    pub builders: Vec<BuilderDef>,
    pub schedulers: Vec<SchedulerDef>,
}

impl MasterPlan {
    /// Run the full derivation pipeline: registry → builders →
    /// schedulers, validating the scheduler DAG before handing the plan
    /// out.
    pub fn derive(
        template: &PipelineTemplate,
        registry: &WorkerRegistry,
        branch: &str,
        platforms: &[PlatformTag],
    ) -> Result<Self> {
        let builders = BuilderDeriver::new(template).derive(registry, branch, platforms)?;
        let schedulers = SchedulerDeriver::new().derive(&builders, branch)?;
        schedulers::validate(&schedulers)?;

        tracing::info!(
            branch,
            builders = builders.len(),
            schedulers = schedulers.len(),
            "derived master plan"
        );

        Ok(Self {
            branch: branch.to_string(),
            builders,
            schedulers,
        })
    }
}
