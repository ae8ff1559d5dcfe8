//! Builder derivation: workers × pipeline stages → builder definitions.

use crate::template::PipelineTemplate;
use trestle_core::Result;
use trestle_core::builder::BuilderDef;
use trestle_core::platform::PlatformTag;
use trestle_core::worker::WorkerRegistry;

/// Derives concrete builder definitions from the worker registry.
///
/// One builder per (platform, stage) pair, for every platform with at
/// least one eligible worker. Platforms without workers are skipped
/// silently: a deployment may simply not have hardware for them.
pub struct BuilderDeriver<'a> {
    template: &'a PipelineTemplate,
}

impl<'a> BuilderDeriver<'a> {
    pub fn new(template: &'a PipelineTemplate) -> Self {
        Self { template }
    }

    /// Derive builders for `branch`, evaluating `platforms` in the
    /// given order. The order is part of the output contract: identical
    /// inputs produce identical sequences.
    pub fn derive(
        &self,
        registry: &WorkerRegistry,
        branch: &str,
        platforms: &[PlatformTag],
    ) -> Result<Vec<BuilderDef>> {
        let mut builders = Vec::new();

        for &platform in platforms {
            let workers: Vec<_> = registry.matching(platform).cloned().collect();
            if workers.is_empty() {
                tracing::debug!(%platform, "no eligible workers, skipping platform");
                continue;
            }

            for &stage in self.template.stages_for(branch) {
                let steps = self.template.steps_for(stage)?;
                builders.push(BuilderDef {
                    name: BuilderDef::builder_name(platform, branch, stage),
                    platform,
                    stage,
                    workers: workers.clone(),
                    steps,
                });
            }
        }

        tracing::debug!(count = builders.len(), branch, "derived builders");
        Ok(builders)
    }
}
