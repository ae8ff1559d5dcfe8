//! Scheduler derivation: trigger rules over the derived builders.

use std::collections::HashSet;
use trestle_core::builder::BuilderDef;
use trestle_core::platform::PlatformTag;
use trestle_core::scheduler::SchedulerDef;
use trestle_core::stage::StageFamily;
use trestle_core::{Error, Result};

/// Derives trigger rules from a derived builder sequence.
///
/// Per platform: one `Immediate` scheduler fires the unit-stage
/// builders on change arrival, and one `Dependent` scheduler fires the
/// acceptance-stage builders once the `Immediate` one's builds have
/// succeeded. This is what keeps acceptance from running against a
/// revision whose unit suite failed.
pub struct SchedulerDeriver {
    stable_delay_seconds: u32,
}

impl SchedulerDeriver {
    /// Delay between the last observed change and firing, to coalesce
    /// rapid successive commits into one build.
    pub const DEFAULT_STABLE_DELAY_SECONDS: u32 = 60;

    pub fn new() -> Self {
        Self {
            stable_delay_seconds: Self::DEFAULT_STABLE_DELAY_SECONDS,
        }
    }

    pub fn with_stable_delay(seconds: u32) -> Self {
        Self {
            stable_delay_seconds: seconds,
        }
    }

    /// Derive schedulers for `branch`.
    ///
    /// Platforms are visited in first-seen builder order, so the output
    /// inherits the builder deriver's fixed platform order and repeated
    /// derivation from identical input is byte-identical.
    pub fn derive(&self, builders: &[BuilderDef], branch: &str) -> Result<Vec<SchedulerDef>> {
        let mut platforms: Vec<PlatformTag> = Vec::new();
        for builder in builders {
            if !platforms.contains(&builder.platform) {
                platforms.push(builder.platform);
            }
        }

        let mut schedulers = Vec::new();
        for platform in platforms {
            let unit_triggers = Self::triggers_for(builders, platform, StageFamily::Unit);
            let acceptance_triggers =
                Self::triggers_for(builders, platform, StageFamily::Acceptance);

            let immediate_name = format!("{platform}-{branch}");
            let dependent_name = format!("{platform}-{branch}-acceptance");

            if unit_triggers.is_empty() {
                // Should not occur when the builders came from the
                // builder deriver, but a dependent scheduler with no
                // upstream must never be emitted.
                if !acceptance_triggers.is_empty() {
                    return Err(Error::DanglingStageReference {
                        scheduler: dependent_name,
                        upstream: immediate_name,
                    });
                }
                continue;
            }

            schedulers.push(SchedulerDef::Immediate {
                name: immediate_name.clone(),
                branch_filter: branch.to_string(),
                stable_delay_seconds: self.stable_delay_seconds,
                triggers: unit_triggers,
            });

            if !acceptance_triggers.is_empty() {
                schedulers.push(SchedulerDef::Dependent {
                    name: dependent_name,
                    upstream: immediate_name,
                    triggers: acceptance_triggers,
                });
            }
        }

        tracing::debug!(count = schedulers.len(), branch, "derived schedulers");
        Ok(schedulers)
    }

    fn triggers_for(
        builders: &[BuilderDef],
        platform: PlatformTag,
        family: StageFamily,
    ) -> Vec<String> {
        builders
            .iter()
            .filter(|b| b.platform == platform && b.stage.family() == family)
            .map(|b| b.name.clone())
            .collect()
    }
}

impl Default for SchedulerDeriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the DAG property of a derived sequence: every `Dependent`
/// upstream must name an earlier scheduler. Forward and cyclic
/// references are both rejected by the same rule.
pub fn validate(schedulers: &[SchedulerDef]) -> Result<()> {
    let mut defined: HashSet<&str> = HashSet::new();
    for scheduler in schedulers {
        if let Some(upstream) = scheduler.upstream()
            && !defined.contains(upstream)
        {
            return Err(Error::DanglingStageReference {
                scheduler: scheduler.name().to_string(),
                upstream: upstream.to_string(),
            });
        }
        defined.insert(scheduler.name());
    }
    Ok(())
}
