//! Pipeline templates: the ordered stage chain and its steps.

use std::collections::HashMap;
use std::sync::Arc;
use trestle_core::stage::StageKind;
use trestle_core::step::StepSpec;
use trestle_core::{Error, Result};

/// Describes the build chain for a deployment: which stages run, in
/// which order, and which steps each stage executes.
///
/// Templates are fixed per deployment, not user-configurable at
/// runtime. Step sequences are owned here and shared by every builder
/// of the matching stage.
///
/// The stage ordering carries the chaining contract: acceptance stages
/// must never start before the same platform's unit builder succeeded.
/// The template only declares the order; the scheduler deriver upholds
/// it.
#[derive(Debug, Clone, Default)]
pub struct PipelineTemplate {
    stages: Vec<StageKind>,
    steps: HashMap<StageKind, Arc<[StepSpec]>>,
}

impl PipelineTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage and its step sequence to the chain. Stages run in
    /// the order they are added; the first added stage is the chain's
    /// entry point.
    pub fn add_stage(&mut self, stage: StageKind, steps: Vec<StepSpec>) -> &mut Self {
        self.stages.push(stage);
        self.steps.insert(stage, steps.into());
        self
    }

    /// The ordered stage chain for a branch.
    ///
    /// Every branch currently builds the same chain; the parameter is
    /// part of the contract so a deployment can specialize later
    /// without touching callers.
    pub fn stages_for(&self, _branch: &str) -> &[StageKind] {
        &self.stages
    }

    pub fn first_stage(&self) -> Option<StageKind> {
        self.stages.first().copied()
    }

    /// The stage immediately before `stage` in the chain; the first
    /// stage has none.
    pub fn predecessor(&self, stage: StageKind) -> Option<StageKind> {
        let position = self.stages.iter().position(|&s| s == stage)?;
        position.checked_sub(1).map(|i| self.stages[i])
    }

    /// The shared step sequence for a stage, or
    /// [`Error::UnrecognizedStage`] if the template never defined one.
    pub fn steps_for(&self, stage: StageKind) -> Result<Arc<[StepSpec]>> {
        self.steps
            .get(&stage)
            .cloned()
            .ok_or_else(|| Error::UnrecognizedStage(stage.label().to_string()))
    }

    /// The standard deployment template.
    ///
    /// Unit: fetch-source, install-deps, run-unit-tests.
    /// Acceptance: fetch-source, install-deps, fetch-test-fixtures,
    /// generate-test-config, run-acceptance-tests, split across the
    /// boxes/config/tests stages.
    pub fn standard(repository: &str, default_branch: &str) -> Self {
        let mut template = Self::new();
        template.add_stage(
            StageKind::Unit,
            vec![
                StepSpec::checkout("fetch-source", repository, default_branch),
                StepSpec::shell("install-deps", &["bundle", "install"]),
                StepSpec::shell("run-unit-tests", &["bundle", "exec", "rake", "test:unit"])
                    .with_timeout(3600),
            ],
        );
        template.add_stage(
            StageKind::AcceptanceBoxes,
            vec![
                StepSpec::checkout("fetch-source", repository, default_branch),
                StepSpec::shell("install-deps", &["bundle", "install"]),
                StepSpec::download(
                    "fetch-test-fixtures",
                    "boxes/fixtures.tar.gz",
                    "fixtures.tar.gz",
                ),
            ],
        );
        template.add_stage(
            StageKind::AcceptanceConfig,
            vec![
                StepSpec::shell(
                    "generate-test-config",
                    &["bundle", "exec", "rake", "acceptance:config"],
                ),
            ],
        );
        template.add_stage(
            StageKind::AcceptanceTests,
            vec![
                StepSpec::shell(
                    "run-acceptance-tests",
                    &["bundle", "exec", "rake", "test:acceptance"],
                )
                .with_timeout(7200),
            ],
        );
        template
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_stage_order() {
        let template = PipelineTemplate::standard("https://example.com/repo.git", "master");
        assert_eq!(
            template.stages_for("master"),
            &[
                StageKind::Unit,
                StageKind::AcceptanceBoxes,
                StageKind::AcceptanceConfig,
                StageKind::AcceptanceTests,
            ]
        );
        assert_eq!(template.first_stage(), Some(StageKind::Unit));
    }

    #[test]
    fn test_predecessors_follow_chain_order() {
        let template = PipelineTemplate::standard("https://example.com/repo.git", "master");
        assert_eq!(template.predecessor(StageKind::Unit), None);
        assert_eq!(
            template.predecessor(StageKind::AcceptanceConfig),
            Some(StageKind::AcceptanceBoxes)
        );
        assert_eq!(template.predecessor(StageKind::Acceptance), None);
    }

    #[test]
    fn test_steps_are_shared_not_copied() {
        let template = PipelineTemplate::standard("https://example.com/repo.git", "master");
        let a = template.steps_for(StageKind::Unit).unwrap();
        let b = template.steps_for(StageKind::Unit).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_unknown_stage_is_rejected() {
        let mut template = PipelineTemplate::new();
        template.add_stage(StageKind::Unit, vec![]);
        let err = template.steps_for(StageKind::AcceptanceTests).unwrap_err();
        assert!(matches!(
            err,
            trestle_core::Error::UnrecognizedStage(label) if label == "acceptance-tests"
        ));
    }
}
