//! End-to-end derivation tests: registry in, builders and schedulers
//! out.

use pretty_assertions::assert_eq;
use trestle_core::platform::PlatformTag;
use trestle_core::scheduler::SchedulerDef;
use trestle_core::stage::StageKind;
use trestle_core::step::StepSpec;
use trestle_core::worker::WorkerRegistry;
use trestle_plan::{MasterPlan, PipelineTemplate};

fn two_stage_template() -> PipelineTemplate {
    let mut template = PipelineTemplate::new();
    template.add_stage(
        StageKind::Unit,
        vec![StepSpec::shell("run-unit-tests", &["rake", "test"])],
    );
    template.add_stage(
        StageKind::Acceptance,
        vec![StepSpec::shell(
            "run-acceptance-tests",
            &["rake", "acceptance"],
        )],
    );
    template
}

#[test]
fn two_platforms_two_stages() {
    let registry = WorkerRegistry::parse("linux1:p1,osx1:p2").unwrap();
    let template = two_stage_template();
    let plan = MasterPlan::derive(&template, &registry, "master", &PlatformTag::ALL).unwrap();

    let builder_names: Vec<&str> = plan.builders.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(
        builder_names,
        vec![
            "linux-master-unit",
            "linux-master-acceptance",
            "osx-master-unit",
            "osx-master-acceptance",
        ]
    );

    assert_eq!(plan.schedulers.len(), 4);
    let immediates: Vec<&SchedulerDef> = plan
        .schedulers
        .iter()
        .filter(|s| matches!(s, SchedulerDef::Immediate { .. }))
        .collect();
    let dependents: Vec<&SchedulerDef> = plan
        .schedulers
        .iter()
        .filter(|s| matches!(s, SchedulerDef::Dependent { .. }))
        .collect();
    assert_eq!(immediates.len(), 2);
    assert_eq!(dependents.len(), 2);

    // Each dependent chains to its own platform's immediate scheduler.
    for dependent in dependents {
        let upstream = dependent.upstream().unwrap();
        let platform_prefix = dependent.name().strip_suffix("-acceptance").unwrap();
        assert_eq!(upstream, platform_prefix);
        assert!(immediates.iter().any(|i| i.name() == upstream));
    }
}

#[test]
fn standard_template_full_chain() {
    let registry = WorkerRegistry::parse("linux1:p1").unwrap();
    let template = PipelineTemplate::standard("https://example.com/repo.git", "master");
    let plan = MasterPlan::derive(&template, &registry, "master", &PlatformTag::ALL).unwrap();

    // 4 stages on one platform.
    assert_eq!(plan.builders.len(), 4);
    // One immediate for unit, one dependent covering all three
    // acceptance stages.
    assert_eq!(plan.schedulers.len(), 2);
    assert_eq!(
        plan.schedulers[1].triggers(),
        &[
            "linux-master-acceptance-boxes".to_string(),
            "linux-master-acceptance-config".to_string(),
            "linux-master-acceptance-tests".to_string(),
        ]
    );
}

#[test]
fn registry_order_determines_worker_order() {
    let registry = WorkerRegistry::parse("linux2:p2,linux1:p1").unwrap();
    let template = two_stage_template();
    let plan = MasterPlan::derive(&template, &registry, "master", &PlatformTag::ALL).unwrap();

    let worker_names: Vec<&str> = plan.builders[0].worker_names().collect();
    assert_eq!(worker_names, vec!["linux2", "linux1"]);
}

#[test]
fn derivation_output_serializes_deterministically() {
    let registry = WorkerRegistry::parse("linux1:p1,osx1:p2").unwrap();
    let template = two_stage_template();

    let a = MasterPlan::derive(&template, &registry, "master", &PlatformTag::ALL).unwrap();
    let b = MasterPlan::derive(&template, &registry, "master", &PlatformTag::ALL).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
