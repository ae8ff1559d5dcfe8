//! Builder and scheduler derivation for Trestle.
//!
//! This is the core of the configuration layer: a pure, synchronous,
//! one-shot transform from a worker registry and a pipeline template to
//! the builder and scheduler definitions the external CI engine
//! consumes. Re-running it with identical inputs yields structurally
//! identical output, so reconfiguration is a wholesale swap.

pub mod builders;
pub mod plan;
pub mod schedulers;
pub mod template;

pub use builders::BuilderDeriver;
pub use plan::MasterPlan;
pub use schedulers::SchedulerDeriver;
pub use template::PipelineTemplate;
