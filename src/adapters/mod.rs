// Adapters - Port implementations

pub mod plan_only;

// Re-export adapters
pub use plan_only::{FixedDurationSource, PlanRecorderSink};
