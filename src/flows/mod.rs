use serde::{Deserialize, Serialize};

pub mod demo;
pub mod journey;
pub mod performance;

pub use demo::{run_monitoring_demo, DemoReport};
pub use journey::{run_complete_user_journey, JourneyReport, JOURNEY_FLOW_NAME};
pub use performance::{run_performance_test, PerformanceMetrics, PerformanceReport, PERFORMANCE_FLOW_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// A single flow ran to the end.
    Completed,
    /// The whole demo ran to the end.
    Success,
    Error,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Completed => "completed",
            RunStatus::Success => "success",
            RunStatus::Error => "error",
        }
    }
}
