use serde::{Deserialize, Serialize};

use super::journey::{run_complete_user_journey, JourneyReport};
use super::performance::{run_performance_test, PerformanceReport};
use super::RunStatus;
use crate::config::{JourneyConfig, LoadTestConfig};
use crate::telemetry::recorder::FlowRecorder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoReport {
    pub journey: JourneyReport,
    pub performance: PerformanceReport,
    pub status: RunStatus,
}

/// Journey first, then the load test. The second run does not see the first's records.
pub fn run_monitoring_demo(
    recorder: &FlowRecorder,
    journey: &JourneyConfig,
    load_test: &LoadTestConfig,
) -> DemoReport {
    let journey = run_complete_user_journey(recorder, journey);
    let performance = run_performance_test(recorder, load_test);

    DemoReport {
        journey,
        performance,
        status: RunStatus::Success,
    }
}
