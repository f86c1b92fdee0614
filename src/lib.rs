pub mod config;
pub mod error;
pub mod flows;
pub mod monitor;
pub mod render;
pub mod telemetry;

// Re-export the pieces a caller needs to run a flow end to end
pub use config::{JourneyConfig, LoadTestConfig, MonitorConfig};
pub use error::{MonitorError, Result};
pub use flows::{run_complete_user_journey, run_monitoring_demo, run_performance_test, RunStatus};
pub use telemetry::recorder::FlowRecorder;
