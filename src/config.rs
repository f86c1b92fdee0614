use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, Result};
use crate::monitor::journal::DEFAULT_JOURNAL_CAPACITY;
use crate::telemetry::metrics::HealthThresholds;

/// Inputs of the complete user journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyConfig {
    pub user_id: String,
    pub document_name: String,
    pub scan_type: String,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            user_id: "demo_user_123".to_string(),
            document_name: "patient_data_policy.pdf".to_string(),
            scan_type: "HIPAA".to_string(),
        }
    }
}

/// Shape of the synthetic load: `num_users` actors, `operations_per_user` each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTestConfig {
    pub num_users: usize,
    pub operations_per_user: usize,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            num_users: 5,
            operations_per_user: 3,
        }
    }
}

impl LoadTestConfig {
    /// The smaller load the demo runs.
    pub fn demo() -> Self {
        Self {
            num_users: 3,
            operations_per_user: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    pub journey: JourneyConfig,
    pub load_test: LoadTestConfig,
    pub thresholds: HealthThresholds,
    pub journal_capacity: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            journey: JourneyConfig::default(),
            load_test: LoadTestConfig::demo(),
            thresholds: HealthThresholds::default(),
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
        }
    }
}

impl MonitorConfig {
    /// Rejects settings that cannot describe a run. Recorder inputs are not checked.
    pub fn validate(&self) -> Result<()> {
        if self.journal_capacity == 0 {
            return Err(MonitorError::InvalidConfig(
                "journal capacity must be at least 1".to_string(),
            ));
        }
        if self.thresholds.excellent_below_ms > self.thresholds.good_below_ms {
            return Err(MonitorError::InvalidConfig(format!(
                "excellent threshold ({}ms) exceeds good threshold ({}ms)",
                self.thresholds.excellent_below_ms, self.thresholds.good_below_ms
            )));
        }
        Ok(())
    }
}
