use serde::{Deserialize, Serialize};
use tracing::info_span;
use uuid::Uuid;

use crate::config::LoadTestConfig;
use crate::telemetry::event::FlowRecord;
use crate::telemetry::metrics::SystemSummary;
use crate::telemetry::recorder::FlowRecorder;

pub const PERFORMANCE_FLOW_NAME: &str = "healthguard360-performance-test";

pub const LOAD_FILE_SIZE: i64 = 512_000;
pub const LOAD_FILE_TYPE: &str = "application/pdf";
pub const LOAD_SCAN_TYPE: &str = "GDPR";
pub const LOAD_SCAN_CONTENT: &str = "Sample content for testing";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_operations: usize,
    pub total_users: usize,
    pub operations_per_user: usize,
    pub average_response_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub run_id: Uuid,
    pub flow_data: Vec<FlowRecord>,
    pub summary: SystemSummary,
    pub performance_metrics: PerformanceMetrics,
}

/// `test_user_{n}` for zero-based actor index `n - 1`.
pub fn synthetic_user_id(user_index: usize) -> String {
    format!("test_user_{}", user_index + 1)
}

/// Replays the cheap steps across synthetic users. Operation 0 signs in,
/// operation 1 uploads, every later operation scans.
pub fn run_performance_test(recorder: &FlowRecorder, config: &LoadTestConfig) -> PerformanceReport {
    let run_id = Uuid::new_v4();
    let span = info_span!("flow_run", flow = PERFORMANCE_FLOW_NAME, run_id = %run_id);
    let _guard = span.enter();

    let log = recorder.observer();
    log.message(&format!(
        "Starting Performance Test: {} users, {} operations each",
        config.num_users, config.operations_per_user
    ));

    let mut flow_data = Vec::with_capacity(config.num_users.saturating_mul(config.operations_per_user));

    for user_index in 0..config.num_users {
        let user_id = synthetic_user_id(user_index);
        log.message(&format!("Testing user: {}", user_id));

        for op_index in 0..config.operations_per_user {
            let record = match op_index {
                0 => recorder.user_authentication(&user_id, "login", None),
                1 => recorder.document_upload(
                    &user_id,
                    &format!("test_doc_{}.pdf", user_index),
                    LOAD_FILE_SIZE,
                    LOAD_FILE_TYPE,
                ),
                _ => recorder.compliance_scan(
                    &user_id,
                    &format!("doc_{}_{}", user_index, op_index),
                    LOAD_SCAN_TYPE,
                    LOAD_SCAN_CONTENT,
                ),
            };
            flow_data.push(record);
        }
    }

    let summary = recorder.system_summary(&flow_data);

    log.message(&format!("Performance Test Completed: {} total operations", flow_data.len()));

    PerformanceReport {
        run_id,
        performance_metrics: PerformanceMetrics {
            total_operations: flow_data.len(),
            total_users: config.num_users,
            operations_per_user: config.operations_per_user,
            average_response_time: summary.average_duration_ms,
        },
        flow_data,
        summary,
    }
}
