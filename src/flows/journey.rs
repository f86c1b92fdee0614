use serde::{Deserialize, Serialize};
use tracing::info_span;
use uuid::Uuid;

use super::RunStatus;
use crate::config::JourneyConfig;
use crate::telemetry::event::FlowRecord;
use crate::telemetry::metrics::SystemSummary;
use crate::telemetry::recorder::FlowRecorder;

pub const JOURNEY_FLOW_NAME: &str = "healthguard360-complete-user-journey";

pub const SAMPLE_FILE_SIZE: i64 = 1_024_000;
pub const SAMPLE_FILE_TYPE: &str = "application/pdf";
pub const SAMPLE_DOCUMENT_ID: &str = "doc_123";
pub const SAMPLE_SCAN_CONTENT: &str =
    "This document contains patient medical information and must comply with HIPAA regulations.";
pub const REPORTS_TABLE: &str = "compliance_reports";
pub const TRAINING_MODULE: &str = "HIPAA Compliance";
pub const TRAINING_PROGRESS: i32 = 75;
pub const NOTIFICATION_CHANNEL: &str = "email";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyReport {
    pub run_id: Uuid,
    pub flow_data: Vec<FlowRecord>,
    pub summary: SystemSummary,
    pub status: RunStatus,
    pub total_steps: usize,
}

/// One user's walk through the platform: sign in, upload, persist, scan,
/// persist again, train, get notified. Seven records, then a summary.
pub fn run_complete_user_journey(recorder: &FlowRecorder, config: &JourneyConfig) -> JourneyReport {
    let run_id = Uuid::new_v4();
    let span = info_span!("flow_run", flow = JOURNEY_FLOW_NAME, run_id = %run_id);
    let _guard = span.enter();

    let log = recorder.observer();
    let user_id = config.user_id.as_str();
    log.message("Starting HealthGuard360 Complete User Journey Monitoring");

    let mut flow_data = Vec::with_capacity(7);

    log.message("Step 1: User Authentication");
    flow_data.push(recorder.user_authentication(user_id, "login", None));

    log.message("Step 2: Document Upload");
    flow_data.push(recorder.document_upload(user_id, &config.document_name, SAMPLE_FILE_SIZE, SAMPLE_FILE_TYPE));

    log.message("Step 3: Database Operation - Save Metadata");
    flow_data.push(recorder.database_operation(user_id, "INSERT", REPORTS_TABLE, 1));

    log.message("Step 4: Compliance Scan");
    let scan = recorder.compliance_scan(user_id, SAMPLE_DOCUMENT_ID, &config.scan_type, SAMPLE_SCAN_CONTENT);
    let issues_found = scan.issues_found().unwrap_or_default();
    flow_data.push(scan);

    log.message("Step 5: Database Operation - Save Results");
    flow_data.push(recorder.database_operation(user_id, "UPDATE", REPORTS_TABLE, 1));

    log.message("Step 6: Training Progress");
    flow_data.push(recorder.training_progress(user_id, TRAINING_MODULE, TRAINING_PROGRESS));

    log.message("Step 7: User Notification");
    let message = format!(
        "Compliance scan completed for {}. Found {} potential issues.",
        config.document_name, issues_found
    );
    flow_data.push(recorder.notification(user_id, "scan_complete", &message, NOTIFICATION_CHANNEL));

    log.message("Step 8: Generate System Summary");
    let summary = recorder.system_summary(&flow_data);

    log.message("HealthGuard360 Complete User Journey Monitoring Finished");

    JourneyReport {
        run_id,
        total_steps: flow_data.len(),
        flow_data,
        summary,
        status: RunStatus::Completed,
    }
}
