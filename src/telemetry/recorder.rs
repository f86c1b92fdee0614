use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::event::{FlowDetails, FlowKind, FlowRecord};
use super::metrics::{compute_summary, HealthThresholds, SystemSummary};
use crate::monitor::observer::{FlowObserver, TracingObserver};

/// Words that count as a compliance issue when they appear in scanned text.
pub const SENSITIVE_TERMS: [&str; 3] = ["patient", "medical", "health"];

/// Count of whitespace-separated, lower-cased tokens found in `SENSITIVE_TERMS`.
pub fn count_sensitive_terms(content: &str) -> usize {
    content
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| SENSITIVE_TERMS.contains(&token.as_str()))
        .count()
}

/// Builds flow records and reports each one to the injected observer.
///
/// Holds no mutable state: two calls with the same inputs produce records that
/// differ at most in `timestamp`.
#[derive(Clone)]
pub struct FlowRecorder {
    clock: Arc<dyn Clock>,
    observer: Arc<dyn FlowObserver>,
    thresholds: HealthThresholds,
}

impl FlowRecorder {
    pub fn new(observer: Arc<dyn FlowObserver>) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            observer,
            thresholds: HealthThresholds::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_thresholds(mut self, thresholds: HealthThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn observer(&self) -> &Arc<dyn FlowObserver> {
        &self.observer
    }

    pub fn thresholds(&self) -> &HealthThresholds {
        &self.thresholds
    }

    /// A supplied `timestamp` is echoed verbatim; a missing or empty one is stamped by the clock.
    pub fn user_authentication(&self, user_id: &str, action: &str, timestamp: Option<&str>) -> FlowRecord {
        let timestamp = timestamp
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.clock.now_iso());

        let record = FlowRecord::new(FlowKind::Authentication, timestamp, user_id, FlowDetails::Authentication {})
            .with_action(action);

        self.emit(format!("Authentication: User {} performed {}", user_id, action), record)
    }

    pub fn document_upload(&self, user_id: &str, document_name: &str, file_size: i64, file_type: &str) -> FlowRecord {
        let record = FlowRecord::new(
            FlowKind::DocumentUpload,
            self.clock.now_iso(),
            user_id,
            FlowDetails::DocumentUpload {
                document_name: document_name.to_string(),
                file_size,
                file_type: file_type.to_string(),
            },
        );

        self.emit(
            format!("Document Upload: {} ({} bytes) by user {}", document_name, file_size, user_id),
            record,
        )
    }

    pub fn compliance_scan(&self, user_id: &str, document_id: &str, scan_type: &str, document_content: &str) -> FlowRecord {
        let record = FlowRecord::new(
            FlowKind::ComplianceScan,
            self.clock.now_iso(),
            user_id,
            FlowDetails::ComplianceScan {
                document_id: document_id.to_string(),
                scan_type: scan_type.to_string(),
                issues_found: count_sensitive_terms(document_content),
            },
        );

        self.emit(format!("Compliance Scan: {} for document {}", scan_type, document_id), record)
    }

    pub fn database_operation(&self, user_id: &str, operation: &str, table: &str, record_count: i64) -> FlowRecord {
        let record = FlowRecord::new(
            FlowKind::DatabaseOperation,
            self.clock.now_iso(),
            user_id,
            FlowDetails::DatabaseOperation {
                operation: operation.to_string(),
                table: table.to_string(),
                record_count,
            },
        );

        self.emit(
            format!("Database Operation: {} on {} by user {}", operation, table, user_id),
            record,
        )
    }

    pub fn training_progress(&self, user_id: &str, module_name: &str, progress_percentage: i32) -> FlowRecord {
        let record = FlowRecord::new(
            FlowKind::TrainingProgress,
            self.clock.now_iso(),
            user_id,
            FlowDetails::TrainingProgress {
                module_name: module_name.to_string(),
                progress_percentage,
            },
        );

        self.emit(
            format!("Training Progress: {} - {}% by user {}", module_name, progress_percentage, user_id),
            record,
        )
    }

    pub fn notification(&self, user_id: &str, notification_type: &str, message: &str, channel: &str) -> FlowRecord {
        let record = FlowRecord::new(
            FlowKind::Notification,
            self.clock.now_iso(),
            user_id,
            FlowDetails::Notification {
                notification_type: notification_type.to_string(),
                message: message.to_string(),
                channel: channel.to_string(),
            },
        );

        self.emit(
            format!("Notification: {} sent to user {} via {}", notification_type, user_id, channel),
            record,
        )
    }

    /// Aggregates a batch and reports the summary to the observer.
    pub fn system_summary(&self, records: &[FlowRecord]) -> SystemSummary {
        // Delegate to the pure metrics module
        let summary = compute_summary(records, &self.thresholds, self.clock.now_iso());

        self.observer.summary(
            &format!(
                "System Summary: {} operations across {} components",
                summary.total_operations,
                summary.components_used.len()
            ),
            &summary,
        );

        summary
    }

    fn emit(&self, headline: String, record: FlowRecord) -> FlowRecord {
        self.observer.record(&headline, &record);
        record
    }
}

impl Default for FlowRecorder {
    fn default() -> Self {
        Self::new(Arc::new(TracingObserver))
    }
}
