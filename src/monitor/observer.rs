use std::sync::Arc;

use tracing::{info, warn};

use crate::telemetry::event::FlowRecord;
use crate::telemetry::metrics::SystemSummary;

/// Injected logging capability. Recorders and flows never reach for a global
/// logger; whatever they want to say goes through one of these.
///
/// Observers are passive: they see records after the fact and cannot alter them.
pub trait FlowObserver: Send + Sync {
    fn message(&self, message: &str);

    /// `headline` is the human line, `record` the full payload.
    fn record(&self, headline: &str, record: &FlowRecord);

    fn summary(&self, headline: &str, summary: &SystemSummary);
}

/// Default observer: forwards to `tracing` with the payload pretty-printed as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FlowObserver for TracingObserver {
    fn message(&self, message: &str) {
        info!("{}", message);
    }

    fn record(&self, headline: &str, record: &FlowRecord) {
        info!(user_id = %record.user_id, component = record.component.as_str(), "{}", headline);

        match serde_json::to_string_pretty(record) {
            Ok(json) => info!("{} Flow Data: {}", record.component.label(), json),
            // A failed dump must not take the pipeline down with it
            Err(e) => warn!("Failed to serialize {} flow data: {}", record.component.label(), e),
        }
    }

    fn summary(&self, headline: &str, summary: &SystemSummary) {
        info!(health = summary.system_health.as_str(), "{}", headline);

        match serde_json::to_string_pretty(summary) {
            Ok(json) => info!("System Summary Data: {}", json),
            Err(e) => warn!("Failed to serialize system summary: {}", e),
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl FlowObserver for NullObserver {
    fn message(&self, _message: &str) {}
    fn record(&self, _headline: &str, _record: &FlowRecord) {}
    fn summary(&self, _headline: &str, _summary: &SystemSummary) {}
}

/// Forwards every notification to each inner observer, in insertion order.
#[derive(Clone, Default)]
pub struct FanoutObserver {
    observers: Vec<Arc<dyn FlowObserver>>,
}

impl FanoutObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, observer: Arc<dyn FlowObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl FlowObserver for FanoutObserver {
    fn message(&self, message: &str) {
        for observer in &self.observers {
            observer.message(message);
        }
    }

    fn record(&self, headline: &str, record: &FlowRecord) {
        for observer in &self.observers {
            observer.record(headline, record);
        }
    }

    fn summary(&self, headline: &str, summary: &SystemSummary) {
        for observer in &self.observers {
            observer.summary(headline, summary);
        }
    }
}
