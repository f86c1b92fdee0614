use serde::{Deserialize, Serialize};

use crate::telemetry::event::FlowRecord;
use crate::telemetry::metrics::SystemSummary;

/// Everything an observer can be told about, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum JournalEntry {
    /// Human-readable progress line ("Step 3: Database Operation - Save Metadata").
    Message(String),

    /// A record as emitted by one of the recorders.
    Record(FlowRecord),

    /// An aggregate over a batch of records.
    Summary(SystemSummary),
}
