//! Simulated flow telemetry for the HealthGuard360 platform.
//!
//! # FABRICATION INVARIANT
//! Nothing in this module measures anything. Every `duration_ms` is a fixed
//! constant per action and the only data-dependent value is the scan's
//! `issues_found` keyword count.
//!
//! # ONE-WAY INVARIANT
//! Records flow recorders -> batch -> `compute_summary`. A record is never
//! mutated after its recorder returns it, and the summary never feeds back.

pub mod clock;
pub mod event;
pub mod metrics;
pub mod recorder;

pub use clock::{Clock, FixedClock, SystemClock};
pub use event::{Component, FlowDetails, FlowKind, FlowRecord, FlowStep, RecordStatus, Subsystem};
pub use metrics::{compute_summary, round_to_hundredths, HealthThresholds, SystemHealth, SystemSummary};
pub use recorder::{count_sensitive_terms, FlowRecorder, SENSITIVE_TERMS};
