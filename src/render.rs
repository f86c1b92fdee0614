//! Console output of the monitoring binary. Everything writes to a caller-owned
//! `Write` so the text can be checked without touching stdout.

use std::io::Write;

use chrono::Local;
use serde::Serialize;

use crate::error::Result;
use crate::flows::{JourneyReport, PerformanceReport, RunStatus};
use crate::monitor::types::JournalEntry;

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn display_now() -> String {
    Local::now().format(DISPLAY_FORMAT).to_string()
}

/// Machine-readable result of one invocation (`--format json`).
#[derive(Debug, Serialize)]
pub struct MonitorOutput<'a, T: Serialize> {
    pub status: RunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub journal: Vec<JournalEntry>,
}

impl<'a, T: Serialize> MonitorOutput<'a, T> {
    pub fn success(report: &'a T, journal: Vec<JournalEntry>) -> Self {
        Self {
            status: RunStatus::Success,
            report: Some(report),
            message: None,
            journal,
        }
    }

    /// No report; `message` carries the error chain.
    pub fn failure(message: impl Into<String>, journal: Vec<JournalEntry>) -> Self {
        Self {
            status: RunStatus::Error,
            report: None,
            message: Some(message.into()),
            journal,
        }
    }
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_banner<W: Write>(out: &mut W, started_at: &str) -> Result<()> {
    writeln!(out, "HealthGuard360 Data Flow Monitoring")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "Started at: {}", started_at)?;
    Ok(())
}

pub fn write_section<W: Write>(out: &mut W, ordinal: usize, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}. {}...", ordinal, title)?;
    Ok(())
}

pub fn write_journey_summary<W: Write>(out: &mut W, report: &JourneyReport) -> Result<()> {
    let components = report
        .summary
        .components_used
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out, "   Completed {} steps", report.total_steps)?;
    writeln!(out, "   Total operations: {}", report.summary.total_operations)?;
    writeln!(out, "   Components used: {}", components)?;
    writeln!(out, "   Average response time: {}ms", report.summary.average_duration_ms)?;
    writeln!(out, "   System health: {}", report.summary.system_health.as_str().to_uppercase())?;
    Ok(())
}

pub fn write_performance_summary<W: Write>(out: &mut W, report: &PerformanceReport) -> Result<()> {
    let metrics = &report.performance_metrics;
    writeln!(out, "   Completed {} operations", metrics.total_operations)?;
    writeln!(out, "   Users tested: {}", metrics.total_users)?;
    writeln!(out, "   Average response time: {}ms", metrics.average_response_time)?;
    Ok(())
}

pub fn write_completion<W: Write>(out: &mut W, completed_at: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "HealthGuard360 Data Flow Monitoring Complete!")?;
    writeln!(out)?;
    writeln!(out, "Completed at: {}", completed_at)?;
    Ok(())
}

pub fn write_final_status<W: Write>(out: &mut W, status: RunStatus) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Final Status: {}", status.as_str())?;
    Ok(())
}

/// Text-mode tail of a failed run.
pub fn write_failure<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "Error during monitoring: {}", message)?;
    write_final_status(out, RunStatus::Error)
}
