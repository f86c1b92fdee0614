use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::event::{Component, FlowRecord, FlowStep};

/// Upper bounds (exclusive) of the first two health tiers, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthThresholds {
    pub excellent_below_ms: f64,
    pub good_below_ms: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            excellent_below_ms: 1000.0,
            good_below_ms: 3000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemHealth {
    Excellent,
    Good,
    NeedsAttention,
}

impl SystemHealth {
    pub fn classify(average_duration_ms: f64, thresholds: &HealthThresholds) -> Self {
        if average_duration_ms < thresholds.excellent_below_ms {
            SystemHealth::Excellent
        } else if average_duration_ms < thresholds.good_below_ms {
            SystemHealth::Good
        } else {
            SystemHealth::NeedsAttention
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SystemHealth::Excellent => "excellent",
            SystemHealth::Good => "good",
            SystemHealth::NeedsAttention => "needs_attention",
        }
    }
}

/// Derived view over one batch of records. Read-only once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSummary {
    pub timestamp: String,
    pub total_operations: usize,
    pub components_used: BTreeSet<Component>,
    pub users_involved: BTreeSet<String>,
    pub total_duration_ms: u64,
    pub average_duration_ms: f64,
    pub flow_patterns: BTreeMap<FlowStep, u64>,
    pub system_health: SystemHealth,
}

/// Pure aggregation: records in, summary out. `timestamp` stamps the summary only.
pub fn compute_summary(
    records: &[FlowRecord],
    thresholds: &HealthThresholds,
    timestamp: impl Into<String>,
) -> SystemSummary {
    let mut components_used = BTreeSet::new();
    let mut users_involved = BTreeSet::new();
    let mut flow_patterns = BTreeMap::new();
    let mut total_duration_ms = 0u64;

    for record in records {
        components_used.insert(record.component);
        users_involved.insert(record.user_id.clone());
        *flow_patterns.entry(record.flow_step).or_insert(0) += 1;
        total_duration_ms += record.duration_ms;
    }

    // Empty batch averages to 0
    let raw_average = if records.is_empty() {
        0.0
    } else {
        total_duration_ms as f64 / records.len() as f64
    };
    let average_duration_ms = round_to_hundredths(raw_average);

    SystemSummary {
        timestamp: timestamp.into(),
        total_operations: records.len(),
        components_used,
        users_involved,
        total_duration_ms,
        average_duration_ms,
        flow_patterns,
        system_health: SystemHealth::classify(raw_average, thresholds),
    }
}

/// Two decimals, exact halves to even: 2790.625 -> 2790.62.
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    let rounded = scaled.round();
    let tie = (scaled - scaled.trunc()).abs() == 0.5;
    let adjusted = if tie && rounded % 2.0 != 0.0 {
        rounded - scaled.signum()
    } else {
        rounded
    };
    adjusted / 100.0
}
