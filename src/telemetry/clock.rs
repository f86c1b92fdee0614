use chrono::Local;

/// ISO-8601 local time, microsecond precision, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Source of record timestamps.
pub trait Clock: Send + Sync {
    fn now_iso(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Always returns the same instant. Used to make records comparable.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: String,
}

impl FixedClock {
    pub fn new(instant: impl Into<String>) -> Self {
        Self { instant: instant.into() }
    }
}

impl Clock for FixedClock {
    fn now_iso(&self) -> String {
        self.instant.clone()
    }
}
