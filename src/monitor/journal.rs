use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use super::observer::FlowObserver;
use super::types::JournalEntry;
use crate::telemetry::event::FlowRecord;
use crate::telemetry::metrics::SystemSummary;

pub const DEFAULT_JOURNAL_CAPACITY: usize = 10_000;

/// Bounded in-memory log of everything observed. Oldest entries drop first.
#[derive(Debug)]
pub struct JournalObserver {
    capacity: usize,
    buffer: Mutex<VecDeque<JournalEntry>>,
}

impl JournalObserver {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_JOURNAL_CAPACITY)
    }

    /// A capacity of 0 is bumped to 1; `MonitorConfig::validate` rejects it earlier.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_JOURNAL_CAPACITY))),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.lock().iter().cloned().collect()
    }

    /// Only the records, in emission order.
    pub fn records(&self) -> Vec<FlowRecord> {
        self.lock()
            .iter()
            .filter_map(|entry| match entry {
                JournalEntry::Record(record) => Some(record.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|entry| match entry {
                JournalEntry::Message(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, entry: JournalEntry) {
        let mut buffer = self.lock();
        if buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }

    // Entries are plain data, so a poisoned lock still holds a usable buffer.
    fn lock(&self) -> MutexGuard<'_, VecDeque<JournalEntry>> {
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for JournalObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowObserver for JournalObserver {
    fn message(&self, message: &str) {
        self.push(JournalEntry::Message(message.to_string()));
    }

    fn record(&self, headline: &str, record: &FlowRecord) {
        self.push(JournalEntry::Message(headline.to_string()));
        self.push(JournalEntry::Record(record.clone()));
    }

    fn summary(&self, headline: &str, summary: &SystemSummary) {
        self.push(JournalEntry::Message(headline.to_string()));
        self.push(JournalEntry::Summary(summary.clone()));
    }
}
