//! In-app activity log.
//!
//! Success notifications (product created, updated, deleted) and storage
//! failures are appended here and shown by
//! [`ActivityLogPanel`](crate::ActivityLogPanel). Every entry is also emitted
//! as a `tracing` event. Only the newest [`MAX_ENTRIES`] are kept.

use dioxus::prelude::*;

pub const MAX_ENTRIES: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Success => "ok",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Error => "activity-log-entry error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Increases by one per recorded entry; stable across trimming.
    pub seq: u64,
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
    next_seq: u64,
    pub visible: bool,
}

impl ActivityLog {
    /// Oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn record(&mut self, level: LogLevel, message: &str, timestamp: String) {
        self.entries.push(LogEntry {
            seq: self.next_seq,
            timestamp,
            level,
            message: message.to_string(),
        });
        self.next_seq += 1;
        if self.entries.len() > MAX_ENTRIES {
            let overflow = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..overflow);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .count()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

/// Record `message` in the activity log and emit it through `tracing`.
pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    match level {
        LogLevel::Error => tracing::error!("{message}"),
        LogLevel::Warning => tracing::warn!("{message}"),
        LogLevel::Success => tracing::info!("{message}"),
    }
    log.write().record(level, message, current_time());
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds()
    )
}

// UTC; the desktop build has no timezone database
#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let (h, m, s) = ((secs / 3600) % 24, (secs / 60) % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_newest_entries() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.record(LogLevel::Success, &format!("entry {i}"), "00:00:00".to_string());
        }
        assert_eq!(log.entries().len(), MAX_ENTRIES);
        assert_eq!(log.entries()[0].message, "entry 5");
        assert_eq!(
            log.entries().last().map(|e| e.message.as_str()),
            Some("entry 104")
        );
    }

    #[test]
    fn test_error_count_and_clear() {
        let mut log = ActivityLog::default();
        log.record(LogLevel::Success, "Product created successfully!", "00:00:00".to_string());
        log.record(LogLevel::Error, "storage unavailable", "00:00:01".to_string());
        assert_eq!(log.error_count(), 1);

        log.clear();
        assert!(log.entries().is_empty());
        assert_eq!(log.error_count(), 0);
    }

    #[test]
    fn test_sequence_survives_trimming() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES {
            log.record(LogLevel::Success, &format!("entry {i}"), "00:00:00".to_string());
        }
        let first_kept = log.entries()[1].seq;

        log.record(LogLevel::Warning, "already deleted", "00:00:00".to_string());
        assert_eq!(log.entries()[0].seq, first_kept);
        assert_eq!(log.entries().last().map(|e| e.seq), Some(MAX_ENTRIES as u64));

        log.clear();
        log.record(LogLevel::Success, "after clear", "00:00:00".to_string());
        assert_eq!(log.entries()[0].seq, MAX_ENTRIES as u64 + 1);
    }

    #[test]
    fn test_current_time_shape() {
        let time = current_time();
        assert_eq!(time.len(), 8);
        assert_eq!(time.matches(':').count(), 2);
    }
}
