//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and forwards every accepted record to an optional sink (e.g. the browser
//! console).

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// A single captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Render as a single line: `2024-01-01T00:00:00.000Z INFO [target] message`
    pub fn format_line(&self) -> String {
        format!(
            "{} {:<5} [{}] {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Receives each record after it has been buffered
pub type Sink = Box<dyn Fn(&LogEntry) + Send + Sync>;

/// Circular-buffer logger
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogEntry>>,
    sink: Option<Sink>,
}

impl RollingLogger {
    /// Create a logger retaining at most `capacity` records at or above `level`
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            level,
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
            sink: None,
        }
    }

    /// Forward every accepted record to `sink`
    pub fn with_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&LogEntry) + Send + Sync + 'static,
    {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Snapshot of buffered records, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Install as the global `log` backend.
    ///
    /// The logger is leaked so the returned reference can be used to read
    /// the buffer for the rest of the program.
    pub fn init(self) -> Result<&'static RollingLogger, SetLoggerError> {
        let level = self.level;
        let logger: &'static RollingLogger = Box::leak(Box::new(self));
        log::set_logger(logger)?;
        log::set_max_level(level);
        Ok(logger)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<LogEntry>> {
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        let mut buffer = self.lock();
        while buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if let Some(sink) = &self.sink {
            sink(&entry);
        }
        self.push(entry);
    }

    fn flush(&self) {}
}
