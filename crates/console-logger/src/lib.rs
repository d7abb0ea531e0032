//! Console Logger
//!
//! A `log` backend for wasm frontends. Records are written to the browser
//! devtools console (stderr when not running on wasm32), and the most recent
//! ones are kept in a bounded ring so a crash report can include them.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in the ring
pub const DEFAULT_CAPACITY: usize = 200;

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    ring: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            ring: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of the buffered records, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.ring.lock() {
            Ok(ring) => ring.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Buffered records as one block under `heading`, for crash reports
    pub fn report(&self, heading: &str) -> String {
        let recent = self.recent();
        let mut out = format!("{} ({} records)", heading, recent.len());
        for line in recent {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }

    fn push(&self, line: String) {
        if let Ok(mut ring) = self.ring.lock() {
            if ring.len() == self.capacity {
                ring.pop_front();
            }
            ring.push_back(line);
        }
    }
}

/// Format a record as `HH:MM:SS.mmm LEVEL [target] message`
pub fn format_record(record: &Record) -> String {
    let now = chrono::Local::now().format("%H:%M:%S%.3f");
    format!("{} {:<5} [{}] {}", now, record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_line(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install a logger as the global `log` backend.
///
/// Returns the installed instance so callers can read the ring later.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_ring_keeps_most_recent() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }
        let recent = logger.recent();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].ends_with("line 2"));
        assert!(recent[2].ends_with("line 4"));
    }

    #[test]
    fn test_level_filter_drops_verbose_records() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Info, "still noise");
        emit(&logger, Level::Error, "boom");
        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].contains("ERROR"));
        assert!(recent[0].contains("[test] boom"));
    }

    #[test]
    fn test_report_lists_buffer_oldest_first() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 2);
        assert_eq!(logger.report("recent"), "recent (0 records)");

        emit(&logger, Level::Info, "loaded");
        emit(&logger, Level::Warn, "slow");
        emit(&logger, Level::Error, "failed");
        let report = logger.report("recent");
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "recent (2 records)");
        assert!(lines[1].ends_with("[test] slow"));
        assert!(lines[2].ends_with("[test] failed"));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }
}
