//! Decoupled file logger for a gradebook session.
//!
//! # Architecture
//!
//! ```text
//! log::info!() / log::warn!() ...
//!     |
//! [LogCollector] (log::Log impl, never blocks the session)
//!     | (crossbeam unbounded channel)
//!     v
//! [persister thread] -> <log_dir>/<YYYYmmdd_HHMMSS>_session.log
//! ```
//!
//! Nothing is written to stdout or stderr, so the terminal protocol of the
//! menu loop stays clean; failed writes are only counted (`failed_writes()`).
//! `flush_blocking()` waits until every line queued before it has reached disk.

use chrono::Local;
use crossbeam_channel::{unbounded, Sender};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on how long a flush waits for the persister thread.
const FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

/// Internal log line or special marker
enum LogMessage {
    Line(LogLine),
    /// Flush marker with channel sender to signal completion
    Flush(std::sync::mpsc::Sender<()>),
}

/// A log line with metadata
#[derive(Clone, Debug)]
pub struct LogLine {
    pub message: String,
    pub level: Level,
    /// Local time the line was created, `HH:MM:SS.mmm`
    pub timestamp: String,
}

impl LogLine {
    pub fn new(level: Level, message: String) -> Self {
        LogLine {
            message,
            level,
            timestamp: Local::now().format("%H:%M:%S%.3f").to_string(),
        }
    }

    /// Format: [HH:MM:SS.mmm] [LEVEL] message
    pub fn formatted(&self) -> String {
        format!("[{}] [{}] {}", self.timestamp, self.level, self.message)
    }
}

/// Ensure the logs directory exists
pub fn ensure_logs_dir_exists(log_dir: &Path) -> Result<(), String> {
    std::fs::create_dir_all(log_dir)
        .map_err(|e| format!("Failed to create logs directory: {}", e))
}

/// Logger that hands every record to a background persister thread
pub struct LogCollector {
    tx: Sender<LogMessage>,
    log_path: PathBuf,
    level: LevelFilter,
    failed_writes: Arc<AtomicUsize>,
}

impl LogCollector {
    /// Create the session log file under `log_dir` and start the persister thread
    pub fn new(log_dir: PathBuf, level: LevelFilter) -> Result<Self, String> {
        ensure_logs_dir_exists(&log_dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_path = log_dir.join(format!("{}_session.log", timestamp));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .map_err(|e| format!("Failed to open log file {}: {}", log_path.display(), e))?;

        Ok(Self::with_file(log_path, file, level))
    }

    /// Start the persister thread over an already opened file
    fn with_file(log_path: PathBuf, file: File, level: LevelFilter) -> Self {
        let (tx, rx) = unbounded::<LogMessage>();
        let failed_writes = Arc::new(AtomicUsize::new(0));
        let failed_writes_clone = Arc::clone(&failed_writes);

        // Plain OS thread: the session itself is synchronous and has no runtime.
        // Failures are counted, never printed, so the terminal stays untouched.
        std::thread::spawn(move || {
            let mut file = file;
            while let Ok(msg) = rx.recv() {
                match msg {
                    LogMessage::Line(line) => {
                        if persist_log_line(&mut file, &line).is_err() {
                            failed_writes_clone.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                    LogMessage::Flush(done) => {
                        if file.flush().is_err() {
                            failed_writes_clone.fetch_add(1, Ordering::Relaxed);
                        }
                        let _ = done.send(());
                    }
                }
            }
        });

        LogCollector {
            tx,
            log_path,
            level,
            failed_writes,
        }
    }

    /// Number of writes or flushes that failed since start-up
    pub fn failed_writes(&self) -> usize {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Path of the file this session logs to
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Queue a line for the persister
    pub fn log_line(&self, line: LogLine) {
        // Only fails once the persister thread is gone; nothing left to write to.
        let _ = self.tx.send(LogMessage::Line(line));
    }

    /// Queue a simple message at `level`
    pub fn log_str(&self, level: Level, message: impl Into<String>) {
        self.log_line(LogLine::new(level, message.into()));
    }

    /// Block until every line queued so far is on disk
    pub fn flush_blocking(&self) -> Result<(), String> {
        let (done_tx, done_rx) = std::sync::mpsc::channel();
        self.tx
            .send(LogMessage::Flush(done_tx))
            .map_err(|_| "Log persister thread has stopped".to_string())?;
        done_rx
            .recv_timeout(FLUSH_TIMEOUT)
            .map_err(|e| format!("Timed out waiting for log flush: {}", e))
    }

    /// Register a clone of this collector as the global `log` backend
    pub fn install(&self) -> Result<(), String> {
        log::set_boxed_logger(Box::new(self.clone()))
            .map(|()| log::set_max_level(self.level))
            .map_err(|e| format!("Failed to set global logger: {}", e))
    }
}

impl Clone for LogCollector {
    fn clone(&self) -> Self {
        LogCollector {
            tx: self.tx.clone(),
            log_path: self.log_path.clone(),
            level: self.level,
            failed_writes: Arc::clone(&self.failed_writes),
        }
    }
}

/// Wires all log::info!(), log::warn!(), log::error!() calls into LogCollector
impl Log for LogCollector {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.log_str(record.level(), record.args().to_string());
        }
    }

    fn flush(&self) {
        if self.flush_blocking().is_err() {
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Append one formatted line and flush it
fn persist_log_line(file: &mut File, line: &LogLine) -> Result<(), String> {
    writeln!(file, "{}", line.formatted())
        .map_err(|e| format!("Failed to write to log file: {}", e))?;
    file.flush()
        .map_err(|e| format!("Failed to flush log file: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_log_collector_creates_session_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs");

        let collector = LogCollector::new(log_dir.clone(), LevelFilter::Info).unwrap();

        assert!(log_dir.exists());
        assert!(collector.log_path().starts_with(&log_dir));
        assert!(collector
            .log_path()
            .to_string_lossy()
            .ends_with("_session.log"));
    }

    #[test]
    fn test_lines_persisted_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let collector = LogCollector::new(temp_dir.path().to_path_buf(), LevelFilter::Info).unwrap();

        for i in 0..200 {
            collector.log_str(Level::Info, format!("line {}", i));
        }
        collector.flush_blocking().unwrap();

        let content = fs::read_to_string(collector.log_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 200);
        assert!(lines[0].ends_with("[INFO] line 0"));
        assert!(lines[199].ends_with("[INFO] line 199"));
    }

    #[test]
    fn test_level_filter_applies_to_records() {
        let temp_dir = TempDir::new().unwrap();
        let collector = LogCollector::new(temp_dir.path().to_path_buf(), LevelFilter::Warn).unwrap();

        collector.log(
            &Record::builder()
                .args(format_args!("kept {}", 1))
                .level(Level::Warn)
                .build(),
        );
        collector.log(
            &Record::builder()
                .args(format_args!("skipped {}", 2))
                .level(Level::Debug)
                .build(),
        );
        collector.flush_blocking().unwrap();

        let content = fs::read_to_string(collector.log_path()).unwrap();
        assert!(content.contains("[WARN] kept 1"));
        assert!(!content.contains("skipped"));
    }

    #[test]
    fn test_successful_writes_not_counted_as_failures() {
        let temp_dir = TempDir::new().unwrap();
        let collector = LogCollector::new(temp_dir.path().to_path_buf(), LevelFilter::Info).unwrap();

        collector.log_str(Level::Info, "fine");
        Log::flush(&collector);

        assert_eq!(collector.failed_writes(), 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failures_are_counted_not_printed() {
        // Every write to /dev/full fails with ENOSPC
        let file = OpenOptions::new().write(true).open("/dev/full").unwrap();
        let collector = LogCollector::with_file(PathBuf::from("/dev/full"), file, LevelFilter::Info);
        let clone = collector.clone();

        collector.log_str(Level::Info, "first");
        clone.log_str(Level::Warn, "second");
        collector.flush_blocking().unwrap();

        assert_eq!(collector.failed_writes(), 2);
        assert_eq!(clone.failed_writes(), 2);
    }
}
