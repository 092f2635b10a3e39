/// Logging facilities to record events during simulation.
use std::fs::File;

use log::Level;
use serde::Serialize;

pub trait Logger {
    fn log_error(&mut self, component: &str, log: String);

    fn log_warn(&mut self, component: &str, log: String);

    fn log_info(&mut self, component: &str, log: String);

    fn log_debug(&mut self, component: &str, log: String);

    fn save_log(&self, _path: &str) -> Result<(), std::io::Error>;
}

/// Forwards records to the `log` crate facade.
#[derive(Default)]
pub struct StdoutLogger {}

impl Logger for StdoutLogger {
    fn log_error(&mut self, component: &str, log: String) {
        log::error!("[{}] {}", component, log);
    }

    fn log_warn(&mut self, component: &str, log: String) {
        log::warn!("[{}] {}", component, log);
    }

    fn log_info(&mut self, component: &str, log: String) {
        log::info!("[{}] {}", component, log);
    }

    fn log_debug(&mut self, component: &str, log: String) {
        log::debug!("[{}] {}", component, log);
    }

    fn save_log(&self, _path: &str) -> Result<(), std::io::Error> {
        Ok(())
    }
}

impl StdoutLogger {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Serialize)]
struct LogEntry {
    sequence: u64,
    component: String,
    message: String,
}

/// Keeps records in memory so they can be saved to a CSV file after the
/// session. Entries carry a monotonically increasing sequence number.
pub struct FileLogger {
    log: Vec<LogEntry>,
    level: Level,
    next_sequence: u64,
}

impl Default for FileLogger {
    fn default() -> Self {
        Self {
            log: Vec::new(),
            level: Level::Info,
            next_sequence: 0,
        }
    }
}

impl FileLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(level: Level) -> Self {
        Self {
            log: Vec::new(),
            level,
            next_sequence: 0,
        }
    }

    fn log_internal(&mut self, component: &str, message: String, level: Level) {
        if self.level < level {
            return;
        }
        self.log.push(LogEntry {
            sequence: self.next_sequence,
            component: component.to_string(),
            message,
        });
        self.next_sequence += 1;
    }
}

impl Logger for FileLogger {
    fn log_error(&mut self, component: &str, log: String) {
        self.log_internal(component, log, Level::Error)
    }

    fn log_warn(&mut self, component: &str, log: String) {
        self.log_internal(component, log, Level::Warn)
    }

    fn log_info(&mut self, component: &str, log: String) {
        self.log_internal(component, log, Level::Info)
    }

    fn log_debug(&mut self, component: &str, log: String) {
        self.log_internal(component, log, Level::Debug)
    }

    fn save_log(&self, path: &str) -> Result<(), std::io::Error> {
        let file = File::create(path)?;
        let mut wtr = csv::Writer::from_writer(file);
        for entry in &self.log {
            wtr.serialize(entry)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Initializes console logging via env_logger with a bare message format.
pub fn init_console_logger() {
    use env_logger::Builder;
    use std::io::Write;
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}
