//! Platform logging initialization for gallery_app.
//!
//! File output goes to `./gallery.log` in the current working directory, so the
//! terminal stays free for the gallery itself.

use std::fs::File;
use std::path::PathBuf;

use gallery_logging::{log_config, terminal_logger};
use log::LevelFilter;
use serde::Deserialize;
use simplelog::{CombinedLogger, SharedLogger, WriteLogger};

const LOG_FILE: &str = "./gallery.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogDestination {
    /// Write to ./gallery.log in current directory.
    #[default]
    File,
    /// Write to terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Initialize the logger with the specified destination.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let loggers = sinks(destination, level);
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn sinks(destination: LogDestination, level: LevelFilter) -> Vec<Box<dyn SharedLogger>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(terminal_logger(level));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        if let Some(file_logger) = create_file_logger(level) {
            loggers.push(file_logger);
        }
    }
    loggers
}

fn create_file_logger(level: LevelFilter) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from(LOG_FILE);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, log_config(), file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_destination_builds_one_sink_at_level() {
        let loggers = sinks(LogDestination::Terminal, LevelFilter::Warn);
        assert_eq!(loggers.len(), 1);
        assert_eq!(loggers[0].level(), LevelFilter::Warn);
    }
}
