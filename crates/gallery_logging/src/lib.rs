#![deny(missing_docs)]
//! Logging for the gallery crates.
//!
//! Code logs through the `gallery_*` macros, which all funnel into
//! [`gallery_log!`]. The sinks are set up here too: the binary combines
//! [`terminal_logger`] with its file logger under one [`log_config`], and tests
//! call [`initialize_for_tests`].

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
};

#[doc(hidden)]
pub use log as __log;

/// Logs at an explicit [`log::Level`]; the per-level macros expand to this.
#[macro_export]
macro_rules! gallery_log {
    ($level:expr, $($arg:tt)*) => {{
        $crate::__log::log!($level, $($arg)*);
    }};
}

/// Trace-level message, for per-item detail.
#[macro_export]
macro_rules! gallery_trace {
    ($($arg:tt)*) => {
        $crate::gallery_log!($crate::__log::Level::Trace, $($arg)*)
    };
}

/// Debug-level message.
#[macro_export]
macro_rules! gallery_debug {
    ($($arg:tt)*) => {
        $crate::gallery_log!($crate::__log::Level::Debug, $($arg)*)
    };
}

/// Info-level message, for load lifecycle events.
#[macro_export]
macro_rules! gallery_info {
    ($($arg:tt)*) => {
        $crate::gallery_log!($crate::__log::Level::Info, $($arg)*)
    };
}

/// Warn-level message, for skipped records and fallbacks.
#[macro_export]
macro_rules! gallery_warn {
    ($($arg:tt)*) => {
        $crate::gallery_log!($crate::__log::Level::Warn, $($arg)*)
    };
}

/// Error-level message.
#[macro_export]
macro_rules! gallery_error {
    ($($arg:tt)*) => {
        $crate::gallery_log!($crate::__log::Level::Error, $($arg)*)
    };
}

/// Debug in debug builds, info in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Record format shared by every sink: RFC 3339 timestamps, and the module
/// target only on errors.
pub fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// A colored terminal sink; warnings and errors go to stderr.
pub fn terminal_logger(level: LevelFilter) -> Box<TermLogger> {
    TermLogger::new(level, log_config(), TerminalMode::Mixed, ColorChoice::Auto)
}

/// Installs a terminal logger for tests.
///
/// No-ops when another test already installed the global logger.
pub fn initialize_for_tests() {
    let loggers: Vec<Box<dyn SharedLogger>> = vec![terminal_logger(default_level())];
    let _ = CombinedLogger::init(loggers);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_logger_keeps_requested_level() {
        let logger = terminal_logger(LevelFilter::Warn);
        assert_eq!(SharedLogger::level(&*logger), LevelFilter::Warn);
    }

    #[test]
    fn macros_accept_format_arguments() {
        initialize_for_tests();
        initialize_for_tests();
        assert!(default_level() >= LevelFilter::Info);

        let page = 2;
        gallery_trace!("trace {page}");
        gallery_debug!("debug {}", page);
        gallery_info!("info {page:>3}");
        gallery_warn!("warn {:?}", Some(page));
        gallery_error!("error");
        gallery_log!(log::Level::Info, "explicit {}", page);
    }
}
