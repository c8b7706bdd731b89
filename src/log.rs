// src/log.rs
//
// Logging goes through the `log` facade. The debug file always receives
// everything; the terminal logger is only attached for the CLI.

use std::fs::{self, File};

use ::log::LevelFilter;
use simplelog::{CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, WriteLogger};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Where log lines should go besides the debug file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    FileOnly,
    FileAndTerminal(LevelFilter),
}

/// Install the global logger. Safe to call more than once; later calls are ignored.
pub fn init(target: LogTarget) {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if fs::create_dir_all(STORE_DIR).is_ok() {
        if let Ok(file) = File::create(LOG_FILE) {
            loggers.push(WriteLogger::new(LevelFilter::Debug, config.clone(), file));
        }
    }
    if let LogTarget::FileAndTerminal(level) = target {
        loggers.push(TermLogger::new(
            level,
            config,
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ));
    }

    // Already initialised (tests, second window) is not an error worth surfacing.
    let _ = CombinedLogger::init(loggers);
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
