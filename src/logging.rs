//! Minimal `log` backend for the console game.
//!
//! stdout carries the boards and prompts, so records go to stderr and can be
//! redirected without disturbing play.

use std::env;

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level used when `BATTLESHIP_LOG` is unset or unparsable. Only placement
/// restarts and failed setups show at this level.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Install the stderr logger, reading the level (`error`..`trace`, `off`) from
/// `BATTLESHIP_LOG`. Calling it again is a no-op.
pub fn init_logging() {
    let level = env::var("BATTLESHIP_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(DEFAULT_LEVEL);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
