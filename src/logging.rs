// Logger setup and conditional logging macros - macros are only active in debug builds

use env_logger::Env;
use log::LevelFilter;

/// Default filter when neither `-v` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Map the number of `-v` flags to a level filter.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` wins over the verbosity flag when set.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if std::env::var_os("RUST_LOG").is_none() && verbosity > 0 {
        builder.filter_level(level_for_verbosity(verbosity));
    }
    builder.format_timestamp(None);
    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
