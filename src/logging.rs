//! Logger setup for the binary.
//!
//! Log records go to stderr through `env_logger`. When `RUST_LOG` is set it
//! decides the filter; otherwise only warnings are shown until the command's
//! `-verbosity` is known and [`apply_verbosity`] raises the level.

use std::env;

use log::LevelFilter;

use crate::common_options::Verbosity;

const RUST_LOG: &str = "RUST_LOG";

/// Installs the logger. Calling it again is a no-op.
pub fn init() {
    let mut builder = env_logger::Builder::new();
    builder.format_timestamp(None).format_target(false);

    match env::var(RUST_LOG) {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(LevelFilter::Trace);
        }
    }

    if builder.try_init().is_ok() && !rust_log_set() {
        log::set_max_level(LevelFilter::Warn);
    }
}

/// Raises or lowers the log level to match `verbosity`, unless `RUST_LOG`
/// is in control.
pub fn apply_verbosity(verbosity: Verbosity) {
    if !rust_log_set() {
        log::set_max_level(verbosity.level_filter());
    }
}

fn rust_log_set() -> bool {
    env::var_os(RUST_LOG).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_apply_verbosity_sets_max_level() {
        let saved = env::var_os(RUST_LOG);
        env::remove_var(RUST_LOG);

        apply_verbosity(Verbosity::Detailed);
        assert_eq!(log::max_level(), LevelFilter::Debug);
        apply_verbosity(Verbosity::Quiet);
        assert_eq!(log::max_level(), LevelFilter::Warn);

        if let Some(value) = saved {
            env::set_var(RUST_LOG, value);
        }
    }

    #[test]
    #[serial]
    fn test_rust_log_takes_precedence() {
        let saved = env::var_os(RUST_LOG);
        env::set_var(RUST_LOG, "trace");
        log::set_max_level(LevelFilter::Trace);

        apply_verbosity(Verbosity::Quiet);
        assert_eq!(log::max_level(), LevelFilter::Trace);

        match saved {
            Some(value) => env::set_var(RUST_LOG, value),
            None => env::remove_var(RUST_LOG),
        }
    }
}
