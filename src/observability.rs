//! This module provides observability and diagnostics for the pipeline.
//!
//! The `log_metric!` macro emits a structured key/value line through the `log`
//! facade at `debug` level, so it costs a level check when logging is off.
//! `init_logging` installs an `env_logger` backend once, for binaries and tests
//! that want to see those lines.

use std::sync::Once;

use log::LevelFilter;

static INIT_LOGGER: Once = Once::new();

/// Logs a structured key-value metric line at `debug` level.
///
/// # Example
/// ```
/// use transform_core::log_metric;
/// let stages = 4;
/// log_metric!("event" = "process", "stages" = &stages);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if $crate::__log::log_enabled!($crate::__log::Level::Debug) {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::__log::debug!("TRANSFORM_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

/// Installs a minimal `env_logger` backend at `level`. Later calls are no-ops.
///
/// `RUST_LOG`, when set, overrides `level` per module.
pub fn init_logging(level: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.filter_level(level);
        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        // Another logger may already be installed by the host application.
        if builder.try_init().is_err() {
            log::debug!("logger already initialized, keeping the existing one");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(LevelFilter::Debug);
        init_logging(LevelFilter::Trace);
        log_metric!("event" = "test", "value" = 3);
    }
}
