//! The global destination of the statistics of a [`Solver`](crate::Solver).
//!
//! Nothing is written until [`configure_statistic_logging`] has been called; afterwards every
//! statistic is written as a single line `{prefix} {name}={value}`, optionally followed by a
//! closing line once a block of statistics is complete.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// Where and how statistics are written.
pub struct StatisticOptions<'a> {
    /// Written in front of every statistic.
    statistic_prefix: &'a str,
    /// Written after a block of statistics, if present.
    after_statistics: Option<&'a str>,
    /// The casing applied to the names; names are written as-is if absent.
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send + Sync>,
}

impl std::fmt::Debug for StatisticOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("statistic_prefix", &self.statistic_prefix)
            .field("after_statistics", &self.after_statistics)
            .field("statistics_casing", &self.statistics_casing)
            .finish_non_exhaustive()
    }
}

impl StatisticOptions<'_> {
    fn statistic_line(&self, name: impl Display, value: impl Display) -> String {
        let name = match self.statistics_casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        format!("{} {name}={value}", self.statistic_prefix)
    }

    fn write_line(&mut self, line: &str) {
        if let Err(error) = writeln!(self.statistics_writer, "{line}") {
            debug!("Failed to write statistic line {line:?}: {error}");
        }
    }
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions<'static>>> = OnceLock::new();

/// Runs `action` on the configured options; does nothing if statistic logging is not configured.
fn with_statistic_options(action: impl FnOnce(&mut StatisticOptions<'static>)) {
    let Some(lock) = STATISTIC_OPTIONS.get() else {
        return;
    };

    match lock.write() {
        Ok(mut options) => action(&mut options),
        Err(_) => debug!("Statistic options are poisoned, statistics are not written"),
    }
}

/// Configures the logging of statistics.
///
/// Every statistic is preceded by `prefix`, its name is converted to `casing` (if provided), and
/// [`log_statistic_postfix`] writes `after` (if provided). Statistics go to `writer`, or to
/// stdout if no writer is provided. Only the first configuration of a process takes effect.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        RwLock::new(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Writes the statistic `name` with `value` as `{prefix} {name}={value}`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_statistic_options(|options| {
        let line = options.statistic_line(name, value);
        options.write_line(&line);
    });
}

/// Writes the closing line of a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    with_statistic_options(|options| {
        if let Some(after_statistics) = options.after_statistics {
            options.write_line(after_statistics);
        }
    });
}

/// Returns whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
