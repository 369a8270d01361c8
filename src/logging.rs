//! Tracing initialization.
//! Builds a subscriber with EnvFilter, supports compact or JSON formats, and optional file logging.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - Console logs go to stderr so stdout carries only narration and the summary.
//! - If `log_file` is provided and passes safety checks, a non-blocking file layer is added.
//!
//! File logging is refused when any ancestor of the file path is a symlink.

use anyhow::Result;
use chrono::Local;
use flattener::output as out;
use flattener::platform::open_log_file_append;
use flattener::{LogLevel, default_log_path, path_has_symlink_ancestor};
use std::fmt as stdfmt;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry, registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

#[inline]
fn env_filter_from_level(level_filter: LevelFilter) -> EnvFilter {
    let level_str = match level_filter {
        LevelFilter::ERROR => "error",
        LevelFilter::WARN => "warn",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
        _ => "warn",
    };
    EnvFilter::new(level_str)
}

/// Console or file layer in the requested format.
fn fmt_layer<W>(writer: W, json: bool) -> BoxedLayer
where
    W: for<'w> tsfmt::MakeWriter<'w> + Send + Sync + 'static,
{
    if json {
        tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(true)
            .with_writer(writer)
            .boxed()
    } else {
        tsfmt::layer()
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(false)
            .compact()
            .with_writer(writer)
            .boxed()
    }
}

/// Try to open a non-blocking file writer for logging.
/// Prints a short reason to stderr and returns None when file logging cannot be enabled.
fn maybe_open_non_blocking_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(true) => {
            eprintln!(
                "Refusing to enable file logging: ancestor of {} is a symlink; proceeding without file logging.",
                path.display()
            );
            return None;
        }
        Err(e) => {
            eprintln!(
                "Error checking log path {} for symlinks: {}; proceeding without file logging.",
                path.display(),
                e
            );
            return None;
        }
        Ok(false) => {}
    }

    match open_log_file_append(path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            eprintln!("{}", e);
            None
        }
    }
}

/// Initialize tracing based on LogLevel and format. Returns an optional WorkerGuard
/// if a file appender is created (must be held until shutdown to flush logs).
pub fn init_tracing(
    lvl: &LogLevel,
    log_file: Option<&Path>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let env_filter = env_filter_from_level(to_level_filter(lvl));
    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(std::io::stderr, json)];
    let mut guard = None;

    if let Some(path) = log_file {
        if let Some((writer, g)) = maybe_open_non_blocking_writer(path) {
            layers.push(fmt_layer(writer, json));
            guard = Some(g);
        } else {
            out::print_warn(&format!(
                "Requested file logging to '{}' was not enabled. Check that the parent directory is writable and that no ancestor is a symlink. Logs will continue to stderr.",
                path.display()
            ));
            if let Ok(def) = default_log_path() {
                out::print_info(&format!("You can try the default log path instead: {}", def.display()));
            }
        }
    }

    registry().with(layers).with(env_filter).try_init()?;
    Ok(guard)
}
