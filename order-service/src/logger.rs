//! Logging Infrastructure
//!
//! Structured logging setup for development (pretty, stdout) and production
//! (JSON lines, optional daily-rolling file).

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "order_service=info,tower_http=info";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogTarget<'a> {
    Stdout,
    File(&'a str),
    /// `LOG_DIR` was set but is not a directory
    StdoutFallback(&'a str),
}

fn log_target(log_dir: Option<&str>) -> LogTarget<'_> {
    match log_dir {
        None => LogTarget::Stdout,
        Some(dir) if Path::new(dir).is_dir() => LogTarget::File(dir),
        Some(dir) => LogTarget::StdoutFallback(dir),
    }
}

/// Initialize the logger
///
/// Returns the appender guard when logging to a file; keep it alive for the
/// lifetime of the process or buffered lines are lost.
pub fn init_logger(json: bool, log_dir: Option<&str>) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let target = log_target(log_dir);
    if let LogTarget::File(dir) = target {
        let file_appender = tracing_appender::rolling::daily(dir, "order-service");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        if json {
            builder.json().with_writer(writer).init();
        } else {
            builder.with_ansi(false).with_writer(writer).init();
        }
        return Some(guard);
    }

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    if let LogTarget::StdoutFallback(dir) = target {
        tracing::warn!(log_dir = dir, "LOG_DIR is not a directory, logging to stdout");
    }
    None
}
