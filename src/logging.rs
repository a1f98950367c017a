//! Structured JSONL logging plus human-readable stderr output.
//!
//! Dual-output logging in the same shape as the rest of the tooling here:
//! - **JSONL to file** (platform data dir, `emoji-inline/logs/emoji-inline.jsonl`)
//!   for machine parsing
//! - **Compact to stderr** for developers
//!
//! Call [`init`] once at startup and keep the returned guard alive for the
//! duration of the program; dropping it flushes and closes the log file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Guard that must be kept alive for the duration of the program.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the dual-output logging system.
///
/// The default filter level is `info`; override with `RUST_LOG` (the fuzzy
/// searcher and the picker log per-event detail at `debug`/`trace`).
pub fn init() -> LoggingGuard {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let log_path = log_dir.join("emoji-inline.jsonl");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .unwrap_or_else(|e| {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            OpenOptions::new()
                .write(true)
                .open("/dev/null")
                .expect("Failed to open /dev/null")
        });

    // Non-blocking writer so logging never stalls the event handlers
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Log directory under the platform data dir, with a temp-dir fallback.
fn get_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("emoji-inline").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("emoji-inline-logs"))
}

/// Path of the JSONL log file.
pub fn log_path() -> PathBuf {
    get_log_dir().join("emoji-inline.jsonl")
}
