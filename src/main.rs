//! Language Picker - Main Entry Point
//!
//! A grid of language cards with press feedback.

use language_picker::app::application::run_app;
use language_picker::domain::config::AppConfig;
use language_picker::helpers::{get_or_create_log_dir, is_development};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Stdout logging plus a daily rolling log file when the data directory is usable
fn init_tracing() -> Option<WorkerGuard> {
    let default_level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let log_dir = get_or_create_log_dir();
    let (file_layer, guard) = match &log_dir {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "language-picker.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_timer(LocalTime::rfc_3339())
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(LocalTime::rfc_3339()))
        .with(file_layer)
        .init();

    if let Err(e) = log_dir {
        warn!(error = %e, "File logging disabled");
    }

    guard
}

fn main() {
    let _guard = init_tracing();

    tracing::info!("Starting language picker...");

    let config = AppConfig::load_or_default();

    // Run the GPUI application
    run_app(config);
}
