use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sets up the global tracing subscriber: human-readable console output plus
/// JSON lines in a daily-rolling file under `logs/`.
pub fn init_logging() {
    let _ = fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "analyzer.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer().json().with_writer(file_writer);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stdout);

    // RUST_LOG wins; otherwise stay verbose for this crate only.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("powerlift_analyzer=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The guard must outlive the process or buffered file logs are lost.
    std::mem::forget(guard);
}
