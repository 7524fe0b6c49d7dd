//! Material 3 Gallery - Main Entry Point

use md3_ui::app::application::run_app;
use md3_ui::utils::config_store;

fn main() {
    // Keep the log writer alive for the process lifetime
    let _log_guard = init_logging();

    tracing::info!("Starting Material 3 gallery...");

    // Run the GPUI application
    run_app();
}

/// Log to stderr, and to a daily-rolled file in the data directory when
/// one is available
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match config_store::app_data_dir() {
        Ok(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "gallery.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        Err(err) => {
            tracing_subscriber::fmt().with_env_filter(env_filter).init();
            tracing::warn!(%err, "file logging disabled, no data directory");
            None
        }
    }
}
