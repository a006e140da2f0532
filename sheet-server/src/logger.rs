//! Logging Infrastructure
//!
//! Structured logging setup for both development and production runs.

use std::path::Path;

/// Initialize the logger.
///
/// Level comes from `RUST_LOG` when set, otherwise `log_level`. When
/// `log_dir` names an existing directory, output goes to a daily-rolling
/// file there instead of stderr.
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(dir, "sheet-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
