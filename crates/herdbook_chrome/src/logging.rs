use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::{DataPath, DataPathType};

/// Logs to stdout and to a daily rolling file under the data directory.
///
/// The returned guard flushes the file writer and must live for the
/// lifetime of the program.
pub fn setup_logging(path: &DataPath) -> Option<WorkerGuard> {
    let (maybe_non_blocking, maybe_guard) = {
        let log_path = path.path(DataPathType::Log);

        use tracing_appender::{
            non_blocking,
            rolling::{RollingFileAppender, Rotation},
        };

        match std::fs::create_dir_all(&log_path) {
            Ok(()) => {
                let file_appender = RollingFileAppender::new(
                    Rotation::DAILY,
                    log_path,
                    format!("herdbook-{}.log", env!("CARGO_PKG_VERSION")),
                );

                let (non_blocking, guard) = non_blocking(file_appender);
                (Some(non_blocking), Some(guard))
            }
            Err(err) => {
                eprintln!("could not create log directory: {err}");
                (None, None)
            }
        }
    };

    // Log to stdout (if you run with `RUST_LOG=debug`).
    if let Some(non_blocking_writer) = maybe_non_blocking {
        use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

        let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);

        // Create the file layer (writes to the file)
        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking_writer);

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("herdbook=info,herdbook_chrome=info,herdbook_calendar=info"));

        tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    }

    maybe_guard
}
