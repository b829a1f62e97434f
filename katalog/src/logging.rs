//! Logging setup and error formatting helpers.

use std::{error::Error, fmt::Write, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
    Layer,
};


/// Installs the global `tracing` subscriber: one layer writes to the console,
/// the other to a daily-rotated log file inside `log_file_output_directory`.
///
/// The returned guard flushes the file writer when dropped,
/// so keep it alive until the server shuts down.
pub fn initialize_tracing(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_output_directory: &Path,
    log_file_name_prefix: &str,
) -> Result<WorkerGuard, TryInitError> {
    let file_appender =
        tracing_appender::rolling::daily(log_file_output_directory, log_file_name_prefix);
    let (non_blocking_file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_thread_names(true)
        .with_filter(console_level_filter);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_thread_names(true)
        .with_writer(non_blocking_file_writer)
        .with_filter(log_file_level_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}


/// Joins an error and all of its sources into a single line,
/// e.g. `unable to write blob category/image/a.png: disk full`.
pub fn error_chain_message(error: &dyn Error) -> String {
    let mut message = error.to_string();

    let mut source = error.source();
    while let Some(source_error) = source {
        // Writing into a `String` cannot fail.
        let _ = write!(message, ": {source_error}");
        source = source_error.source();
    }

    message
}



#[cfg(test)]
mod test {
    use std::io;

    use thiserror::Error;

    use super::*;

    #[derive(Debug, Error)]
    #[error("unable to store image")]
    struct OuterError {
        #[source]
        error: io::Error,
    }

    #[test]
    fn error_chain_message_includes_sources() {
        let error = OuterError {
            error: io::Error::new(io::ErrorKind::Other, "disk full"),
        };

        assert_eq!(
            error_chain_message(&error),
            "unable to store image: disk full"
        );

        assert_eq!(
            error_chain_message(&io::Error::new(io::ErrorKind::Other, "alone")),
            "alone"
        );
    }
}
