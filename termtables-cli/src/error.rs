//! Error types

/// Errors that stop the command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input isn't valid CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The log file could not be opened.
    #[error("Cannot open log file {path}: {source}")]
    LogFile {
        path: String,
        source: std::io::Error,
    },

    /// A logger was already installed.
    #[error("Logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
