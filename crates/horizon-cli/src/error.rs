//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A `tenor:rate` pillar list could not be parsed.
    #[error("Invalid curve points: {0}. Use tenor:rate pairs, e.g. \"0.5:4.1,2:4.3\".")]
    InvalidPoints(String),

    /// A scenario string could not be parsed.
    #[error("Invalid scenario: {0}. Use parallel:BPS, steepener:SHORT:LONG:PIVOT or flattener:SHORT:LONG:PIVOT.")]
    InvalidScenario(String),

    /// A comma-separated number list could not be parsed.
    #[error("Invalid number list: {0}")]
    InvalidList(String),

    /// A curve file could not be read or parsed.
    #[error("Invalid curve file {path}: {reason}")]
    CurveFile {
        /// File that failed.
        path: String,
        /// What went wrong.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
