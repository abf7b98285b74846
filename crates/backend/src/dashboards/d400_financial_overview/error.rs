use std::path::PathBuf;
use thiserror::Error;

/// Failures of a dashboard refresh. None of them are retried: the refresh
/// stops at the first one and the caller shows it.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid date '{value}' in {} at line {line}", path.display())]
    InvalidDate {
        path: PathBuf,
        line: u64,
        value: String,
    },
}

impl DashboardError {
    /// Stable identifier sent to the UI together with the message
    pub fn kind(&self) -> &'static str {
        match self {
            DashboardError::SourceNotFound(_) => "source_not_found",
            DashboardError::Io { .. } => "io",
            DashboardError::Csv { .. } => "malformed_row",
            DashboardError::InvalidDate { .. } => "invalid_date",
        }
    }
}
