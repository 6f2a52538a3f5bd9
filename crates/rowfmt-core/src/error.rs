//! Error types for the row formatting library.

use thiserror::Error;

/// Comprehensive error type for all row formatting operations.
#[derive(Error, Debug)]
pub enum RowError {
    /// Row width of zero was requested
    #[error("Invalid row width: {width} (must be at least 1)")]
    InvalidRowWidth { width: usize },
    /// Write failures surfaced from the output stream
    #[error("Output error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RowError {
    /// Creates an invalid row width error.
    pub fn invalid_row_width(width: usize) -> Self {
        Self::InvalidRowWidth { width }
    }
}

/// Result type alias for row formatting operations
pub type Result<T> = std::result::Result<T, RowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_row_width_message() {
        let err = RowError::invalid_row_width(0);
        assert_eq!(
            err.to_string(),
            "Invalid row width: 0 (must be at least 1)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: RowError = io_err.into();
        assert!(matches!(err, RowError::Io { .. }));
        assert!(err.to_string().contains("pipe closed"));
    }
}
