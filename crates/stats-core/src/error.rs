use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while building a swipe statistics report.
#[derive(Error, Debug)]
pub enum StatsError {
    /// The export file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export is not a valid JSON document.
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document is valid JSON but does not have the expected shape.
    #[error("Unexpected export layout: {0}")]
    Schema(String),

    /// A rate was requested whose denominator is zero.
    #[error("Cannot compute {0}: denominator is zero")]
    DivisionByZero(&'static str),
}

/// Convenience alias used throughout the stats crates.
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_access() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = StatsError::FileAccess {
            path: PathBuf::from("/some/data.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/data.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_schema() {
        let err = StatsError::Schema("missing key `Usage`".to_string());
        assert_eq!(err.to_string(), "Unexpected export layout: missing key `Usage`");
    }

    #[test]
    fn test_error_display_division_by_zero() {
        let err = StatsError::DivisionByZero("match rate");
        assert_eq!(err.to_string(), "Cannot compute match rate: denominator is zero");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: StatsError = json_err.into();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }

    #[test]
    fn test_file_access_exposes_source() {
        use std::error::Error as _;

        let err = StatsError::FileAccess {
            path: PathBuf::from("data.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }
}
