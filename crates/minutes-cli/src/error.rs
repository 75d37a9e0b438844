//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API credential not set
    #[error("{0} is not set. Export it or add it to a .env file.")]
    MissingApiKey(&'static str),

    /// Minutes file could not be read
    #[error("Cannot read {}: {source}", .path.display())]
    Input {
        /// Path of the minutes file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Archive or error log could not be opened
    #[error("Cannot open {} / {} for appending: {source}", .records.display(), .errors.display())]
    Output {
        /// Path of the JSONL archive
        records: PathBuf,
        /// Path of the error log
        errors: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Pipeline error
    #[error(transparent)]
    Extractor(#[from] minutes_extractor::ExtractorError),

    /// LLM provider setup error
    #[error("LLM provider error: {0}")]
    Llm(#[from] minutes_llm::LlmError),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use minutes_extractor::ExtractorError;
    use minutes_llm::LlmError;
    use std::io;

    fn fail_with<E>(e: E) -> Result<()>
    where
        CliError: From<E>,
    {
        Err::<(), E>(e)?;
        Ok(())
    }

    #[test]
    fn test_library_errors_convert() {
        let err = fail_with(ExtractorError::Config("no separators".into())).unwrap_err();
        assert!(matches!(err, CliError::Extractor(_)));
        assert_eq!(err.to_string(), ExtractorError::Config("no separators".into()).to_string());

        let err = fail_with(LlmError::Other("no TLS backend".into())).unwrap_err();
        assert!(matches!(err, CliError::Llm(_)));
        assert!(err.to_string().contains("no TLS backend"));
    }

    #[test]
    fn test_file_errors_name_the_path() {
        let err = CliError::Input {
            path: PathBuf::from("minutes.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Cannot read minutes.txt: not found");

        let err = CliError::Output {
            records: PathBuf::from("out.jsonl"),
            errors: PathBuf::from("errors.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Cannot open out.jsonl / errors.log"));
    }
}
