use thiserror::Error;

/// Main error type for the cipher tool
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Invalid key: the key must contain at least one letter (A-Z)")]
    InvalidKey,

    #[error("Empty input: the ciphertext contains no letters to analyze")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;

/// Advisory raised while analyzing a ciphertext. Never fatal: the analysis
/// still completes, but its output may be wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisWarning {
    #[error(
        "Ciphertext is too short for a reliable analysis ({letters} letters, need at least \
         {min_column_length} per column). Defaulting to a Caesar cipher check (key length 1)."
    )]
    ShortCiphertext {
        letters: usize,
        min_column_length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CipherError = io.into();
        assert!(matches!(err, CipherError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_warning_message_mentions_fallback() {
        let warning = AnalysisWarning::ShortCiphertext {
            letters: 12,
            min_column_length: 50,
        };
        let message = warning.to_string();
        assert!(message.contains("12 letters"));
        assert!(message.contains("key length 1"));
    }
}
