use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting text from a PDF and saving it
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read PDF file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse PDF {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("failed to extract text from page {page}: {reason}")]
    Page { page: usize, reason: String },

    #[error("page {page} has no extractable text")]
    BlankPage { page: usize },

    #[error("failed to write text file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("console output error: {0}")]
    Console(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience Result type with ExtractError
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = ExtractError::Read {
            path: PathBuf::from("/tmp/missing.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.pdf"));

        let err = ExtractError::BlankPage { page: 3 };
        assert_eq!(err.to_string(), "page 3 has no extractable text");
    }
}
