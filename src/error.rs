use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading site configuration or content
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("JSON parsing error")]
    Json(#[from] serde_json::Error),

    #[error("invalid base URL `{0}`")]
    InvalidUrl(String, #[source] url::ParseError),

    #[error("invalid header source pattern `{0}`")]
    InvalidPattern(String, #[source] regex::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.json"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.json"));

        let validation_err = ConfigError::Validation("name must not be empty".to_string());
        assert!(format!("{validation_err}").contains("name must not be empty"));
    }
}
