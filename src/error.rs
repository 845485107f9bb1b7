use thiserror::Error;

use crate::extraction::ExtractionError;

#[derive(Debug, Error)]
pub enum SimmerError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = SimmerError::Config("missing endpoint".into());
        assert_eq!(err.to_string(), "Config error: missing endpoint");
    }

    #[test]
    fn extraction_error_is_wrapped() {
        let err = SimmerError::from(ExtractionError::UnexpectedStatus { status: 502 });
        assert_eq!(err.to_string(), "Extraction error: unexpected status code: 502");
    }
}
