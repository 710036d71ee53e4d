use thiserror::Error;

/// Why the dataset could not be loaded. Both variants are shown to the
/// user the same way, with a retry button.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DataError {
    #[error("Data unavailable: {0}")]
    Unavailable(String),

    #[error("Data malformed: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        DataError::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Malformed(err.to_string())
    }
}
