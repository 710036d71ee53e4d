// errors.rs
use crate::store::DataError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (data, export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl From<rust_xlsxwriter::XlsxError> for ServerError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ServerError::XlsxError(err.to_string())
    }
}
