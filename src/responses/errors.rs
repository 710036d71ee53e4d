use crate::errors::ServerError;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    tracing::warn!("request failed: {err}");
    crate::templates::html_error_response(err)
}
