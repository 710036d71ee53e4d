pub mod attachment;
pub mod errors;
pub mod file;
pub mod html;
pub mod json;

pub use attachment::{attachment_response, XLSX};
pub use errors::{error_to_response, ResultResp};
pub use file::file_response;
pub use html::{html_response, redirect};
pub use json::json_response;
