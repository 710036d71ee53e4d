use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, Markup};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found", false),

        ServerError::BadRequest(msg) => render_error(400, &msg, false),

        // Unavailable and malformed data look the same to the user.
        ServerError::Data(e) => render_error(503, &format!("Error loading data: {e}"), true),

        ServerError::XlsxError(msg) => {
            render_error(500, &format!("Spreadsheet Error: {msg}"), false)
        }

        ServerError::InternalError => render_error(500, "Internal Server Error", false),
    }
}

pub fn error_panel(message: &str, retry: bool) -> Markup {
    html! {
        div class="error-message" {
            h3 { "Error" }
            p { (message) }
            @if retry {
                form action="/retry" method="post" {
                    button type="submit" class="btn-retry" { "Retry" }
                }
            }
            p { a href="/" { "← Back to dashboard" } }
        }
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str, retry: bool) -> Response {
    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container" {
                h1 { "Error " (status) }
                (error_panel(message, retry))
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
