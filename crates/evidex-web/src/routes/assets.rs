//! Static asset handlers.
//!
//! The stylesheet is compiled into the binary; there is no asset pipeline.

use axum::http::header;
use axum::response::IntoResponse;

const STYLESHEET: &str = include_str!("../../assets/evidex.css");

/// GET /static/evidex.css - Serve the stylesheet.
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
