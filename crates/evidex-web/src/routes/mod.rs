//! Route handlers.

pub mod assets;
pub mod health;
pub mod pages;
pub mod partials;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use evidex_core::EvidexError;

/// Render a template to a response, mapping render failures to a 500.
pub(crate) fn render_html<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            let err = EvidexError::template(e.to_string());
            tracing::error!(error = %err, "template render failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("Template error: {}", err)),
            )
                .into_response()
        }
    }
}
