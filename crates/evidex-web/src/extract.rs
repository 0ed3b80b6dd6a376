//! Per-request signal extraction.
//!
//! Builds the immutable `RenderContext` from one incoming request: embed
//! signals (query parameter + fetch-metadata header), the opaque auth
//! signal, the server's chrome options, and the pass-through file list.
//! Computed once here; nothing downstream re-senses anything.

use axum::http::HeaderMap;
use serde::Deserialize;

use evidex_core::embed::{self, EmbedSignals};
use evidex_core::RenderContext;

use crate::state::AppState;

/// Query parameters the shell cares about.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub embedded: Option<String>,
}

/// Read the embed signals off a request.
pub fn embed_signals(query: &PageQuery, headers: &HeaderMap) -> EmbedSignals {
    EmbedSignals {
        query_param: query.embedded.clone(),
        fetch_dest: header_str(headers, "sec-fetch-dest").map(String::from),
    }
}

/// Build the render context for one request.
pub fn render_context(state: &AppState, query: &PageQuery, headers: &HeaderMap) -> RenderContext {
    let embedded = embed::is_embedded(&embed_signals(query, headers));
    let user = state.auth.current_user(header_str(headers, "cookie"));
    RenderContext::new(embedded, user, state.chrome).with_files(state.files.as_ref().clone())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
