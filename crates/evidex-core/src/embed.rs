//! Embedded-mode detection.
//!
//! A page is "embedded" when it is hosted inside another page's frame. Two
//! signals are sensed once per request: an `embedded=true` query parameter,
//! and the fetch-metadata destination reporting a nested browsing context.
//! The result is computed once, stored on the render context, and never
//! re-evaluated for the lifetime of that render.

/// Raw signals observed from a single incoming request.
#[derive(Debug, Clone, Default)]
pub struct EmbedSignals {
    /// Value of the `embedded` query parameter, if present.
    pub query_param: Option<String>,
    /// Value of the `Sec-Fetch-Dest` request header, if present.
    pub fetch_dest: Option<String>,
}

impl EmbedSignals {
    /// Signals for a top-level request with no query parameter.
    pub fn standalone() -> Self {
        Self::default()
    }
}

/// Compute the embedded flag from the request signals.
///
/// The query signal fires only on the exact string `"true"`. The frame
/// signal fires when the fetch destination is `iframe` or `frame`. Absent
/// signals degrade to `false`; the function is total.
pub fn is_embedded(signals: &EmbedSignals) -> bool {
    let query_signal = signals.query_param.as_deref() == Some("true");
    let frame_signal = matches!(signals.fetch_dest.as_deref(), Some("iframe") | Some("frame"));
    query_signal || frame_signal
}
