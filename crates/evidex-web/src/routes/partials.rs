//! HTMX fragment routes.
//!
//! Each fragment returns just its panel's HTML for partial page swaps.
//! Fragments whose content depends on request signals (the welcome banner)
//! re-sense embed/auth from their own request; the suggestion and
//! missing-evidence panels are static and take no request inputs. A
//! query-string change without a request is not observed either way.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Response,
};

use evidex_core::greeting::Greeting;
use evidex_core::panels::{self, MissingEvidenceItem, SuggestionCard, WelcomeBanner};

use crate::extract::{render_context, PageQuery};
use crate::routes::render_html;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "partials/welcome.html")]
struct WelcomeTemplate {
    banner: WelcomeBanner,
}

#[derive(Template)]
#[template(path = "partials/suggestions.html")]
struct SuggestionsTemplate {
    suggestions: Vec<SuggestionCard>,
}

#[derive(Template)]
#[template(path = "partials/missing_evidence.html")]
struct MissingEvidenceTemplate {
    missing: Vec<MissingEvidenceItem>,
}

/// GET /partials/welcome - Welcome banner fragment.
pub async fn welcome(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    let ctx = render_context(&state, &query, &headers);
    let banner = WelcomeBanner::compose(Greeting::now(), ctx.user.as_ref());
    render_html(WelcomeTemplate { banner })
}

/// GET /partials/suggestions - Suggestion cards fragment. Static content,
/// no request signals consumed.
pub async fn suggestions() -> Response {
    render_html(SuggestionsTemplate {
        suggestions: panels::suggestion_cards(),
    })
}

/// GET /partials/missing-evidence - Missing-evidence list fragment. Static
/// content, no request signals consumed.
pub async fn missing_evidence() -> Response {
    render_html(MissingEvidenceTemplate {
        missing: panels::missing_evidence(),
    })
}
