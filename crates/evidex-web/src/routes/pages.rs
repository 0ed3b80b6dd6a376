//! Full-page shell rendering.
//!
//! One handler per page; the shell is re-selected on every request purely
//! from the current auth signal. Anonymous visitors get the minimal shell
//! with chrome resolved from options + embed flag; signed-in users get the
//! sidebar workspace shell, which never carries header/footer chrome.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, Uri},
    response::Response,
};
use chrono::{Datelike, Local};

use evidex_core::files::StoredFile;
use evidex_core::greeting::Greeting;
use evidex_core::layout::LayoutChoice;
use evidex_core::nav::{self, FooterGroup, NavEntry};
use evidex_core::panels::{self, MissingEvidenceItem, SuggestionCard, WelcomeBanner};
use evidex_core::RenderContext;

use crate::extract::{render_context, PageQuery};
use crate::routes::render_html;
use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate {
    show_navbar: bool,
    show_footer: bool,
    greeting: String,
    nav: Vec<NavEntry>,
    groups: Vec<FooterGroup>,
    year: i32,
    banner: WelcomeBanner,
    suggestions: Vec<SuggestionCard>,
    missing: Vec<MissingEvidenceItem>,
}

#[derive(Template)]
#[template(path = "workspace.html")]
struct WorkspaceTemplate {
    links: Vec<SidebarLink>,
    banner: WelcomeBanner,
    suggestions: Vec<SuggestionCard>,
    missing: Vec<MissingEvidenceItem>,
    files: Vec<StoredFile>,
}

/// Sidebar entry with its active flag resolved against the request path.
struct SidebarLink {
    label: &'static str,
    href: &'static str,
    active: bool,
}

impl SidebarLink {
    fn from_entry(entry: &NavEntry, path: &str) -> Self {
        Self {
            label: entry.label,
            href: entry.href,
            active: entry.is_active(path),
        }
    }
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Render the dashboard in whichever shell the auth signal selects.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let ctx = render_context(&state, &query, &headers);
    let greeting = Greeting::now();

    match ctx.layout() {
        LayoutChoice::Workspace => render_workspace(&ctx, greeting, uri.path()),
        LayoutChoice::Minimal => render_minimal(&ctx, greeting),
    }
}

// ============================================================
// HELPERS
// ============================================================

fn render_minimal(ctx: &RenderContext, greeting: Greeting) -> Response {
    let vis = ctx.chrome_visibility();

    let template = PageTemplate {
        show_navbar: vis.navbar,
        show_footer: vis.footer,
        greeting: greeting.to_string(),
        nav: nav::header_entries(),
        groups: nav::footer_groups(),
        year: Local::now().year(),
        banner: WelcomeBanner::compose(greeting, ctx.user.as_ref()),
        suggestions: panels::suggestion_cards(),
        missing: panels::missing_evidence(),
    };

    render_html(template)
}

fn render_workspace(ctx: &RenderContext, greeting: Greeting, path: &str) -> Response {
    let links = nav::sidebar_entries()
        .iter()
        .map(|e| SidebarLink::from_entry(e, path))
        .collect();

    let template = WorkspaceTemplate {
        links,
        banner: WelcomeBanner::compose(greeting, ctx.user.as_ref()),
        suggestions: panels::suggestion_cards(),
        missing: panels::missing_evidence(),
        files: ctx.files.clone(),
    };

    render_html(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use evidex_core::context::UserHandle;
    use evidex_core::layout::ChromeOptions;

    fn anonymous(embedded: bool, chrome: ChromeOptions) -> RenderContext {
        RenderContext::new(embedded, None, chrome)
    }

    fn signed_in() -> RenderContext {
        let user = UserHandle {
            display_name: Some("Dana".to_string()),
        };
        RenderContext::new(false, Some(user), ChromeOptions::default())
            .with_files(evidex_core::files::sample_files())
    }

    fn minimal_html(ctx: &RenderContext) -> String {
        let vis = ctx.chrome_visibility();
        PageTemplate {
            show_navbar: vis.navbar,
            show_footer: vis.footer,
            greeting: Greeting::Morning.to_string(),
            nav: nav::header_entries(),
            groups: nav::footer_groups(),
            year: 2026,
            banner: WelcomeBanner::compose(Greeting::Morning, ctx.user.as_ref()),
            suggestions: panels::suggestion_cards(),
            missing: panels::missing_evidence(),
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_minimal_shell_renders_full_chrome_by_default() {
        let html = minimal_html(&anonymous(false, ChromeOptions::default()));
        assert!(html.contains("<header"));
        assert!(html.contains("<footer"));
        assert!(html.contains("Good Morning"));
    }

    #[test]
    fn test_embedded_render_has_no_chrome() {
        let html = minimal_html(&anonymous(true, ChromeOptions::default()));
        assert!(!html.contains("<header"));
        assert!(!html.contains("<footer"));
        // Content still renders.
        assert!(html.contains("Good Morning"));
    }

    #[test]
    fn test_navbar_option_suppresses_header_only() {
        let chrome = ChromeOptions {
            show_navbar: false,
            show_footer: true,
        };
        let html = minimal_html(&anonymous(false, chrome));
        assert!(!html.contains("<header"));
        assert!(html.contains("<footer"));
    }

    #[test]
    fn test_workspace_shell_has_sidebar_and_no_chrome() {
        let ctx = signed_in();
        let links = nav::sidebar_entries()
            .iter()
            .map(|e| SidebarLink::from_entry(e, "/evidence"))
            .collect();
        let html = WorkspaceTemplate {
            links,
            banner: WelcomeBanner::compose(Greeting::Afternoon, ctx.user.as_ref()),
            suggestions: panels::suggestion_cards(),
            missing: panels::missing_evidence(),
            files: ctx.files.clone(),
        }
        .render()
        .unwrap();

        assert!(html.contains("<aside"));
        assert!(html.contains("sidebar-toggle"));
        assert!(!html.contains("<header"));
        assert!(!html.contains("<footer"));
        assert!(html.contains("Good Afternoon, Dana"));
        // Active entry highlighted by path prefix.
        assert!(html.contains(r#"class="nav-link active""#));
        // Pass-through files are listed.
        assert!(html.contains("soc2-access-review-q3.pdf"));
    }
}
