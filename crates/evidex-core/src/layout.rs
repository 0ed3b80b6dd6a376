//! Shell selection and chrome visibility.
//!
//! Selection is re-derived on every render from current inputs; nothing here
//! is stored between requests. Signing in changes the next render's shell
//! with no other side effects.

use serde::{Deserialize, Serialize};

/// Which top-level shell to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutChoice {
    /// Sidebar workspace shell for signed-in users. Never shows
    /// header/footer chrome.
    Workspace,
    /// Header/content/footer shell for anonymous visitors.
    Minimal,
}

impl LayoutChoice {
    /// Pure function of auth presence. The embed flag and chrome options
    /// play no part in shell selection.
    pub fn select(user_present: bool) -> Self {
        if user_present {
            LayoutChoice::Workspace
        } else {
            LayoutChoice::Minimal
        }
    }
}

/// Server-configured chrome toggles for the minimal shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeOptions {
    pub show_navbar: bool,
    pub show_footer: bool,
}

impl Default for ChromeOptions {
    fn default() -> Self {
        Self {
            show_navbar: true,
            show_footer: true,
        }
    }
}

/// Resolved chrome visibility for one render of the minimal shell.
///
/// Embedded mode suppresses both regions regardless of configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeVisibility {
    pub navbar: bool,
    pub footer: bool,
}

impl ChromeVisibility {
    pub fn resolve(options: ChromeOptions, embedded: bool) -> Self {
        Self {
            navbar: !embedded && options.show_navbar,
            footer: !embedded && options.show_footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_in_selects_workspace_shell() {
        assert_eq!(LayoutChoice::select(true), LayoutChoice::Workspace);
    }

    #[test]
    fn test_anonymous_selects_minimal_shell() {
        assert_eq!(LayoutChoice::select(false), LayoutChoice::Minimal);
    }

    #[test]
    fn test_default_options_show_all_chrome() {
        let vis = ChromeVisibility::resolve(ChromeOptions::default(), false);
        assert!(vis.navbar);
        assert!(vis.footer);
    }

    #[test]
    fn test_embedded_suppresses_all_chrome() {
        let vis = ChromeVisibility::resolve(ChromeOptions::default(), true);
        assert!(!vis.navbar);
        assert!(!vis.footer);
    }

    #[test]
    fn test_embedded_overrides_explicit_options() {
        let options = ChromeOptions {
            show_navbar: true,
            show_footer: true,
        };
        let vis = ChromeVisibility::resolve(options, true);
        assert!(!vis.navbar);
        assert!(!vis.footer);
    }

    #[test]
    fn test_navbar_suppressed_footer_shown() {
        let options = ChromeOptions {
            show_navbar: false,
            show_footer: true,
        };
        let vis = ChromeVisibility::resolve(options, false);
        assert!(!vis.navbar);
        assert!(vis.footer);
    }

    #[test]
    fn test_footer_suppressed_navbar_shown() {
        let options = ChromeOptions {
            show_navbar: true,
            show_footer: false,
        };
        let vis = ChromeVisibility::resolve(options, false);
        assert!(vis.navbar);
        assert!(!vis.footer);
    }
}
