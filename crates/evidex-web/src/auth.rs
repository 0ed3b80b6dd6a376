//! Opaque authentication signal.
//!
//! The shell only asks whether a user is present. Verification, identity,
//! and session management live elsewhere; this module senses presence from
//! the request's cookies and nothing more.

use evidex_core::context::UserHandle;

/// External collaborator answering "is a user present for this request?".
pub trait AuthProvider: Send + Sync {
    /// Inspect the raw `Cookie` header and report the current user, if any.
    fn current_user(&self, cookie_header: Option<&str>) -> Option<UserHandle>;
}

/// Cookie-presence provider: a `session` cookie means a user is present.
/// The optional `session_user` cookie supplies a display name.
#[derive(Debug, Default)]
pub struct CookieAuth;

impl AuthProvider for CookieAuth {
    fn current_user(&self, cookie_header: Option<&str>) -> Option<UserHandle> {
        let header = cookie_header?;
        if cookie_value(header, "session").is_none() {
            return None;
        }
        Some(UserHandle {
            display_name: cookie_value(header, "session_user").map(String::from),
        })
    }
}

/// Fixed-answer provider for tests.
#[derive(Debug, Clone)]
pub struct StaticAuth {
    pub user: Option<UserHandle>,
}

impl StaticAuth {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(display_name: &str) -> Self {
        Self {
            user: Some(UserHandle {
                display_name: Some(display_name.to_string()),
            }),
        }
    }
}

impl AuthProvider for StaticAuth {
    fn current_user(&self, _cookie_header: Option<&str>) -> Option<UserHandle> {
        self.user.clone()
    }
}

/// Extract a cookie value from a raw `Cookie` header.
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cookie_header_means_anonymous() {
        assert!(CookieAuth.current_user(None).is_none());
    }

    #[test]
    fn test_session_cookie_means_present() {
        let user = CookieAuth.current_user(Some("session=abc123"));
        assert!(user.is_some());
        assert!(user.unwrap().display_name.is_none());
    }

    #[test]
    fn test_display_name_from_companion_cookie() {
        let user = CookieAuth
            .current_user(Some("theme=dark; session=abc123; session_user=Dana"))
            .unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Dana"));
    }

    #[test]
    fn test_empty_session_value_means_anonymous() {
        assert!(CookieAuth.current_user(Some("session=")).is_none());
    }

    #[test]
    fn test_unrelated_cookies_mean_anonymous() {
        assert!(CookieAuth.current_user(Some("theme=dark; lang=en")).is_none());
    }
}
