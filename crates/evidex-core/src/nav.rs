//! Static navigation data for chrome regions.

use serde::Serialize;

/// One navigation link.
#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavEntry {
    /// Whether this entry should render highlighted for the given path.
    /// The root entry matches only exactly; everything else by prefix.
    pub fn is_active(&self, path: &str) -> bool {
        if self.href == "/" {
            path == "/"
        } else {
            path.starts_with(self.href)
        }
    }
}

/// Header navigation entries for anonymous visitors.
pub fn header_entries() -> Vec<NavEntry> {
    vec![
        NavEntry { label: "Product", href: "/product" },
        NavEntry { label: "Pricing", href: "/pricing" },
        NavEntry { label: "Docs", href: "/docs" },
    ]
}

/// Sidebar navigation entries for the signed-in workspace.
pub fn sidebar_entries() -> Vec<NavEntry> {
    vec![
        NavEntry { label: "Overview", href: "/" },
        NavEntry { label: "Evidence", href: "/evidence" },
        NavEntry { label: "Controls", href: "/controls" },
        NavEntry { label: "Files", href: "/files" },
        NavEntry { label: "Settings", href: "/settings" },
    ]
}

/// A titled group of footer links.
#[derive(Debug, Clone, Serialize)]
pub struct FooterGroup {
    pub title: &'static str,
    pub entries: Vec<NavEntry>,
}

/// Footer link groups.
pub fn footer_groups() -> Vec<FooterGroup> {
    vec![
        FooterGroup {
            title: "Product",
            entries: vec![
                NavEntry { label: "Features", href: "/product" },
                NavEntry { label: "Pricing", href: "/pricing" },
            ],
        },
        FooterGroup {
            title: "Resources",
            entries: vec![
                NavEntry { label: "Documentation", href: "/docs" },
                NavEntry { label: "Support", href: "/support" },
            ],
        },
        FooterGroup {
            title: "Legal",
            entries: vec![
                NavEntry { label: "Privacy", href: "/privacy" },
                NavEntry { label: "Terms", href: "/terms" },
            ],
        },
    ]
}
