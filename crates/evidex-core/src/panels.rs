//! Static panel data for the dashboard content region.
//!
//! All of this is mock content until the suggestion and evidence services
//! exist; the shapes are what the templates render.

use serde::{Deserialize, Serialize};

use crate::context::UserHandle;
use crate::greeting::Greeting;

/// A card suggesting the next action to take.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionCard {
    pub title: String,
    pub body: String,
    pub action_label: String,
    pub action_href: String,
}

/// A control with no evidence attached yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingEvidenceItem {
    pub control_id: String,
    pub title: String,
    pub due_hint: String,
}

/// Content for the welcome banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeBanner {
    pub headline: String,
    pub subline: String,
}

impl WelcomeBanner {
    /// Compose the banner headline from the greeting and, when signed in,
    /// the user's display name.
    pub fn compose(greeting: Greeting, user: Option<&UserHandle>) -> Self {
        let name = user.and_then(|u| u.display_name.as_deref());
        let headline = match name {
            Some(name) => format!("Good {}, {}", greeting.label(), name),
            None => format!("Good {}", greeting.label()),
        };
        Self {
            headline,
            subline: "Here is where your audit stands today.".to_string(),
        }
    }
}

pub fn suggestion_cards() -> Vec<SuggestionCard> {
    vec![
        SuggestionCard {
            title: "Connect your cloud account".to_string(),
            body: "Automated collectors can pull most infrastructure evidence for you."
                .to_string(),
            action_label: "Connect".to_string(),
            action_href: "/settings/integrations".to_string(),
        },
        SuggestionCard {
            title: "Invite your auditor".to_string(),
            body: "Share a read-only view of collected evidence with your audit firm."
                .to_string(),
            action_label: "Invite".to_string(),
            action_href: "/settings/members".to_string(),
        },
        SuggestionCard {
            title: "Review stale policies".to_string(),
            body: "Three policies have not been reviewed in over a year.".to_string(),
            action_label: "Review".to_string(),
            action_href: "/controls/policies".to_string(),
        },
    ]
}

pub fn missing_evidence() -> Vec<MissingEvidenceItem> {
    vec![
        MissingEvidenceItem {
            control_id: "AC-2".to_string(),
            title: "Quarterly access review".to_string(),
            due_hint: "due this week".to_string(),
        },
        MissingEvidenceItem {
            control_id: "CM-3".to_string(),
            title: "Change management log".to_string(),
            due_hint: "due in 2 weeks".to_string(),
        },
        MissingEvidenceItem {
            control_id: "IR-4".to_string(),
            title: "Incident response tabletop".to_string(),
            due_hint: "overdue".to_string(),
        },
        MissingEvidenceItem {
            control_id: "BC-1".to_string(),
            title: "Backup restoration test".to_string(),
            due_hint: "due next month".to_string(),
        },
    ]
}
