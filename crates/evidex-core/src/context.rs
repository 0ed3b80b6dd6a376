//! Per-request render context.
//!
//! One record carries everything the templates need: the embed flag
//! (computed once at extraction, immutable afterwards), the opaque auth
//! presence, the configured chrome options, and the pass-through stored-file
//! list. Threaded explicitly down the composition chain; there is no ambient
//! lookup anywhere in the tree.

use serde::{Deserialize, Serialize};

use crate::files::StoredFile;
use crate::layout::{ChromeOptions, ChromeVisibility, LayoutChoice};

/// Opaque handle to a signed-in user. Presence is the only signal the
/// layout selector consumes; the display name is cosmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHandle {
    pub display_name: Option<String>,
}

/// Immutable inputs for one render of the UI tree.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub embedded: bool,
    pub user: Option<UserHandle>,
    pub chrome: ChromeOptions,
    pub files: Vec<StoredFile>,
}

impl RenderContext {
    pub fn new(embedded: bool, user: Option<UserHandle>, chrome: ChromeOptions) -> Self {
        Self {
            embedded,
            user,
            chrome,
            files: Vec::new(),
        }
    }

    /// Attach stored-file descriptors unchanged.
    pub fn with_files(mut self, files: Vec<StoredFile>) -> Self {
        self.files = files;
        self
    }

    /// Shell selected for this render.
    pub fn layout(&self) -> LayoutChoice {
        LayoutChoice::select(self.user.is_some())
    }

    /// Chrome visibility for this render of the minimal shell.
    pub fn chrome_visibility(&self) -> ChromeVisibility {
        ChromeVisibility::resolve(self.chrome, self.embedded)
    }
}
