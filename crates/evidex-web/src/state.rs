//! Application state.

use std::sync::Arc;

use evidex_core::files::StoredFile;
use evidex_core::layout::ChromeOptions;

use crate::auth::AuthProvider;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthProvider>,
    pub chrome: ChromeOptions,
    /// Pass-through stored-file descriptors handed to every render context.
    pub files: Arc<Vec<StoredFile>>,
}

impl AppState {
    pub fn new(auth: Arc<dyn AuthProvider>, chrome: ChromeOptions, files: Vec<StoredFile>) -> Self {
        Self {
            auth,
            chrome,
            files: Arc::new(files),
        }
    }
}
