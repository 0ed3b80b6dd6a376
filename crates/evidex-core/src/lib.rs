//! Evidex Core Library
//!
//! Presentational domain logic for the Evidex dashboard shell: embedded-mode
//! detection, layout selection, chrome visibility, and the static panel data
//! the web layer renders.

pub mod context;
pub mod embed;
pub mod error;
pub mod files;
pub mod greeting;
pub mod layout;
pub mod nav;
pub mod panels;

pub use context::{RenderContext, UserHandle};
pub use error::{EvidexError, EvidexResult};
