//! Typed client for the bizdocs REST backend.
//!
//! Every document kind lives under `/api/<resource>` (see
//! [`bizdocs_core::document::DocumentKind::resource`]). Company settings
//! live under `/api/settings` and are cached by [`SettingsCache`].
//!
//! The backend is trusted: summary snapshots are sent as computed and are
//! not re-validated on the way back.

pub mod client;
pub mod error;
pub mod settings_cache;
pub mod types;

pub use client::BackendClient;
pub use error::ClientError;
pub use settings_cache::SettingsCache;
pub use types::{Customer, SavedDocument};
