//! # Themekeeper - light/dark theme switching
//!
//! Themekeeper keeps a document's displayed theme consistent with two
//! sources: the user's explicit choice, persisted in a key-value store, and
//! the environment's color-scheme preference, used whenever no explicit
//! choice exists.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: `Light` or `Dark`, stored and displayed as `"light"` / `"dark"`
//! - [`ThemeController`]: initializes, toggles and persists the theme
//! - [`Session`]: an initialized controller subscribed to system changes
//! - [`PreferenceStore`], [`Document`], [`SystemPreference`]: the seams the
//!   controller is built over, with in-memory, file and OS implementations
//!   here and browser implementations in `web` (feature `web`)
//! - [`ThemeConfig`]: storage key, attribute name, element ids, icon classes
//!
//! ## Quick Start
//!
//! ```rust
//! use themekeeper::{
//!     ManualPreference, MemoryDocument, MemoryStore, Session, Theme, ThemeConfig,
//!     ThemeController,
//! };
//!
//! let system = ManualPreference::new(Theme::Dark);
//! let page = MemoryDocument::new()
//!     .with_element("theme-toggle")
//!     .with_element("theme-icon");
//! let controller = ThemeController::new(MemoryStore::new(), page, ThemeConfig::default());
//!
//! let session = Session::start(controller, &system);
//! assert_eq!(session.display(), Some(Theme::Dark));
//!
//! // The user clicks the toggle
//! session.toggle();
//! assert_eq!(session.display(), Some(Theme::Light));
//! assert_eq!(session.persisted(), Some(Theme::Light));
//! assert_eq!(
//!     session.controller().document().element_class("theme-icon"),
//!     Some("ti-sun")
//! );
//! ```
//!
//! ## Logging
//!
//! Operations emit `tracing` events: `debug` when a theme is applied or
//! persisted, `warn` when the store fails. Install a subscriber to see them.

mod config;
mod controller;
mod document;
mod session;
mod store;
mod theme;
#[cfg(feature = "web")]
pub mod web;

pub use config::{
    ConfigError, ThemeConfig, DEFAULT_ATTRIBUTE, DEFAULT_DARK_ICON_CLASS, DEFAULT_ICON_ID,
    DEFAULT_LIGHT_ICON_CLASS, DEFAULT_STORAGE_KEY, DEFAULT_TOGGLE_ID,
};
pub use controller::ThemeController;
pub use document::{Document, MemoryDocument};
pub use session::Session;
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
#[cfg(not(target_arch = "wasm32"))]
pub use theme::{OsPreference, ThemeDetector};
pub use theme::{Listener, ManualPreference, ParseThemeError, SystemPreference, Theme};
