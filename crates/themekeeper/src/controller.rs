//! The theme controller.
//!
//! [`ThemeController`] owns a [`PreferenceStore`] and a [`Document`] and
//! keeps three pieces of state consistent:
//!
//! - **Persisted preference**: the user's explicit choice, if any, stored
//!   under [`ThemeConfig::storage_key`]
//! - **Display state**: the theme on the document's root attribute
//! - **Icon**: the icon element's class, always derived from the display state
//!
//! The displayed theme is the persisted preference when one exists, and the
//! system preference otherwise. System changes never overwrite a persisted
//! preference.
//!
//! # Failure handling
//!
//! No operation fails. Store errors are logged and degrade: an unreadable
//! store counts as "no preference", and an unwritable one still lets the
//! display change. Missing icon or toggle elements are skipped.
//!
//! # Example
//!
//! ```rust
//! use themekeeper::{MemoryDocument, MemoryStore, Theme, ThemeConfig, ThemeController};
//!
//! let doc = MemoryDocument::new().with_element("theme-icon");
//! let mut controller = ThemeController::new(MemoryStore::new(), doc, ThemeConfig::default());
//!
//! // Nothing persisted: follow the system
//! assert_eq!(controller.initialize(Theme::Dark), Theme::Dark);
//! assert_eq!(controller.document().element_class("theme-icon"), Some("ti-moon"));
//!
//! // A toggle is an explicit choice and is persisted
//! assert_eq!(controller.toggle(), Theme::Light);
//! assert_eq!(controller.persisted(), Some(Theme::Light));
//! ```

use crate::config::ThemeConfig;
use crate::document::Document;
use crate::store::PreferenceStore;
use crate::theme::Theme;

/// Applies, toggles and persists the theme for one document.
#[derive(Debug)]
pub struct ThemeController<S, D> {
    store: S,
    document: D,
    config: ThemeConfig,
}

impl<S: PreferenceStore, D: Document> ThemeController<S, D> {
    pub fn new(store: S, document: D, config: ThemeConfig) -> Self {
        Self {
            store,
            document,
            config,
        }
    }

    /// Applies the persisted preference, or `system` when there is none.
    ///
    /// The system value is displayed but not persisted. Returns the theme
    /// that was applied.
    pub fn initialize(&mut self, system: Theme) -> Theme {
        let persisted = self.persisted();
        let theme = persisted.unwrap_or(system);
        tracing::debug!(%theme, explicit = persisted.is_some(), "initializing theme");
        self.apply(theme);
        theme
    }

    /// Flips the displayed theme and persists the result.
    ///
    /// The current theme is read back from the root attribute; anything
    /// other than `"dark"` (including no attribute) counts as light, so the
    /// first toggle on an untouched document switches to dark.
    pub fn toggle(&mut self) -> Theme {
        let current = match self.display() {
            Some(Theme::Dark) => Theme::Dark,
            _ => Theme::Light,
        };
        let next = current.toggled();
        self.apply(next);
        self.persist(next);
        next
    }

    /// Handles a system color-scheme change.
    ///
    /// Applies `theme` only while no preference is persisted, checking the
    /// store on every call. Returns whether the display was updated.
    pub fn on_system_preference_change(&mut self, theme: Theme) -> bool {
        if let Some(explicit) = self.persisted() {
            tracing::debug!(system = %theme, %explicit, "ignoring system change, preference is set");
            return false;
        }
        self.apply(theme);
        true
    }

    /// Applies and persists an explicit choice.
    pub fn set(&mut self, theme: Theme) {
        self.apply(theme);
        self.persist(theme);
    }

    /// Forgets the explicit choice and falls back to `system`.
    ///
    /// Subsequent system changes are followed again.
    pub fn clear_preference(&mut self, system: Theme) -> Theme {
        if let Err(e) = self.store.remove(&self.config.storage_key) {
            tracing::warn!(error = %e, "failed to clear theme preference");
        }
        self.apply(system);
        system
    }

    /// The theme currently on the root attribute, if it is a valid one.
    pub fn display(&self) -> Option<Theme> {
        self.document
            .root_attribute(&self.config.attribute)
            .and_then(|value| value.parse().ok())
    }

    /// The explicit preference in the store.
    ///
    /// Unreadable stores and unrecognised values read as `None`.
    pub fn persisted(&self) -> Option<Theme> {
        let raw = match self.store.get(&self.config.storage_key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme preference");
                return None;
            }
        };
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored theme preference");
                None
            }
        }
    }

    /// Whether the document has a toggle control to bind.
    pub fn has_toggle_control(&self) -> bool {
        self.document.has_element(&self.config.toggle_id)
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Splits the controller back into its store and document.
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.document)
    }

    fn apply(&mut self, theme: Theme) {
        self.document
            .set_root_attribute(&self.config.attribute, theme.as_str());
        let class = self.config.icon_class(theme);
        if !self.document.set_element_class(&self.config.icon_id, class) {
            tracing::trace!(id = %self.config.icon_id, "no icon element, skipping");
        }
        tracing::debug!(%theme, "applied theme");
    }

    fn persist(&mut self, theme: Theme) {
        match self.store.set(&self.config.storage_key, theme.as_str()) {
            Ok(()) => tracing::debug!(%theme, "persisted theme preference"),
            Err(e) => tracing::warn!(error = %e, "failed to persist theme preference"),
        }
    }
}
