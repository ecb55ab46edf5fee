//! Command execution against a file-backed session.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use themekeeper::{
    FileStore, MemoryDocument, OsPreference, PreferenceStore, Session, SystemPreference, Theme,
    ThemeConfig, ThemeController,
};

/// Where the displayed theme comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Preference,
    System,
}

/// The state printed after each command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub theme: Theme,
    pub source: Source,
    pub system: Theme,
    pub icon: String,
    pub store: PathBuf,
}

/// A session over a [`FileStore`], following the OS color mode.
///
/// The displayed state lives in a [`MemoryDocument`] holding only the icon
/// element; there is no toggle control, the commands stand in for it.
pub struct App {
    session: Session<FileStore, MemoryDocument>,
    system: OsPreference,
}

impl App {
    /// Opens the store and initializes the session.
    ///
    /// Unlike the library, which treats an unreadable store as empty, the
    /// CLI refuses to start on one so the user sees the problem.
    pub fn open(store_path: &Path, config: ThemeConfig, system: OsPreference) -> Result<Self> {
        let store = FileStore::new(store_path);
        store
            .get(&config.storage_key)
            .with_context(|| format!("cannot use preference store {}", store_path.display()))?;

        let page = MemoryDocument::new().with_element(&config.icon_id);
        let controller = ThemeController::new(store, page, config);
        let session = Session::start(controller, &system);
        tracing::debug!(store = %store_path.display(), "session started");
        Ok(Self { session, system })
    }

    pub fn toggle(&self) -> Report {
        self.session.toggle();
        self.report()
    }

    pub fn set(&self, theme: Theme) -> Report {
        self.session.set(theme);
        self.report()
    }

    pub fn reset(&self) -> Report {
        self.session.clear_preference(&self.system);
        self.report()
    }

    /// Checks the OS setting once, returning a report if it changed.
    pub fn poll(&self) -> Option<Report> {
        self.system.poll().map(|_| self.report())
    }

    pub fn report(&self) -> Report {
        let controller = self.session.controller();
        let system = self.system.current();
        let persisted = controller.persisted();
        let theme = controller.display().unwrap_or(system);
        Report {
            theme,
            source: if persisted.is_some() {
                Source::Preference
            } else {
                Source::System
            },
            system,
            icon: controller.config().icon_class(theme).to_string(),
            store: controller.store().path().to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn fixed(theme: Theme) -> OsPreference {
        OsPreference::with_detector(Box::new(move || theme))
    }

    fn open(dir: &TempDir, system: OsPreference) -> App {
        App::open(&dir.path().join("prefs.json"), ThemeConfig::default(), system).unwrap()
    }

    #[test]
    fn test_show_follows_system() {
        let dir = TempDir::new().unwrap();
        let report = open(&dir, fixed(Theme::Dark)).report();
        assert_eq!(report.theme, Theme::Dark);
        assert_eq!(report.source, Source::System);
        assert_eq!(report.icon, "ti-moon");
    }

    #[test]
    fn test_toggle_persists_across_runs() {
        let dir = TempDir::new().unwrap();
        let report = open(&dir, fixed(Theme::Dark)).toggle();
        assert_eq!(report.theme, Theme::Light);
        assert_eq!(report.source, Source::Preference);

        let report = open(&dir, fixed(Theme::Dark)).report();
        assert_eq!(report.theme, Theme::Light);
        assert_eq!(report.source, Source::Preference);
    }

    #[test]
    fn test_set_and_reset() {
        let dir = TempDir::new().unwrap();
        let app = open(&dir, fixed(Theme::Light));

        assert_eq!(app.set(Theme::Dark).theme, Theme::Dark);
        let report = app.reset();
        assert_eq!(report.theme, Theme::Light);
        assert_eq!(report.source, Source::System);
    }

    #[test]
    fn test_poll_reports_system_changes() {
        let dir = TempDir::new().unwrap();
        let mode = Rc::new(Cell::new(Theme::Light));
        let source = Rc::clone(&mode);
        let app = open(&dir, OsPreference::with_detector(Box::new(move || source.get())));

        assert_eq!(app.poll(), None);
        mode.set(Theme::Dark);
        let report = app.poll().unwrap();
        assert_eq!(report.theme, Theme::Dark);
        assert_eq!(report.system, Theme::Dark);
    }

    #[test]
    fn test_poll_keeps_explicit_choice() {
        let dir = TempDir::new().unwrap();
        let mode = Rc::new(Cell::new(Theme::Light));
        let source = Rc::clone(&mode);
        let app = open(&dir, OsPreference::with_detector(Box::new(move || source.get())));
        app.set(Theme::Light);

        mode.set(Theme::Dark);
        let report = app.poll().unwrap();
        assert_eq!(report.theme, Theme::Light);
        assert_eq!(report.system, Theme::Dark);
        assert_eq!(report.source, Source::Preference);
    }

    #[test]
    fn test_open_rejects_corrupt_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let err = App::open(&path, ThemeConfig::default(), fixed(Theme::Light))
            .err()
            .unwrap();
        assert!(err.to_string().contains("prefs.json"));
    }
}
