//! System color-scheme preference sources.
//!
//! A [`SystemPreference`] is the environment's "prefers dark" signal: a
//! current value plus a stream of changes. Sources are injected into the
//! session rather than read from a process-wide detector, so tests drive
//! them with [`ManualPreference`] and native programs use [`OsPreference`].

use std::cell::{Cell, RefCell};

use super::theme::Theme;

/// Callback invoked with the new system theme on every change.
pub type Listener = Box<dyn FnMut(Theme)>;

/// The environment's color-scheme preference.
///
/// Implementations are single-threaded: subscription takes `&self` and
/// keeps listeners behind interior mutability for the lifetime of the
/// source.
pub trait SystemPreference {
    /// The preference right now.
    fn current(&self) -> Theme;

    /// Registers a listener for subsequent changes.
    fn subscribe(&self, listener: Listener);
}

/// Listener list shared by the in-process sources.
#[derive(Default)]
struct Subscribers {
    listeners: RefCell<Vec<Listener>>,
}

impl Subscribers {
    fn push(&self, listener: Listener) {
        self.listeners.borrow_mut().push(listener);
    }

    fn notify(&self, theme: Theme) {
        // Listeners may subscribe while being notified; take the list out so
        // the borrow is released during the calls.
        let mut current = std::mem::take(&mut *self.listeners.borrow_mut());
        for listener in current.iter_mut() {
            listener(theme);
        }
        let mut slot = self.listeners.borrow_mut();
        current.append(&mut slot);
        *slot = current;
    }

    fn len(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// A system preference driven by hand.
///
/// Used in tests to simulate change events deterministically, and by
/// embedders that already receive color-scheme notifications some other way.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use themekeeper::{ManualPreference, SystemPreference, Theme};
///
/// let system = ManualPreference::new(Theme::Light);
/// let seen = Rc::new(Cell::new(None));
/// let sink = Rc::clone(&seen);
/// system.subscribe(Box::new(move |theme| sink.set(Some(theme))));
///
/// system.emit(Theme::Dark);
/// assert_eq!(seen.get(), Some(Theme::Dark));
/// assert_eq!(system.current(), Theme::Dark);
/// ```
pub struct ManualPreference {
    current: Cell<Theme>,
    subscribers: Subscribers,
}

impl ManualPreference {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: Cell::new(initial),
            subscribers: Subscribers::default(),
        }
    }

    /// Sets the current value and notifies every listener.
    ///
    /// Listeners are notified even if the value did not change, matching
    /// environments that re-announce the same scheme.
    pub fn emit(&self, theme: Theme) {
        self.current.set(theme);
        self.subscribers.notify(theme);
    }

    pub fn listener_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl SystemPreference for ManualPreference {
    fn current(&self) -> Theme {
        self.current.get()
    }

    fn subscribe(&self, listener: Listener) {
        self.subscribers.push(listener);
    }
}

impl std::fmt::Debug for ManualPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualPreference")
            .field("current", &self.current.get())
            .field("listeners", &self.subscribers.len())
            .finish()
    }
}

/// Detector used by [`OsPreference`] to read the operating system's mode.
#[cfg(not(target_arch = "wasm32"))]
pub type ThemeDetector = Box<dyn Fn() -> Theme>;

/// The operating system's light/dark setting.
///
/// The OS offers no push notification here, so changes are discovered by
/// calling [`poll`](OsPreference::poll); subscribers hear about a change
/// only when the detected value differs from the last one seen.
#[cfg(not(target_arch = "wasm32"))]
pub struct OsPreference {
    detector: ThemeDetector,
    last: Cell<Theme>,
    subscribers: Subscribers,
}

#[cfg(not(target_arch = "wasm32"))]
impl OsPreference {
    /// Creates a source backed by the OS color mode.
    pub fn new() -> Self {
        Self::with_detector(Box::new(os_theme_detector))
    }

    /// Creates a source that reads the mode from `detector` instead of the OS.
    ///
    /// The detector is called once here for the initial value and again on
    /// every [`poll`](OsPreference::poll).
    pub fn with_detector(detector: ThemeDetector) -> Self {
        let last = Cell::new(detector());
        Self {
            detector,
            last,
            subscribers: Subscribers::default(),
        }
    }

    /// Re-reads the OS setting, notifying subscribers if it changed.
    ///
    /// Returns the new theme when a change was observed.
    pub fn poll(&self) -> Option<Theme> {
        let detected = (self.detector)();
        if detected == self.last.get() {
            return None;
        }
        tracing::debug!(theme = %detected, "system color scheme changed");
        self.last.set(detected);
        self.subscribers.notify(detected);
        Some(detected)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for OsPreference {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemPreference for OsPreference {
    fn current(&self) -> Theme {
        self.last.get()
    }

    fn subscribe(&self, listener: Listener) {
        self.subscribers.push(listener);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn os_theme_detector() -> Theme {
    use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

    match detect_os_theme() {
        OsThemeMode::Dark => Theme::Dark,
        OsThemeMode::Light => Theme::Light,
    }
}
