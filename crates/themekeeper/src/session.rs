//! Wiring a controller to a system preference source.
//!
//! A [`Session`] is what a page (or program) holds for its lifetime: an
//! initialized controller shared between the user-action handlers and the
//! system-change listener.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::controller::ThemeController;
use crate::document::Document;
use crate::store::PreferenceStore;
use crate::theme::{SystemPreference, Theme};

/// An initialized controller subscribed to system preference changes.
///
/// The listener is registered unconditionally and forwards every change to
/// [`ThemeController::on_system_preference_change`], which re-checks the
/// store each time. A preference set later in the session therefore takes
/// precedence immediately, and clearing it resumes system tracking.
///
/// With [`start`](Session::start) the listener holds a weak handle: once
/// every `Session` clone is dropped, notifications become no-ops. With
/// [`start_retained`](Session::start_retained) the listener owns a handle and
/// the session lives as long as the preference source.
///
/// # Example
///
/// ```rust
/// use themekeeper::{
///     ManualPreference, MemoryDocument, MemoryStore, Session, Theme, ThemeConfig,
///     ThemeController,
/// };
///
/// let system = ManualPreference::new(Theme::Light);
/// let controller = ThemeController::new(
///     MemoryStore::new(),
///     MemoryDocument::new(),
///     ThemeConfig::default(),
/// );
/// let session = Session::start(controller, &system);
///
/// system.emit(Theme::Dark);
/// assert_eq!(session.display(), Some(Theme::Dark));
///
/// session.toggle();
/// system.emit(Theme::Dark);
/// assert_eq!(session.display(), Some(Theme::Light));
/// ```
pub struct Session<S, D> {
    controller: Rc<RefCell<ThemeController<S, D>>>,
}

impl<S, D> Clone for Session<S, D> {
    fn clone(&self) -> Self {
        Self {
            controller: Rc::clone(&self.controller),
        }
    }
}

impl<S, D> Session<S, D>
where
    S: PreferenceStore + 'static,
    D: Document + 'static,
{
    /// Initializes `controller` from `system` and subscribes to its changes.
    ///
    /// The subscription holds a weak handle; system tracking stops once
    /// every clone of the returned session is dropped.
    pub fn start<P>(controller: ThemeController<S, D>, system: &P) -> Self
    where
        P: SystemPreference + ?Sized,
    {
        let session = Self::initialize(controller, system);
        let handle = Rc::downgrade(&session.controller);
        system.subscribe(Box::new(move |theme| {
            if let Some(controller) = handle.upgrade() {
                controller.borrow_mut().on_system_preference_change(theme);
            }
        }));
        session
    }

    /// Like [`start`](Session::start), but the subscription keeps the
    /// controller alive for as long as `system` delivers changes.
    ///
    /// For page-lifetime sessions, where the caller does not hold on to
    /// the returned handle.
    pub fn start_retained<P>(controller: ThemeController<S, D>, system: &P) -> Self
    where
        P: SystemPreference + ?Sized,
    {
        let session = Self::initialize(controller, system);
        let retained = session.clone();
        system.subscribe(Box::new(move |theme| {
            retained
                .controller
                .borrow_mut()
                .on_system_preference_change(theme);
        }));
        session
    }

    fn initialize<P>(mut controller: ThemeController<S, D>, system: &P) -> Self
    where
        P: SystemPreference + ?Sized,
    {
        controller.initialize(system.current());
        Self {
            controller: Rc::new(RefCell::new(controller)),
        }
    }
}

impl<S: PreferenceStore, D: Document> Session<S, D> {
    /// Handles a user toggle action.
    pub fn toggle(&self) -> Theme {
        self.controller.borrow_mut().toggle()
    }

    pub fn set(&self, theme: Theme) {
        self.controller.borrow_mut().set(theme);
    }

    /// Drops the explicit choice and re-applies the current system value.
    pub fn clear_preference<P>(&self, system: &P) -> Theme
    where
        P: SystemPreference + ?Sized,
    {
        self.controller
            .borrow_mut()
            .clear_preference(system.current())
    }

    pub fn display(&self) -> Option<Theme> {
        self.controller.borrow().display()
    }

    pub fn persisted(&self) -> Option<Theme> {
        self.controller.borrow().persisted()
    }

    /// Borrows the controller for inspection.
    pub fn controller(&self) -> Ref<'_, ThemeController<S, D>> {
        self.controller.borrow()
    }
}
