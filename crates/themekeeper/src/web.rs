//! Browser bindings over `web-sys` (feature `web`).
//!
//! - [`LocalStorage`]: the origin's `localStorage`
//! - [`WebDocument`]: `document.documentElement` and elements by id
//! - [`MediaQueryPreference`]: `(prefers-color-scheme: dark)` and its
//!   `change` events
//! - [`start`]: builds a session for the current page and binds the toggle
//!   control's `click` event
//!
//! Event closures are leaked with `Closure::forget`; they live as long as the
//! page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, MediaQueryList, MediaQueryListEvent, Storage};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::document::Document;
use crate::session::Session;
use crate::store::{MemoryStore, PreferenceStore, StoreError};
use crate::theme::{Listener, SystemPreference, Theme};

/// Media query matching a dark system color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// A session over the live page.
pub type WebSession = Session<Box<dyn PreferenceStore>, WebDocument>;

fn js_error(value: JsValue) -> StoreError {
    StoreError::Unavailable(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// The window's `localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Returns `None` when there is no window or storage is disabled.
    pub fn from_window() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

/// The window's document.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl Document for WebDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        if let Err(e) = root.set_attribute(name, value) {
            tracing::warn!(error = ?e, attribute = name, "failed to set root attribute");
        }
    }

    fn set_element_class(&mut self, id: &str, class: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.set_class_name(class);
                true
            }
            None => false,
        }
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }
}

/// The browser's color-scheme media query.
///
/// Without `matchMedia` support the preference reads as light and never
/// changes.
pub struct MediaQueryPreference {
    list: Option<MediaQueryList>,
}

impl MediaQueryPreference {
    pub fn from_window() -> Self {
        let list = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
        Self { list }
    }
}

impl SystemPreference for MediaQueryPreference {
    fn current(&self) -> Theme {
        Theme::from_dark(self.list.as_ref().is_some_and(MediaQueryList::matches))
    }

    fn subscribe(&self, mut listener: Listener) {
        let Some(list) = &self.list else {
            return;
        };
        let closure = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| listener(Theme::from_dark(event.matches())),
        );
        if let Err(e) =
            list.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?e, "failed to subscribe to color scheme changes");
        }
        closure.forget();
    }
}

/// Starts theme handling for the current page.
///
/// Falls back to an in-memory store when `localStorage` is unavailable, so
/// the toggle still works for the lifetime of the page. Returns `None`
/// outside a browser window.
///
/// The `change` and `click` listeners own the session, so it lives as long
/// as the page whether or not the returned handle is kept.
pub fn start(config: ThemeConfig) -> Option<(WebSession, MediaQueryPreference)> {
    let document = WebDocument::from_window()?;
    let store: Box<dyn PreferenceStore> = match LocalStorage::from_window() {
        Some(storage) => Box::new(storage),
        None => {
            tracing::warn!("localStorage unavailable, theme choice will not persist");
            Box::new(MemoryStore::new())
        }
    };
    let toggle_id = config.toggle_id.clone();
    let system = MediaQueryPreference::from_window();
    let session = Session::start_retained(ThemeController::new(store, document, config), &system);

    let control = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&toggle_id));
    if let Some(control) = control {
        let handle = session.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            handle.toggle();
        });
        if let Err(e) =
            control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?e, "failed to bind theme toggle");
        }
        on_click.forget();
    }

    Some((session, system))
}
