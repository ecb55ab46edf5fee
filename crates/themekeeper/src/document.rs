//! The document the theme is displayed on.
//!
//! The controller touches three things: an attribute on the root element,
//! the class of an icon element, and the existence of a toggle control.
//! Elements are looked up by id and may be missing; a missing element makes
//! the corresponding operation a no-op.

use std::collections::{HashMap, HashSet};

/// Root attribute and element access needed by the controller.
pub trait Document {
    /// Reads an attribute of the root element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Sets an attribute on the root element.
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Replaces the class of the element with `id`.
    ///
    /// Returns `false` when no such element exists.
    fn set_element_class(&mut self, id: &str, class: &str) -> bool;

    fn has_element(&self, id: &str) -> bool;
}

/// An in-memory [`Document`].
///
/// Holds the root element's attributes and a set of elements by id, each
/// with a single class string.
///
/// # Example
///
/// ```rust
/// use themekeeper::{Document, MemoryDocument};
///
/// let mut doc = MemoryDocument::new().with_element("theme-icon");
/// assert!(doc.set_element_class("theme-icon", "ti-moon"));
/// assert!(!doc.set_element_class("missing", "ti-moon"));
/// assert_eq!(doc.element_class("theme-icon"), Some("ti-moon"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    root: HashMap<String, String>,
    elements: HashMap<String, String>,
}

impl MemoryDocument {
    /// Creates a document with a bare root element and no other elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element with an empty class, returning the document for chaining.
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.entry(id.to_string()).or_default();
        self
    }

    /// Returns the class of an element, or `None` if it does not exist.
    pub fn element_class(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    /// Ids of all elements in the document.
    pub fn element_ids(&self) -> HashSet<&str> {
        self.elements.keys().map(String::as_str).collect()
    }
}

impl Document for MemoryDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.get(name).cloned()
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root.insert(name.to_string(), value.to_string());
    }

    fn set_element_class(&mut self, id: &str, class: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(existing) => {
                *existing = class.to_string();
                true
            }
            None => false,
        }
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}
