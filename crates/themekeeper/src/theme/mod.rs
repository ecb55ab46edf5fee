//! Theme values and the system preference they can follow.
//!
//! This module provides:
//!
//! - [`Theme`]: the light/dark enum that is persisted and displayed
//! - [`SystemPreference`]: the environment's color-scheme signal
//! - [`ManualPreference`]: a hand-driven source for tests and embedders
//! - [`OsPreference`]: the operating system's mode, polled on demand

mod error;
mod system;
#[allow(clippy::module_inception)]
mod theme;

pub use error::ParseThemeError;
#[cfg(not(target_arch = "wasm32"))]
pub use system::{OsPreference, ThemeDetector};
pub use system::{Listener, ManualPreference, SystemPreference};
pub use theme::Theme;
