//! Names the controller uses to find its state.
//!
//! Every field has a default matching the conventional page markup, so a
//! config file only needs the keys it overrides:
//!
//! ```yaml
//! storage_key: site-theme
//! dark_icon_class: icon-moon
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::Theme;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
pub const DEFAULT_ICON_ID: &str = "theme-icon";
pub const DEFAULT_DARK_ICON_CLASS: &str = "ti-moon";
pub const DEFAULT_LIGHT_ICON_CLASS: &str = "ti-sun";

/// Errors from loading or validating a [`ThemeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("config field '{field}' must not be empty")]
    Empty { field: &'static str },
}

/// Storage key, attribute name, element ids and icon classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key the explicit preference is persisted under.
    pub storage_key: String,
    /// Attribute set on the root element.
    pub attribute: String,
    /// Id of the toggle control.
    pub toggle_id: String,
    /// Id of the icon element.
    pub icon_id: String,
    pub dark_icon_class: String,
    pub light_icon_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            icon_id: DEFAULT_ICON_ID.to_string(),
            dark_icon_class: DEFAULT_DARK_ICON_CLASS.to_string(),
            light_icon_class: DEFAULT_LIGHT_ICON_CLASS.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        let config: Self = if source.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(source)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// Rejects empty names, which would address nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("attribute", &self.attribute),
            ("toggle_id", &self.toggle_id),
            ("icon_id", &self.icon_id),
            ("dark_icon_class", &self.dark_icon_class),
            ("light_icon_class", &self.light_icon_class),
        ];
        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ConfigError::Empty { field: *field }),
            None => Ok(()),
        }
    }

    /// The icon class shown for `theme`.
    pub fn icon_class(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.dark_icon_class,
            Theme::Light => &self.light_icon_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_names() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.attribute, "data-theme");
        assert_eq!(config.toggle_id, "theme-toggle");
        assert_eq!(config.icon_id, "theme-icon");
    }

    #[test]
    fn test_icon_class_mapping() {
        let config = ThemeConfig::default();
        assert_eq!(config.icon_class(Theme::Dark), "ti-moon");
        assert_eq!(config.icon_class(Theme::Light), "ti-sun");
    }

    #[test]
    fn test_from_yaml_partial_override() {
        let config = ThemeConfig::from_yaml("storage_key: site-theme\n").unwrap();
        assert_eq!(config.storage_key, "site-theme");
        assert_eq!(config.attribute, "data-theme");
    }

    #[test]
    fn test_from_yaml_empty_document() {
        assert_eq!(ThemeConfig::from_yaml("").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        let err = ThemeConfig::from_yaml("colour: blue\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_yaml_rejects_empty_field() {
        let err = ThemeConfig::from_yaml("icon_id: \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Empty { field: "icon_id" }));
        assert!(err.to_string().contains("icon_id"));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dark_icon_class: icon-moon").unwrap();

        let config = ThemeConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.icon_class(Theme::Dark), "icon-moon");
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ThemeConfig::from_yaml_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
