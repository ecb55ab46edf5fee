//! Theme parsing errors.

/// Error returned when a string is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    pub value: String,
}

impl std::fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid theme '{}': expected 'light' or 'dark'",
            self.value
        )
    }
}

impl std::error::Error for ParseThemeError {}
