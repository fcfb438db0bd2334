//! Outline configuration.

/// The value shown in column 1 of an item whose value is unset.
pub const DEFAULT_EMPTY_VALUE: &str = "-";

/// Configuration for an [`Outline`](crate::Outline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Column-1 text that counts as "no value".
    pub empty_value: String,
    /// Trim whitespace from search text before matching.
    pub trim_search: bool,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            empty_value: DEFAULT_EMPTY_VALUE.to_string(),
            trim_search: true,
        }
    }
}

impl OutlineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the empty-value sentinel.
    pub fn with_empty_value(mut self, empty_value: impl Into<String>) -> Self {
        self.empty_value = empty_value.into();
        self
    }

    /// Set whether search text is trimmed.
    pub fn with_trim_search(mut self, trim_search: bool) -> Self {
        self.trim_search = trim_search;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OutlineConfig::default();
        assert_eq!(config.empty_value, "-");
        assert!(config.trim_search);
    }

    #[test]
    fn test_builder() {
        let config = OutlineConfig::new()
            .with_empty_value("n/a")
            .with_trim_search(false);
        assert_eq!(config.empty_value, "n/a");
        assert!(!config.trim_search);
    }
}
