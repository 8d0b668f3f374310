//! Loader configuration.

/// Line separating the symbol table from the directive section.
pub const DEFAULT_SEPARATOR: &str = "%%";

/// Configuration for [`load_symbols`](super::load_symbols).
///
/// # Examples
///
/// ```
/// use u_logigrid::symbols::LoadConfig;
///
/// let config = LoadConfig::default().with_reject_duplicates(true);
/// assert_eq!(config.separator, "%%");
/// assert!(config.reject_duplicates);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadConfig {
    /// Line that ends the symbol table.
    pub separator: String,

    /// Fail on a token that appears more than once anywhere in the table.
    ///
    /// Off by default: with duplicates, directive tokens resolve to the
    /// first occurrence.
    pub reject_duplicates: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            reject_duplicates: false,
        }
    }
}

impl LoadConfig {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_reject_duplicates(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoadConfig::default();
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
        assert!(!config.reject_duplicates);
    }

    #[test]
    fn test_builder() {
        let config = LoadConfig::default().with_separator("--");
        assert_eq!(config.separator, "--");
    }
}
