//! Formatting configuration for GIDL sources.

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Number of blank lines between modules and between interfaces
    pub blank_lines_between_decls: usize,
    /// Print `readwrite` on attributes that use the default visibility
    pub explicit_readwrite: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            blank_lines_between_decls: 1,
            explicit_readwrite: false,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the number of blank lines between block declarations
    pub fn with_blank_lines_between_decls(mut self, count: usize) -> Self {
        self.blank_lines_between_decls = count;
        self
    }

    pub fn with_explicit_readwrite(mut self, explicit: bool) -> Self {
        self.explicit_readwrite = explicit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.blank_lines_between_decls, 1);
        assert!(!config.explicit_readwrite);
        assert_eq!(FormatConfig::new(), config);
    }

    #[test]
    fn test_builder_chain() {
        let config = FormatConfig::new()
            .with_indent_width(2)
            .with_blank_lines_between_decls(0)
            .with_explicit_readwrite(true);

        assert_eq!(config.indent_width, 2);
        assert_eq!(config.blank_lines_between_decls, 0);
        assert!(config.explicit_readwrite);
    }

    #[test]
    fn test_builder_override() {
        let config = FormatConfig::new().with_indent_width(2).with_indent_width(8);
        assert_eq!(config.indent_width, 8); // Last value wins
    }
}
