//! GIDL source formatter
//!
//! Renders a parsed declaration model as canonical source text:
//! - 4-space indentation
//! - one declaration per line, each annotation on its own line above its declaration
//! - one blank line between modules and between interfaces
//! - empty modules and interfaces collapsed to `{}`
//!
//! Re-parsing formatted output yields the same names, order, visibility, method signatures and
//! annotation values, and formatting formatted output is a no-op.

mod config;
mod formatter;
mod writer;

pub use config::FormatConfig;
pub use formatter::Formatter;

use gidl_syntax::ast::Module;
use gidl_syntax::diagnostics::SyntaxError;
use gidl_syntax::parser;

/// Format an already parsed model.
pub fn format_modules(modules: &[Module], config: FormatConfig) -> String {
    Formatter::new(config).format(modules)
}

/// Format GIDL source code with default settings
pub fn format_source(source: &str) -> Result<String, SyntaxError> {
    format_source_with_config(source, FormatConfig::default())
}

/// Format GIDL source code with custom configuration
pub fn format_source_with_config(source: &str, config: FormatConfig) -> Result<String, SyntaxError> {
    let modules = parser::parse_source(source)?;
    Ok(format_modules(&modules, config))
}

/// Check if source code is already formatted
pub fn check_formatted(source: &str) -> Result<bool, SyntaxError> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}

/// Get the diff between original and formatted source, or `None` if nothing would change.
pub fn format_diff(source: &str) -> Result<Option<String>, SyntaxError> {
    let formatted = format_source(source)?;
    if source == formatted {
        return Ok(None);
    }
    Ok(Some(line_diff(source, &formatted)))
}

/// Simple line-by-line diff
fn line_diff(original: &str, formatted: &str) -> String {
    let original_lines: Vec<&str> = original.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();
    let max_lines = original_lines.len().max(formatted_lines.len());

    let mut diff = String::new();
    for i in 0..max_lines {
        let orig = original_lines.get(i).copied().unwrap_or("");
        let fmt = formatted_lines.get(i).copied().unwrap_or("");
        if orig == fmt {
            continue;
        }
        if !orig.is_empty() {
            diff.push_str(&format!("-{:4} | {}\n", i + 1, orig));
        }
        if !fmt.is_empty() {
            diff.push_str(&format!("+{:4} | {}\n", i + 1, fmt));
        }
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "\
module M {
    interface I {
        readonly int count;
    }
}
";

    #[test]
    fn test_format_source_invalid_syntax() {
        assert!(matches!(format_source("module M {"), Err(SyntaxError::Parse(_))));
        assert!(matches!(format_source("module M { $ }"), Err(SyntaxError::Lex(_))));
    }

    #[test]
    fn test_format_source_empty() {
        assert_eq!(format_source("").unwrap(), "");
    }

    #[test]
    fn test_check_formatted() {
        assert!(check_formatted(CANONICAL).unwrap());
        assert!(!check_formatted("module M { interface I { readonly int count; } }").unwrap());
    }

    #[test]
    fn test_format_diff_no_changes() {
        assert_eq!(format_diff(CANONICAL).unwrap(), None);
    }

    #[test]
    fn test_format_diff_returns_changed_lines() {
        let source = "module M {\n  interface I {\n        readonly int count;\n    }\n}\n";
        let diff = format_diff(source).unwrap().unwrap();
        assert_eq!(diff, "-   2 |   interface I {\n+   2 |     interface I {\n");
    }

    #[test]
    fn test_format_source_with_config() {
        let out = format_source_with_config(CANONICAL, FormatConfig::new().with_indent_width(2)).unwrap();
        assert_eq!(out, "module M {\n  interface I {\n    readonly int count;\n  }\n}\n");
    }
}
