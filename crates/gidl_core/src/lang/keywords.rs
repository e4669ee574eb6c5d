//! Define the reserved keyword vocabulary for the GIDL language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories, provenance, and a short description.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Module` and `MODULE` are identifiers.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//! - Type names such as `int` or `void` are **not** keywords; types stay opaque identifiers until a
//!   later semantic pass resolves them.
//!
//! ## Examples
//! ```rust
//! use gidl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("readonly"), Some(KeywordId::Readonly));
//! assert_eq!(keywords::from_str("Readonly"), None);
//! assert_eq!(keywords::as_str(KeywordId::Interface), "interface");
//! ```

use super::registry::{Since, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Module,
    Interface,

    // Attribute visibility modifiers
    Readonly,
    Writeonly,
    Readwrite,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Opens a declaration block (`module`, `interface`).
    Declaration,
    /// Prefixes an attribute declaration (`readonly`, ...).
    Modifier,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and emission.
/// - `aliases` are additional spellings accepted by the lexer (none today).
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(
        KeywordId::Module,
        "module",
        KeywordCategory::Declaration,
        "Declares a named module containing interfaces.",
    ),
    info(
        KeywordId::Interface,
        "interface",
        KeywordCategory::Declaration,
        "Declares an interface with attributes and methods.",
    ),
    info(
        KeywordId::Readonly,
        "readonly",
        KeywordCategory::Modifier,
        "Marks an attribute as readable only.",
    ),
    info(
        KeywordId::Writeonly,
        "writeonly",
        KeywordCategory::Modifier,
        "Marks an attribute as writable only.",
    ),
    info(
        KeywordId::Readwrite,
        "readwrite",
        KeywordCategory::Modifier,
        "Marks an attribute as readable and writable (the default).",
    ),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved, `None` for ordinary identifiers.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases: &[],
        category,
        description,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("module"), Some(KeywordId::Module));
        assert_eq!(from_str("Module"), None);
        assert_eq!(from_str("INTERFACE"), None);
    }

    #[test]
    fn test_type_names_are_not_reserved() {
        for name in ["int", "string", "void", "attribute", "boolean"] {
            assert_eq!(from_str(name), None, "{name} should be an identifier");
        }
    }

    #[test]
    fn test_modifier_category() {
        assert_eq!(category(KeywordId::Readonly), KeywordCategory::Modifier);
        assert_eq!(category(KeywordId::Module), KeywordCategory::Declaration);
    }
}
