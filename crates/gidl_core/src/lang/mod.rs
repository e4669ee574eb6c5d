//! GIDL language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer/parser/formatter.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   formatting).
//!
//! ## Examples
//! ```rust
//! use gidl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("interface"), Some(KeywordId::Interface));
//! assert_eq!(keywords::as_str(KeywordId::Module), "module");
//! ```

pub mod keywords;
pub mod punctuation;
pub mod registry;
