//! Provide the canonical language vocabulary for the GIDL front end.
//!
//! This crate is intentionally small and dependency-free. It holds the reserved keywords and punctuation of the
//! interface definition language as stable ids plus const metadata tables, so the lexer, parser, formatter and
//! diagnostics agree on one spelling for every vocabulary item.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, and no AST types.

pub mod lang;
