//! Syntax core for the GIDL interface definition language: lexer, parser, declaration model,
//! diagnostics.
//!
//! This crate performs no file-system access; it turns an in-memory source buffer into an ordered
//! `Vec<Module>` or a single structured error.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does not resolve type references or check overloads.
//! - Vocabulary identity (keywords/punctuation) comes from `gidl_core::lang` registries.
//! - Every parse builds its own lexer, token stream and model, so independent sources can be parsed
//!   concurrently without synchronization.
//!
//! ## Examples
//! ```rust
//! use gidl_syntax::ast::Visibility;
//! use gidl_syntax::parser;
//!
//! let modules = parser::parse_source("module M { interface I { readonly int count; } }").unwrap();
//! let attr = &modules[0].interfaces()[0].attributes()[0];
//! assert_eq!(attr.visibility(), Visibility::Readable);
//! ```
//!
//! ## See also
//! - `gidl_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
