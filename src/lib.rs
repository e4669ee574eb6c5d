#![forbid(unsafe_code)]
//! GIDL interface definition language toolchain
//!
//! The syntax core (lexer, parser, declaration model) lives in `gidl_syntax`; this crate is the
//! driver around it: file loading, parallel checking, diagnostic rendering, model dumps, and the
//! canonical formatter.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod format;
pub mod version;

pub use gidl_syntax::ast;
pub use gidl_syntax::diagnostics;
pub use gidl_syntax::lexer;
pub use gidl_syntax::parser;

pub use format::{FormatConfig, check_formatted, format_diff, format_modules, format_source, format_source_with_config};
