//! Parser for the GIDL interface definition language
//!
//! Converts a token stream into the declaration model (`Vec<Module>`), following the grammar:
//!
//! ```text
//! Program       := (Annotation* ModuleDecl)*
//! ModuleDecl    := 'module' Identifier '{' InterfaceDecl* '}'
//! InterfaceDecl := Annotation* 'interface' Identifier '{' Member* '}'
//! Member        := AttributeDecl | MethodDecl
//! AttributeDecl := Annotation* Visibility? Type Identifier ';'
//! MethodDecl    := Annotation* Type Identifier '(' ParamList? ')' ';'
//! ParamList     := Param (',' Param)*
//! Param         := Type Identifier
//! Annotation    := '@' Identifier ('(' Literal ')')?
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use gidl_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("module M { interface I { readonly int count; } }").unwrap();
//! let modules = parser::parse(&tokens).unwrap();
//! assert_eq!(modules[0].interfaces()[0].attributes()[0].name(), "count");
//! ```

use std::collections::HashMap;

use crate::ast::*;
use crate::diagnostics::{ParseError, ParseErrorKind, SyntaxError};
use crate::lexer::{self, Token, TokenKind};
use gidl_core::lang::keywords::{self, KeywordId};
use gidl_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/members.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
