//! Structured syntax errors for GIDL.
//!
//! There are exactly two error kinds:
//! - [`LexError`]: a character sequence the scanner does not recognize.
//! - [`ParseError`]: a token sequence that does not match the grammar at the parser's position
//!   (including duplicate names, dangling annotations and trailing input).
//!
//! Both are fatal to the current parse and carry a [`Span`] with byte offsets plus line/column.
//! They implement [`miette::Diagnostic`] so a driver can render compiler-style reports by attaching
//! the source text (`miette::Report::new(err).with_source_code(..)`).

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

// ============================================================================
// Lex errors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    UnexpectedCharacter,
    UnterminatedString,
    InvalidEscape,
    UnterminatedComment,
    MalformedNumber,
}

impl LexErrorKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedCharacter => "gidl::lex::unexpected_character",
            LexErrorKind::UnterminatedString => "gidl::lex::unterminated_string",
            LexErrorKind::InvalidEscape => "gidl::lex::invalid_escape",
            LexErrorKind::UnterminatedComment => "gidl::lex::unterminated_comment",
            LexErrorKind::MalformedNumber => "gidl::lex::malformed_number",
        }
    }

    fn help(self) -> Option<&'static str> {
        match self {
            LexErrorKind::UnexpectedCharacter => {
                Some("identifiers are ASCII letters, digits and '_'; punctuation is one of { } ( ) , ; @")
            }
            LexErrorKind::UnterminatedString => Some("close the string with '\"' before the end of the line"),
            LexErrorKind::InvalidEscape => Some("supported escapes are \\\" \\\\ \\n \\t \\r and \\0"),
            LexErrorKind::UnterminatedComment => Some("close the block comment with '*/'"),
            LexErrorKind::MalformedNumber => Some("a '-' sign must be followed by a digit"),
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LexErrorKind::UnexpectedCharacter => "unexpected character",
            LexErrorKind::UnterminatedString => "unterminated string literal",
            LexErrorKind::InvalidEscape => "invalid escape sequence",
            LexErrorKind::UnterminatedComment => "unterminated block comment",
            LexErrorKind::MalformedNumber => "malformed number",
        })
    }
}

/// An unrecognized character sequence, with the offending text and its position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} '{text}'")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub text: String,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl Diagnostic for LexError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind.help().map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

// ============================================================================
// Parse errors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The current token does not fit the production being parsed.
    UnexpectedToken,
    /// Tokens remain after the last top-level declaration that cannot start another one.
    TrailingInput,
    /// Annotations followed by the end of a block or the end of input.
    DanglingAnnotation,
    DuplicateModule,
    DuplicateInterface,
    DuplicateAttribute,
    /// A visibility modifier in front of a method declaration.
    VisibilityOnMethod,
}

impl ParseErrorKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedToken => "gidl::parse::unexpected_token",
            ParseErrorKind::TrailingInput => "gidl::parse::trailing_input",
            ParseErrorKind::DanglingAnnotation => "gidl::parse::dangling_annotation",
            ParseErrorKind::DuplicateModule => "gidl::parse::duplicate_module",
            ParseErrorKind::DuplicateInterface => "gidl::parse::duplicate_interface",
            ParseErrorKind::DuplicateAttribute => "gidl::parse::duplicate_attribute",
            ParseErrorKind::VisibilityOnMethod => "gidl::parse::visibility_on_method",
        }
    }

    fn help(self) -> Option<&'static str> {
        match self {
            ParseErrorKind::UnexpectedToken => None,
            ParseErrorKind::TrailingInput => Some("only 'module' declarations may appear at the top level"),
            ParseErrorKind::DanglingAnnotation => Some("annotations must be followed by the declaration they decorate"),
            ParseErrorKind::DuplicateModule => Some("module names must be unique across the whole input"),
            ParseErrorKind::DuplicateInterface => Some("interface names must be unique within their module"),
            ParseErrorKind::DuplicateAttribute => Some("attribute names must be unique within their interface"),
            ParseErrorKind::VisibilityOnMethod => {
                Some("'readonly', 'writeonly' and 'readwrite' only apply to attributes")
            }
        }
    }

    fn is_duplicate(self) -> bool {
        matches!(
            self,
            ParseErrorKind::DuplicateModule | ParseErrorKind::DuplicateInterface | ParseErrorKind::DuplicateAttribute
        )
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::TrailingInput => "unexpected trailing input",
            ParseErrorKind::DanglingAnnotation => "dangling annotation",
            ParseErrorKind::DuplicateModule => "duplicate module name",
            ParseErrorKind::DuplicateInterface => "duplicate interface name",
            ParseErrorKind::DuplicateAttribute => "duplicate attribute name",
            ParseErrorKind::VisibilityOnMethod => "visibility modifier on method",
        })
    }
}

/// A grammar mismatch: what the parser expected, what it found instead, and where.
///
/// ## Notes
/// - For duplicate-name errors `previous` holds the span of the first occurrence; for dangling
///   annotations it holds the span of the last annotation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: expected {expected}, found {found}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub expected: String,
    pub found: String,
    pub span: Span,
    pub previous: Option<Span>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            expected: expected.into(),
            found: found.into(),
            span,
            previous: None,
        }
    }

    pub fn with_previous(mut self, previous: Span) -> Self {
        self.previous = Some(previous);
        self
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind.help().map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let primary = if self.kind.is_duplicate() {
            format!("{} redeclared here", self.found)
        } else {
            format!("expected {}", self.expected)
        };
        let mut labels = vec![LabeledSpan::new_with_span(Some(primary), self.span)];
        if let Some(previous) = self.previous {
            let note = if self.kind.is_duplicate() {
                "first declared here"
            } else {
                "annotation declared here"
            };
            labels.push(LabeledSpan::new_with_span(Some(note.to_string()), previous));
        }
        Some(Box::new(labels.into_iter()))
    }
}

// ============================================================================
// Combined error
// ============================================================================

/// Either error kind, as returned by [`crate::parser::parse_source`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// Location of the failure.
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lex(e) => e.span,
            SyntaxError::Parse(e) => e.span,
        }
    }
}
