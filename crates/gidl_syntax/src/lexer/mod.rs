//! Lexer for the GIDL interface definition language
//!
//! Handles tokenization including:
//! - Keywords (`module`, `interface`, `readonly`, `writeonly`, `readwrite`)
//! - Identifiers and literals (string, number)
//! - Punctuation (`{ } ( ) , ; @`)
//! - Whitespace and comments (`// …`, `/* … */`), which are discarded but still advance
//!   line/column tracking
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `literals` - String and numeric literal scanning
//!
//! ## Notes
//! - A fresh [`Lexer`] is built for every call; it holds nothing beyond the buffer and its position.
//! - Scanning stops at the first unrecognized input and reports a single [`LexError`].

mod literals;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::{LexError, LexErrorKind};
use gidl_core::lang::punctuation::{self, PunctuationId};

/// Position snapshot (byte offset plus 1-based line/column).
#[derive(Debug, Clone, Copy)]
struct Mark {
    pos: usize,
    line: usize,
    column: usize,
}

/// Lexer for GIDL source text.
///
/// Converts source text into a stream of tokens, handling:
/// - Keywords and identifiers
/// - String and numeric literals
/// - Punctuation
/// - Line and block comments
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    column: usize,
    /// Where the token currently being scanned begins
    start: Mark,
    tokens: Vec<Token>,
    /// Spans of skipped comments, in source order
    comments: Vec<Span>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            start: Mark {
                pos: 0,
                line: 1,
                column: 1,
            },
            tokens: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Tokenize the entire source text.
    ///
    /// Returns a vector of tokens on success, or the first error encountered.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(self) -> Result<Vec<Token>, LexError> {
        self.tokenize_with_comments().map(|(tokens, _)| tokens)
    }

    /// Tokenize and also return the spans of every comment that was skipped.
    ///
    /// Comments never become tokens; tooling that rewrites source (the formatter) uses the spans
    /// to detect text it would drop.
    pub fn tokenize_with_comments(mut self) -> Result<(Vec<Token>, Vec<Span>), LexError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        self.start = self.mark();
        self.add_token(TokenKind::Eof);
        Ok((self.tokens, self.comments))
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.current_pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Span from the start of the current token to the current position.
    fn span(&self) -> Span {
        Span::new(self.start.pos, self.current_pos, self.start.line, self.start.column)
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start.pos..self.current_pos]
    }

    /// Error covering the current token's text.
    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.lexeme(), self.span())
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), LexError> {
        self.start = self.mark();

        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            // Whitespace
            ' ' | '\t' | '\r' | '\n' => {}

            // Comments
            '/' if self.peek() == Some('/') => self.skip_line_comment(),
            '/' if self.peek() == Some('*') => self.skip_block_comment()?,

            // Literals
            '"' => self.scan_string()?,
            '-' => self.scan_signed_number()?,
            '0'..='9' => self.scan_number(),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(),

            // Punctuation
            _ => match punctuation::from_char(c) {
                Some(id) => self.add_punct(id),
                None => return Err(self.error(LexErrorKind::UnexpectedCharacter)),
            },
        }
        Ok(())
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens.push(Token::new(kind, self.span()));
    }

    fn add_punct(&mut self, id: PunctuationId) {
        self.add_token(TokenKind::Punctuation(id));
    }

    // ========================================================================
    // Comments
    // ========================================================================

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        self.comments.push(self.span());
    }

    /// Skip a `/* ... */` comment. Block comments do not nest.
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        self.advance(); // consume '*'
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    self.comments.push(self.span());
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    // Point at the opener rather than at the whole rest of the file.
                    let opener = Span::new(self.start.pos, self.start.pos + 2, self.start.line, self.start.column);
                    return Err(LexError::new(LexErrorKind::UnterminatedComment, "/*", opener));
                }
            }
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = self.lexeme();

        // Look up identifier spelling in the reserved-word registry (no allocation for keywords).
        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id));
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()));
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::trace!(token_count = tokens.len(), "lexed source");
    Ok(tokens)
}

/// Spans of all comments in `source`, in source order.
pub fn comments(source: &str) -> Result<Vec<Span>, LexError> {
    Lexer::new(source).tokenize_with_comments().map(|(_, comments)| comments)
}

// ============================================================================
// TESTS
// ============================================================================
