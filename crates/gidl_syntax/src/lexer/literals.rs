//! String and numeric literal scanning.
//!
//! Literals only appear as annotation values (`@default("x")`, `@since(2)`), but the lexer
//! recognizes them anywhere so the parser can report a precise "expected …" error.

use super::{Lexer, TokenKind};
use crate::ast::Span;
use crate::diagnostics::{LexError, LexErrorKind};

impl<'a> Lexer<'a> {
    /// Scan a double-quoted string; the opening quote is already consumed.
    ///
    /// Strings may not span lines.
    pub(super) fn scan_string(&mut self) -> Result<(), LexError> {
        let mut value = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => return Err(self.error(LexErrorKind::UnterminatedString)),
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    let escape = self.mark();
                    self.advance();
                    let decoded = match self.advance() {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('0') => '\0',
                        Some(other) => {
                            return Err(LexError::new(
                                LexErrorKind::InvalidEscape,
                                format!("\\{other}"),
                                Span::new(escape.pos, self.current_pos, escape.line, escape.column),
                            ));
                        }
                        None => return Err(self.error(LexErrorKind::UnterminatedString)),
                    };
                    value.push(decoded);
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        self.add_token(TokenKind::String(value));
        Ok(())
    }

    /// Scan a negative number; the `-` is already consumed.
    pub(super) fn scan_signed_number(&mut self) -> Result<(), LexError> {
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(self.error(LexErrorKind::MalformedNumber));
        }
        self.advance();
        self.scan_number();
        Ok(())
    }

    /// Scan `[0-9]+(\.[0-9]+)?`; the first digit is already consumed.
    pub(super) fn scan_number(&mut self) {
        self.consume_digits();

        // A '.' only continues the number when a digit follows it.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.consume_digits();
        }

        self.add_token(TokenKind::Number(self.lexeme().to_string()));
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}
