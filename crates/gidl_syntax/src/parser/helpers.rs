/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords and punctuation
/// - Building [`ParseError`]s positioned at the current token
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// `Eof` is never consumed, so repeated calls at the end keep returning it.
    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<&'a Token, ParseError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(format!("'{}'", keywords::as_str(id))))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<&'a Token, ParseError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(format!("'{}'", punctuation::as_str(id))))
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Error of `kind` at the current token, describing that token as "found".
    fn error_here(&self, kind: ParseErrorKind, expected: impl Into<String>) -> ParseError {
        ParseError::new(kind, expected, self.peek().kind.to_string(), self.current_span())
    }

    /// "expected X, found <current token>".
    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        self.error_here(ParseErrorKind::UnexpectedToken, expected)
    }

    /// Annotations must be followed by a declaration: a closing brace or the end of input
    /// right after them is an error.
    fn reject_dangling(&self, annotations: &[Annotation]) -> Result<(), ParseError> {
        if annotations.is_empty() {
            return Ok(());
        }
        if self.is_at_end() || self.check_punct(PunctuationId::RBrace) {
            let last = &annotations[annotations.len() - 1];
            return Err(self
                .error_here(ParseErrorKind::DanglingAnnotation, "a declaration after the annotation")
                .with_previous(last.span()));
        }
        Ok(())
    }
}
