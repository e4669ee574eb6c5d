/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “decl” or “members” (identifiers, type references, literals).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Consume an identifier; `what` names the construct in the error message.
    fn identifier(&mut self, what: &str) -> Result<(Ident, Span), ParseError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let span = self.current_span();
                self.advance();
                Ok((name.clone(), span))
            }
            _ => Err(self.unexpected(what)),
        }
    }

    /// Type references stay opaque identifiers; resolving them is a later pass.
    fn type_ref(&mut self) -> Result<(Ident, Span), ParseError> {
        self.identifier("type name")
    }

    fn annotation_value(&mut self) -> Result<AnnotationValue, ParseError> {
        let value = match &self.peek().kind {
            TokenKind::String(s) => AnnotationValue::String(s.clone()),
            TokenKind::Number(n) => AnnotationValue::Number(n.clone()),
            TokenKind::Ident(word) => AnnotationValue::Word(word.clone()),
            TokenKind::Keyword(_) | TokenKind::Punctuation(_) | TokenKind::Eof => {
                return Err(self.unexpected("annotation value (string, number or identifier)"));
            }
        };
        self.advance();
        Ok(value)
    }
}
