/// Interface member parsing methods.
///
/// Attributes and methods share a prefix (`Annotation* Type Identifier`), so a member is read up to
/// its name and the next token decides: `(` starts a method, `;` ends an attribute.
impl<'a> Parser<'a> {
    // ========================================================================
    // Members
    // ========================================================================

    /// Return `true` if the current token can begin a member declaration.
    fn at_member_start(&self) -> bool {
        match &self.peek().kind {
            TokenKind::Ident(_) => true,
            TokenKind::Punctuation(id) => *id == PunctuationId::At,
            TokenKind::Keyword(id) => Visibility::from_keyword(*id).is_some(),
            TokenKind::String(_) | TokenKind::Number(_) | TokenKind::Eof => false,
        }
    }

    /// `AttributeDecl | MethodDecl`
    fn member(&mut self) -> Result<Member, ParseError> {
        let annotations = self.annotations()?;
        self.reject_dangling(&annotations)?;

        let visibility = self.visibility();
        let (ty, _) = self.type_ref()?;
        let (name, span) = self.identifier("member name")?;

        if self.check_punct(PunctuationId::LParen) {
            if let Some((_, modifier)) = visibility {
                return Err(ParseError::new(
                    ParseErrorKind::VisibilityOnMethod,
                    "an attribute declaration after the visibility modifier",
                    format!("method '{name}'"),
                    modifier,
                ));
            }
            self.advance();
            let parameters = self.parameters()?;
            self.expect_punct(PunctuationId::RParen)?;
            self.expect_punct(PunctuationId::Semicolon)?;
            tracing::trace!(method = %name, params = parameters.len(), "parsed method");
            return Ok(Member::Method(Method::new(ty, name, parameters, annotations, span)));
        }

        if self.match_punct(PunctuationId::Semicolon) {
            // Missing modifier means read-write.
            let visibility = visibility.map(|(v, _)| v).unwrap_or_default();
            tracing::trace!(attribute = %name, %visibility, "parsed attribute");
            return Ok(Member::Attribute(Attribute::new(name, ty, visibility, annotations, span)));
        }

        Err(self.unexpected(format!(
            "'{}' or '{}' after member name",
            punctuation::as_str(PunctuationId::LParen),
            punctuation::as_str(PunctuationId::Semicolon)
        )))
    }

    /// Optional `readonly` / `writeonly` / `readwrite`, with the modifier's span.
    fn visibility(&mut self) -> Option<(Visibility, Span)> {
        let token = self.peek();
        let visibility = token.keyword_id().and_then(Visibility::from_keyword)?;
        self.advance();
        Some((visibility, token.span))
    }

    /// `Param (',' Param)*`, or nothing when the list is empty.
    fn parameters(&mut self) -> Result<Vec<Parameter>, ParseError> {
        let mut parameters = Vec::new();
        if self.check_punct(PunctuationId::RParen) {
            return Ok(parameters);
        }

        loop {
            let (ty, _) = self.type_ref()?;
            let (name, span) = self.identifier("parameter name")?;
            parameters.push(Parameter::new(ty, name, span));

            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        Ok(parameters)
    }
}
