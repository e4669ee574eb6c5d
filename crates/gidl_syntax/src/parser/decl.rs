/// Declaration parsing methods.
///
/// This chunk parses block declarations (modules and interfaces) and the annotation prefixes
/// that may decorate any declaration.
///
/// ## Notes
/// - Duplicate interface names are reported at the duplicate's name; duplicate module names are
///   reported by `parse()` once the duplicate module is closed.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `'module' Identifier '{' InterfaceDecl* '}'`
    ///
    /// Returns the module together with the span of its closing brace.
    fn module_decl(&mut self, annotations: Vec<Annotation>) -> Result<(Module, Span), ParseError> {
        self.expect_keyword(KeywordId::Module)?;
        let (name, span) = self.identifier("module name")?;
        self.expect_punct(PunctuationId::LBrace)?;

        let mut interfaces: Vec<Interface> = Vec::new();
        let mut seen: HashMap<String, Span> = HashMap::new();

        while !self.check_punct(PunctuationId::RBrace) {
            if !self.check_punct(PunctuationId::At) && !self.check_keyword(KeywordId::Interface) {
                return Err(self.unexpected(format!(
                    "'{}' or '{}'",
                    keywords::as_str(KeywordId::Interface),
                    punctuation::as_str(PunctuationId::RBrace)
                )));
            }

            let interface = self.interface_decl()?;
            if let Some(first) = seen.get(interface.name()) {
                return Err(ParseError::new(
                    ParseErrorKind::DuplicateInterface,
                    "a unique interface name",
                    format!("interface '{}'", interface.name()),
                    interface.span(),
                )
                .with_previous(*first));
            }
            seen.insert(interface.name().to_string(), interface.span());
            interfaces.push(interface);
        }

        let close = self.expect_punct(PunctuationId::RBrace)?.span;
        tracing::debug!(module = %name, interfaces = interfaces.len(), "parsed module");
        Ok((Module::new(name, interfaces, annotations, span), close))
    }

    /// `Annotation* 'interface' Identifier '{' Member* '}'`
    fn interface_decl(&mut self) -> Result<Interface, ParseError> {
        let annotations = self.annotations()?;
        self.reject_dangling(&annotations)?;

        self.expect_keyword(KeywordId::Interface)?;
        let (name, span) = self.identifier("interface name")?;
        self.expect_punct(PunctuationId::LBrace)?;

        let mut members: Vec<Member> = Vec::new();
        let mut seen: HashMap<String, Span> = HashMap::new();

        while !self.check_punct(PunctuationId::RBrace) {
            if !self.at_member_start() {
                return Err(self.unexpected(format!(
                    "member declaration or '{}'",
                    punctuation::as_str(PunctuationId::RBrace)
                )));
            }

            let member = self.member()?;
            if let Member::Attribute(attribute) = &member {
                if let Some(first) = seen.get(attribute.name()) {
                    return Err(ParseError::new(
                        ParseErrorKind::DuplicateAttribute,
                        "a unique attribute name",
                        format!("attribute '{}'", attribute.name()),
                        attribute.span(),
                    )
                    .with_previous(*first));
                }
                seen.insert(attribute.name().to_string(), attribute.span());
            }
            members.push(member);
        }

        self.expect_punct(PunctuationId::RBrace)?;
        tracing::trace!(interface = %name, members = members.len(), "parsed interface");
        Ok(Interface::from_members(name, members, annotations, span))
    }

    // ========================================================================
    // Annotations
    // ========================================================================

    /// `('@' Identifier ('(' Literal ')')?)*`
    fn annotations(&mut self) -> Result<Vec<Annotation>, ParseError> {
        let mut annotations = Vec::new();
        while self.check_punct(PunctuationId::At) {
            let start = self.advance().span;
            let (name, mut end) = self.identifier("annotation name")?;
            let value = if self.match_punct(PunctuationId::LParen) {
                let value = self.annotation_value()?;
                end = self.expect_punct(PunctuationId::RParen)?.span;
                Some(value)
            } else {
                None
            };
            annotations.push(Annotation::new(name, value, start.merge(end)));
        }
        Ok(annotations)
    }
}
