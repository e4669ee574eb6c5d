/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Returned by `peek()` when the token slice is empty or lacks a trailing `Eof`.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span {
        start: 0,
        end: 0,
        line: 1,
        column: 1,
    },
};

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass with bounded lookahead and performs **no** error recovery: the first
///   syntax error aborts the parse.
/// - All builder collections (modules, members, first-seen name tables) are owned by the parse
///   call; on failure they are dropped, so no partially built model is ever exposed.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `gidl_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the entire token stream into an ordered list of [`Module`]s.
    ///
    /// ## Errors
    /// Returns the first [`ParseError`] encountered. Tokens left over after the last module
    /// that cannot start another one are reported as [`ParseErrorKind::TrailingInput`].
    pub fn parse(mut self) -> Result<Vec<Module>, ParseError> {
        let mut modules: Vec<Module> = Vec::new();
        // First-seen span of every module name, for duplicate diagnostics.
        let mut seen: HashMap<String, Span> = HashMap::new();

        while !self.is_at_end() {
            if !self.check_punct(PunctuationId::At) && !self.check_keyword(KeywordId::Module) {
                return Err(self.error_here(
                    ParseErrorKind::TrailingInput,
                    format!("'{}' declaration or end of input", keywords::as_str(KeywordId::Module)),
                ));
            }

            let annotations = self.annotations()?;
            self.reject_dangling(&annotations)?;
            let (module, close) = self.module_decl(annotations)?;

            // Reported at the closing brace of the duplicate, pointing back at the first one.
            if let Some(first) = seen.get(module.name()) {
                return Err(ParseError::new(
                    ParseErrorKind::DuplicateModule,
                    "a unique module name",
                    format!("module '{}'", module.name()),
                    close,
                )
                .with_previous(*first));
            }
            seen.insert(module.name().to_string(), module.span());
            modules.push(module);
        }

        Ok(modules)
    }
}
