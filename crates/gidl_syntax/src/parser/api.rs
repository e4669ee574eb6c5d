/// Parse a token stream into an ordered list of [`Module`]s.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `gidl_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`ParseError`]; no partial model is returned.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Vec<Module>, ParseError> {
    Parser::new(tokens).parse()
}

/// Lex and parse a source buffer in one step.
///
/// ## Errors
/// Returns [`SyntaxError::Lex`] or [`SyntaxError::Parse`] for the first failure.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str) -> Result<Vec<Module>, SyntaxError> {
    let tokens = lexer::lex(source)?;
    Ok(parse(&tokens)?)
}
