/// Parse a whole source buffer into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `uri`: Name the source is known by in diagnostics.
/// - `text`: Source text.
///
/// ## Errors
/// Returns the first [`CompileError`] from lexing or parsing.
#[tracing::instrument(skip_all, fields(uri = uri, source_len = text.len()))]
pub fn parse(uri: &str, text: &str) -> Result<Program, CompileError> {
    let mut parser = Parser::new(Source::new(uri, text));
    parser.parse_program()
}

/// Parse a single standalone expression.
///
/// The whole input must be one expression: trailing tokens are an error. There
/// is no enclosing class, so unqualified calls are rejected.
#[tracing::instrument(skip_all, fields(source_len = text.len()))]
pub fn parse_expression(text: &str) -> Result<Expr, CompileError> {
    let mut parser = Parser::new(Source::new("<expression>", text));
    let expr = parser.parse_expression(None)?;
    if !parser.at_eof()? {
        return Err(parser.expected("EOF")?);
    }
    Ok(expr)
}
