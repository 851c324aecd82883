/// Parse a whole program with English diagnostics and labels.
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns the first [`SyntaxError`] if parsing fails.
pub fn parse(source: &str) -> Result<SyntaxNode, SyntaxError> {
    parse_with_locale(source, Locale::default())
}

/// Parse a whole program, rendering diagnostics and tree labels in `locale`.
#[tracing::instrument(skip_all, fields(source_len = source.len(), locale = %locale))]
pub fn parse_with_locale(source: &str, locale: Locale) -> Result<SyntaxNode, SyntaxError> {
    let result = Parser::with_locale(source, locale).parse();
    match &result {
        Ok(tree) => tracing::debug!(nodes = tree.node_count(), "parse succeeded"),
        Err(err) => tracing::debug!(line = err.line, col = err.col, kind = ?err.kind, "parse failed"),
    }
    result
}

/// Parse a single arithmetic expression that spans the whole input.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_expression(source: &str) -> Result<SyntaxNode, SyntaxError> {
    Parser::new(source).parse_expression()
}

/// Parse a single condition that spans the whole input.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_condition(source: &str) -> Result<SyntaxNode, SyntaxError> {
    Parser::new(source).parse_condition()
}
