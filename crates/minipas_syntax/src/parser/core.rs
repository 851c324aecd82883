/// Parser state.
///
/// ## Notes
/// - The parser holds exactly one lookahead token, primed from the lexer at construction time.
///   Consuming it pulls the next one; nothing is ever pushed back.
/// - There is no error recovery: the first [`SyntaxError`] ends the parse.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    locale: Locale,
}

impl<'a> Parser<'a> {
    /// Create a parser over `source` with English diagnostics and labels.
    pub fn new(source: &'a str) -> Self {
        Self::with_locale(source, Locale::default())
    }

    /// Create a parser whose diagnostics and tree labels use `locale`.
    pub fn with_locale(source: &'a str, locale: Locale) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self { lexer, current, locale }
    }

    /// Parse a whole program.
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered, including trailing tokens after the final
    /// `.`. No tree is returned on failure.
    pub fn parse(mut self) -> Result<SyntaxNode, SyntaxError> {
        let program = self.program()?;
        self.finish(program)
    }

    /// Parse a single arithmetic expression spanning the whole input.
    pub fn parse_expression(mut self) -> Result<SyntaxNode, SyntaxError> {
        let expr = self.expr()?;
        self.finish(expr)
    }

    /// Parse a single condition spanning the whole input.
    pub fn parse_condition(mut self) -> Result<SyntaxNode, SyntaxError> {
        let cond = self.cond()?;
        self.finish(cond)
    }

    /// Require end of input after a complete construct.
    fn finish(&self, node: SyntaxNode) -> Result<SyntaxNode, SyntaxError> {
        if self.is_at_end() {
            Ok(node)
        } else {
            Err(self.error(MessageId::TrailingContent))
        }
    }
}
