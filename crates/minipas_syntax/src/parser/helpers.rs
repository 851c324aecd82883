/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming the lookahead (`peek`, `advance`)
/// - Checking / expecting keywords, operators, and punctuation
/// - Building localized errors and tree labels
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the lookahead is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Return the lookahead without consuming it.
    fn peek(&self) -> &Token {
        &self.current
    }

    /// Consume the lookahead, pull the next token, and return the consumed one.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        tracing::trace!(
            kind = %next.kind,
            text = %next.text,
            line = next.pos.line,
            col = next.pos.col,
            "lookahead"
        );
        std::mem::replace(&mut self.current, next)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.current.kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.current.kind.is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the lookahead if it has the given kind, otherwise fail with "expected '<kind>'".
    fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(SyntaxError::expected(self.construct_name(kind), self.locale, &self.current))
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<Token, SyntaxError> {
        self.expect(TokenKind::Keyword(id))
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<Token, SyntaxError> {
        self.expect(TokenKind::Punctuation(id))
    }

    /// Consume a relational operator.
    fn expect_relop(&mut self) -> Result<Token, SyntaxError> {
        if self.current.kind.is_relational() {
            Ok(self.advance())
        } else {
            Err(SyntaxError::expected(
                messages::construct(ConstructId::RelationalOperator, self.locale),
                self.locale,
                &self.current,
            ))
        }
    }

    /// Human-readable name of a token kind for "expected ..." diagnostics.
    fn construct_name(&self, kind: TokenKind) -> String {
        let named = |id| messages::construct(id, self.locale).to_string();
        match kind {
            TokenKind::Punctuation(PunctuationId::Semicolon) => named(ConstructId::Semicolon),
            TokenKind::Punctuation(PunctuationId::Dot) => named(ConstructId::Dot),
            TokenKind::Punctuation(id) => punctuation::as_str(id).to_string(),
            TokenKind::Ident => named(ConstructId::Identifier),
            TokenKind::Keyword(id) => keywords::as_str(id).to_string(),
            TokenKind::Operator(id) if operators::is_relational(id) => named(ConstructId::RelationalOperator),
            TokenKind::Operator(id) => operators::as_str(id).to_string(),
            TokenKind::Number | TokenKind::Unknown | TokenKind::Eof => named(ConstructId::Symbol),
        }
    }

    /// Build a rule-specific error located at the lookahead.
    fn error(&self, id: MessageId) -> SyntaxError {
        SyntaxError::at(id, messages::message(id, self.locale), &self.current)
    }

    /// Render a localized tree label.
    fn label(&self, id: LabelId, detail: Option<&str>) -> String {
        messages::label(id, self.locale, detail)
    }
}
