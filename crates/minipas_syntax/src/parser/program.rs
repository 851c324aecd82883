/// Program-level parsing.
///
/// The program header and trailer get rule-specific diagnostics instead of the generic
/// "expected ..." message, since they are the first thing a learner gets wrong.
impl<'a> Parser<'a> {
    // ========================================================================
    // Program
    // ========================================================================

    fn program(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let mut node = SyntaxNode::new(self.label(LabelId::Program, None));

        if !self.check_keyword(KeywordId::Program) {
            return Err(self.error(MessageId::ProgramKeyword));
        }
        let keyword = self.advance();
        node.push(SyntaxNode::new(self.label(LabelId::Keyword, Some(keyword.text.as_str()))));

        if !self.check(TokenKind::Ident) {
            return Err(self.error(MessageId::ProgramName));
        }
        let name = self.advance();
        node.push(SyntaxNode::new(self.label(LabelId::ProgramName, Some(name.text.as_str()))));

        if !self.check_punct(PunctuationId::Semicolon) {
            return Err(self.error(MessageId::ProgramSemicolon));
        }
        self.advance();

        node.push(self.block()?);

        if !self.check_punct(PunctuationId::Dot) {
            return Err(self.error(MessageId::ProgramDot));
        }
        self.advance();

        tracing::debug!(program = %name.text, "parsed program");
        Ok(node)
    }
}
