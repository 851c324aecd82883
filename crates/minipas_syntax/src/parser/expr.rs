/// Expression parsing methods.
///
/// Two precedence levels, both left-associative: `Expr` folds `+`/`-` over terms, `Term` folds
/// `*`/`/`/`mod` over factors. Each fold step wraps the tree built so far as the left child of a
/// new node labeled with the operator text.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expr(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let mut node = self.term()?;
        while self.peek().kind.is_additive() {
            let op = self.advance();
            let rhs = self.term()?;
            node = SyntaxNode::with_children(op.text, vec![node, rhs]);
        }
        Ok(node)
    }

    fn term(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let mut node = self.factor()?;
        while self.peek().kind.is_multiplicative() {
            let op = self.advance();
            let rhs = self.factor()?;
            node = SyntaxNode::with_children(op.text, vec![node, rhs]);
        }
        Ok(node)
    }

    fn factor(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let kind = self.peek().kind;
        match kind {
            TokenKind::Number => {
                let number = self.advance();
                Ok(SyntaxNode::new(self.label(LabelId::Number, Some(number.text.as_str()))))
            }
            TokenKind::Ident => {
                let name = self.advance();
                Ok(SyntaxNode::new(self.label(LabelId::Variable, Some(name.text.as_str()))))
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expr()?;
                self.expect_punct(PunctuationId::RParen)?;
                Ok(inner)
            }
            _ => Err(self.error(MessageId::ExpectedFactor)),
        }
    }
}
