/// Condition parsing.
///
/// Conditions come in three shapes, tried in this order: `not Cond`, a parenthesized comparison,
/// and a bare comparison. The two comparison shapes may be followed by a left-folded chain of
/// `and`/`or` connectives whose right operands are full conditions.
///
/// ## Notes
/// - A `(` at the start of a condition always opens a parenthesized comparison: the parser reads an
///   `Expr` first and only then decides, from the single following token, whether the shape is
///   valid. No token is ever un-consumed. A parenthesized arithmetic operand must therefore be
///   written inside the comparison, e.g. `((a + 1) < 2)`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Conditions
    // ========================================================================

    fn cond(&mut self) -> Result<SyntaxNode, SyntaxError> {
        if self.check_keyword(KeywordId::Not) {
            let not = self.advance();
            let mut node = SyntaxNode::new(self.label(LabelId::Not, Some(not.text.as_str())));
            node.push(self.cond()?);
            return Ok(node);
        }

        let comparison = if self.check_punct(PunctuationId::LParen) {
            self.parenthesized_comparison()?
        } else {
            self.comparison()?
        };
        self.logical_chain(comparison)
    }

    /// `'(' Expr relop Expr ')'`.
    fn parenthesized_comparison(&mut self) -> Result<SyntaxNode, SyntaxError> {
        self.expect_punct(PunctuationId::LParen)?;
        let lhs = self.expr()?;

        if !self.peek().kind.is_relational() {
            let id = if self.check_punct(PunctuationId::RParen) {
                MessageId::ParenConditionWithoutRelop
            } else {
                MessageId::MalformedParenCondition
            };
            return Err(self.error(id));
        }
        let node = self.comparison_tail(lhs)?;

        self.expect_punct(PunctuationId::RParen)?;
        Ok(node)
    }

    /// `Expr relop Expr` with a dedicated diagnostic for a missing operator.
    fn comparison(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let lhs = self.expr()?;
        if !self.peek().kind.is_relational() {
            return Err(self.error(MessageId::MissingRelop));
        }
        self.comparison_tail(lhs)
    }

    /// Finish a comparison whose left operand is already parsed and whose lookahead is a relop.
    fn comparison_tail(&mut self, lhs: SyntaxNode) -> Result<SyntaxNode, SyntaxError> {
        let relop = self.expect_relop()?;
        let rhs = self.expr()?;
        Ok(SyntaxNode::with_children(
            self.label(LabelId::Condition, None),
            vec![lhs, SyntaxNode::new(self.label(LabelId::Relop, Some(relop.text.as_str()))), rhs],
        ))
    }

    /// Zero or more `('and'|'or') Cond` suffixes, folded left onto `node`.
    fn logical_chain(&mut self, mut node: SyntaxNode) -> Result<SyntaxNode, SyntaxError> {
        while self.peek().kind.is_logical_connective() {
            let op = self.advance();
            let rhs = self.cond()?;
            node = SyntaxNode::with_children(self.label(LabelId::Logical, Some(op.text.as_str())), vec![node, rhs]);
        }
        Ok(node)
    }
}
