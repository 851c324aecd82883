/// Statement parsing methods.
///
/// This chunk parses blocks, statement lists and the statement forms (assignment, `if`, `while`,
/// `break`, nested block).
///
/// ## Notes
/// - Statement dispatch looks only at the lookahead kind; there is no backtracking.
/// - `if`/`while` bodies parse a bare `Block` when they start with `begin`, otherwise a single
///   statement.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn block(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let mut node = SyntaxNode::new(self.label(LabelId::Block, None));
        self.expect_keyword(KeywordId::Begin)?;
        node.push(self.statement_list()?);
        self.expect_keyword(KeywordId::End)?;
        Ok(node)
    }

    fn statement_list(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let mut node = SyntaxNode::new(self.label(LabelId::StatementList, None));
        if self.check_keyword(KeywordId::End) {
            return Ok(node);
        }

        node.push(self.statement()?);
        while self.check_punct(PunctuationId::Semicolon) {
            self.advance();
            // Trailing `;` right before `end`.
            if self.check_keyword(KeywordId::End) {
                break;
            }
            node.push(self.statement()?);
        }
        Ok(node)
    }

    fn statement(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let kind = self.peek().kind;
        match kind {
            TokenKind::Ident => self.assign_stmt(),
            TokenKind::Keyword(KeywordId::If) => self.if_stmt(),
            TokenKind::Keyword(KeywordId::While) => self.while_stmt(),
            TokenKind::Keyword(KeywordId::Break) => self.break_stmt(),
            TokenKind::Keyword(KeywordId::Begin) => {
                let mut node = SyntaxNode::new(self.label(LabelId::CompoundStatement, None));
                node.push(self.block()?);
                Ok(node)
            }
            TokenKind::Number => Err(self.error(MessageId::StatementStartsWithNumber)),
            _ => Err(self.error(MessageId::ExpectedStatement)),
        }
    }

    /// `Block` when the lookahead is `begin`, otherwise a single statement.
    fn body(&mut self) -> Result<SyntaxNode, SyntaxError> {
        if self.check_keyword(KeywordId::Begin) {
            self.block()
        } else {
            self.statement()
        }
    }

    fn assign_stmt(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let mut node = SyntaxNode::new(self.label(LabelId::Assignment, None));

        if !self.check(TokenKind::Ident) {
            return Err(self.error(MessageId::AssignTarget));
        }
        let target = self.advance();
        node.push(SyntaxNode::new(self.label(LabelId::AssignTarget, Some(target.text.as_str()))));

        self.expect(TokenKind::Operator(operators::OperatorId::Assign))?;
        node.push(self.expr()?);
        Ok(node)
    }

    fn if_stmt(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let mut node = SyntaxNode::new(self.label(LabelId::IfStatement, None));
        self.expect_keyword(KeywordId::If)?;
        node.push(self.cond()?);
        self.expect_keyword(KeywordId::Then)?;
        node.push(self.body()?);

        if self.match_keyword(KeywordId::Else) {
            node.push(self.body()?);
        }
        Ok(node)
    }

    fn while_stmt(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let mut node = SyntaxNode::new(self.label(LabelId::WhileStatement, None));
        self.expect_keyword(KeywordId::While)?;
        node.push(self.cond()?);
        self.expect_keyword(KeywordId::Do)?;
        node.push(self.body()?);
        Ok(node)
    }

    fn break_stmt(&mut self) -> Result<SyntaxNode, SyntaxError> {
        self.expect_keyword(KeywordId::Break)?;
        Ok(SyntaxNode::new(self.label(LabelId::BreakStatement, None)))
    }
}
