//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use minipas_core::lang::keywords::KeywordId;
use minipas_core::lang::operators::{self, OperatorCategory, OperatorId};
use minipas_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for the `relop` class: `= <> < <= > >= !=`.
    pub fn is_relational(&self) -> bool {
        self.operator_id().is_some_and(operators::is_relational)
    }

    /// Return `true` for operators folded by `Expr` (`+`, `-`).
    pub fn is_additive(&self) -> bool {
        self.operator_id()
            .is_some_and(|id| operators::category(id) == OperatorCategory::Additive)
    }

    /// Return `true` for operators folded by `Term` (`*`, `/`, `mod`).
    pub fn is_multiplicative(&self) -> bool {
        self.is_keyword(KeywordId::Mod)
            || self
                .operator_id()
                .is_some_and(|id| operators::category(id) == OperatorCategory::Multiplicative)
    }

    /// Return `true` for the condition connectives `and` / `or`.
    pub fn is_logical_connective(&self) -> bool {
        self.is_keyword(KeywordId::And) || self.is_keyword(KeywordId::Or)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
