//! Token types for the minipas lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including `and`, `or`, `not`, `mod`)
//! - `Operator(OperatorId)` for symbol operators (arithmetic, `:=`, relational)
//! - `Punctuation(PunctuationId)` for `(`, `)`, `;` and `.`
//!
//! ## Notes
//! - Every token keeps its literal text, so the kind carries no payload and is `Copy`.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::{Position, Span};
use minipas_core::lang::keywords::{self, KeywordId};
use minipas_core::lang::operators::OperatorId;
use minipas_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Number,

    // ========== Special ==========
    /// A character no rule recognizes. The parser rejects it wherever it shows up.
    Unknown,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(_) => write!(f, "keyword"),
            TokenKind::Operator(_) => write!(f, "operator"),
            TokenKind::Punctuation(_) => write!(f, "punctuation"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Unknown => write!(f, "unknown"),
            TokenKind::Eof => write!(f, "end-of-input"),
        }
    }
}

/// A token with its kind, literal text and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Line/column of the first character.
    pub pos: Position,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
            span,
        }
    }

    pub fn line(&self) -> usize {
        self.pos.line
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} '{}'", self.pos, self.kind, self.text)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
