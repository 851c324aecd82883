//! Diagnostics for the minipas front end.
//!
//! The parser reports exactly one error kind, [`SyntaxError`], and stops at the first one. The
//! message text is localized when the error is built; [`SyntaxError::report`] adds the localized
//! position frame, and the `miette::Diagnostic` impl lets callers render it with source context.

use miette::{Diagnostic, SourceSpan};
use minipas_core::lang::messages::{self, Locale, MessageId};
use thiserror::Error;

use crate::lexer::Token;

/// A terminal syntax error with the offending token's location.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message} (at line {line}, column {col}, found '{found}')")]
#[diagnostic(code(minipas::syntax))]
pub struct SyntaxError {
    /// Which check failed.
    pub kind: MessageId,
    /// Localized explanation of what was expected.
    pub message: String,
    /// Name of the expected construct, for errors raised by `expect`.
    pub expected: Option<String>,
    /// Text of the offending token (empty at end of input).
    pub found: String,
    pub line: usize,
    pub col: usize,
    #[label("found here")]
    pub span: SourceSpan,
}

impl SyntaxError {
    /// Build an error located at `token`.
    pub fn at(kind: MessageId, message: impl Into<String>, token: &Token) -> Self {
        Self {
            kind,
            message: message.into(),
            expected: None,
            found: token.text.clone(),
            line: token.pos.line,
            col: token.pos.col,
            span: (token.span.start, token.span.len()).into(),
        }
    }

    /// Build the generic "expected '<construct>'" error located at `token`.
    pub fn expected(construct: impl Into<String>, locale: Locale, token: &Token) -> Self {
        let construct = construct.into();
        let mut error = Self::at(MessageId::Expected, messages::expected(&construct, locale), token);
        error.expected = Some(construct);
        error
    }

    /// Render the one-line report users see, framed in `locale`.
    pub fn report(&self, locale: Locale) -> String {
        messages::error_report(locale, &self.message, self.line, self.col, &self.found)
    }
}
