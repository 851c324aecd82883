//! Lexer for the minipas language
//!
//! Handles tokenization including:
//! - Keywords (program, begin, end, if, then, else, while, do, break, and, or, not, mod)
//! - Identifiers and unsigned integer literals
//! - Operators (`+ - * /`, `:=`, relational operators) and punctuation (`( ) ; .`)
//! - Brace comments `{ ... }`, which may span lines
//!
//! ## Notes
//! - The lexer is pull-based: [`Lexer::next_token`] scans exactly one token per call.
//! - The lexer never fails. Characters it cannot classify become [`TokenKind::Unknown`] tokens and
//!   are rejected later by the parser.
//! - An unterminated comment swallows the rest of the input without a diagnostic.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::{Position, Span};
use minipas_core::lang::operators::OperatorId;
use minipas_core::lang::punctuation::PunctuationId;

/// UTF-8 byte-order mark, stripped once from the start of the input.
const BOM: char = '\u{FEFF}';

/// Lexer for minipas source code.
///
/// Keeps the scan cursor (byte offset plus line/column) between calls to [`Lexer::next_token`].
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        let source = source.strip_prefix(BOM).unwrap_or(source);
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// The source being scanned, without a leading byte-order mark.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Scan and return the next token.
    ///
    /// Once the input is exhausted this keeps returning an `Eof` token positioned just past the
    /// last character.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_blanks();

            let start = self.current_pos;
            let pos = self.position();

            let Some(c) = self.advance() else {
                return Token::new(TokenKind::Eof, "", pos, Span::new(start, start));
            };

            let kind = match c {
                // Comments
                '{' => {
                    self.skip_comment();
                    continue;
                }

                // Single-character operators and punctuation
                '+' => TokenKind::Operator(OperatorId::Plus),
                '-' => TokenKind::Operator(OperatorId::Minus),
                '*' => TokenKind::Operator(OperatorId::Star),
                '/' => TokenKind::Operator(OperatorId::Slash),
                '(' => TokenKind::Punctuation(PunctuationId::LParen),
                ')' => TokenKind::Punctuation(PunctuationId::RParen),
                ';' => TokenKind::Punctuation(PunctuationId::Semicolon),
                '.' => TokenKind::Punctuation(PunctuationId::Dot),

                // Two-character lookahead
                ':' => {
                    if self.match_char('=') {
                        TokenKind::Operator(OperatorId::Assign)
                    } else {
                        TokenKind::Unknown
                    }
                }
                '<' => self.operator(OperatorId::Lt, &[('=', OperatorId::LtEq), ('>', OperatorId::NotEq)]),
                '>' => self.operator(OperatorId::Gt, &[('=', OperatorId::GtEq)]),
                '=' => TokenKind::Operator(OperatorId::Eq),
                '!' => {
                    if self.match_char('=') {
                        TokenKind::Operator(OperatorId::BangEq)
                    } else {
                        TokenKind::Unknown
                    }
                }

                // Numbers
                '0'..='9' => self.scan_number(),

                // Identifiers and keywords
                _ if is_ident_start(c) => self.scan_identifier(start),

                _ => TokenKind::Unknown,
            };

            return Token::new(
                kind,
                &self.source[start..self.current_pos],
                pos,
                Span::new(start, self.current_pos),
            );
        }
    }

    /// Tokenize the remaining input.
    ///
    /// The returned stream always ends with exactly one `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Consume one character and move the line/column cursor past it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_blanks(&mut self) {
        while self.peek().is_some_and(is_blank) {
            self.advance();
        }
    }

    /// Skip to just past the next `}`, or to end of input.
    fn skip_comment(&mut self) {
        while let Some(c) = self.advance() {
            if c == '}' {
                break;
            }
        }
    }

    // ========================================================================
    // Token scanners
    // ========================================================================

    /// Try to match a two-character operator, fall back to the single-character one.
    fn operator(&mut self, simple: OperatorId, compounds: &[(char, OperatorId)]) -> TokenKind {
        for (c, id) in compounds {
            if self.match_char(*c) {
                return TokenKind::Operator(*id);
            }
        }
        TokenKind::Operator(simple)
    }

    fn scan_number(&mut self) -> TokenKind {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        TokenKind::Number
    }

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }

        let spelling = &self.source[start..self.current_pos];
        match keyword_id(spelling) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident,
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Blank characters skipped between tokens.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Check if a character can start an identifier (ASCII letters only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a whole source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
