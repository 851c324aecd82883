//! Parser for the minipas language
//!
//! Recursive descent over a pull-based token stream with exactly one token of lookahead. Each
//! grammar rule has one procedure that consumes the tokens its rule owns and returns the subtree it
//! built; every procedure returns `Result<SyntaxNode, SyntaxError>` so the first error short-circuits
//! all the way to [`Parser::parse`] and no partial tree escapes.
//!
//! ```text
//! Program  → 'program' ID ';' Block '.'
//! Block    → 'begin' StmtList 'end'
//! StmtList → ε | Stmt (';' Stmt)*          trailing ';' before 'end' allowed
//! Stmt     → Assign | If | While | 'break' | Block
//! Assign   → ID ':=' Expr
//! If       → 'if' Cond 'then' (Block|Stmt) ['else' (Block|Stmt)]
//! While    → 'while' Cond 'do' (Block|Stmt)
//! Expr     → Term (('+'|'-') Term)*
//! Term     → Factor (('*'|'/'|'mod') Factor)*
//! Factor   → NUM | ID | '(' Expr ')'
//! Cond     → 'not' Cond
//!          | '(' Expr relop Expr ')' (('and'|'or') Cond)*
//!          | Expr relop Expr (('and'|'or') Cond)*
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use minipas_syntax::parser;
//!
//! let tree = parser::parse_expression("1 - 2 - 3").unwrap();
//! assert_eq!(tree.label(), "-");
//! assert_eq!(tree.children()[1].label(), "Number: 3");
//! ```

use crate::ast::SyntaxNode;
use crate::diagnostics::SyntaxError;
use crate::lexer::{Lexer, Token, TokenKind};
use minipas_core::lang::keywords::{self, KeywordId};
use minipas_core::lang::messages::{self, ConstructId, LabelId, Locale, MessageId};
use minipas_core::lang::operators;
use minipas_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/program.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/cond.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
