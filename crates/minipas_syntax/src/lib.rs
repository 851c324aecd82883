//! Syntax front end for minipas: tokenizer, parser, syntax tree, diagnostics.
//!
//! The tokenizer is pull-based: the parser asks for one token at a time and never sees a
//! pre-materialized token list. The parser is a one-token-lookahead recursive descent with one
//! procedure per grammar rule; the first syntax error ends the parse.
//!
//! ## Notes
//! - This crate is “syntax-only”: no scope resolution, no type checking, no code generation.
//! - Vocabulary identity (keywords/operators/punctuation) and all user-visible text come from
//!   `minipas_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use minipas_syntax::parser;
//!
//! let tree = parser::parse("program demo; begin x := 1 end.").unwrap();
//! assert_eq!(tree.label(), "Program");
//! assert_eq!(tree.children().len(), 3);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
