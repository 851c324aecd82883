#![forbid(unsafe_code)]
//! minipas: a front end for a small Pascal-like teaching language
//!
//! This crate ties the workspace together: the tokenizer, parser and syntax tree live in
//! `minipas_syntax`, the vocabulary and message catalog in `minipas_core`, and this crate adds the
//! command-line driver and its configuration.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a front-end bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;
pub mod config;

pub use minipas_core::lang::messages::Locale;
pub use minipas_syntax::ast;
pub use minipas_syntax::diagnostics;
pub use minipas_syntax::lexer;
pub use minipas_syntax::parser;

pub use config::FrontendConfig;
