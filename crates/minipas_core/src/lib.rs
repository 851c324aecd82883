//! Provide the canonical vocabulary of the minipas teaching language.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that both the
//! tokenizer and the parser consult (keywords, operators, punctuation) and the localized catalog of
//! diagnostic messages and syntax-tree labels.
//!
//! ## Notes
//!
//! - Registries are **pure**: no IO, no global state, no syntax-tree types.
//! - Syntax legality is owned by `minipas_syntax`; this crate only names things.

pub mod lang;
