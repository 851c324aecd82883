//! Operator vocabulary.
//!
//! This module defines the symbol operators of minipas along with the metadata the parser needs to
//! classify them: the additive and multiplicative arithmetic operators, the assignment marker, and the
//! relational operators that make up the `relop` token class.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - Word operators (`and`, `or`, `not`, `mod`) are keywords, see [`crate::lang::keywords`].
//! - `!=` is accepted as a relational spelling next to `<>`.
//!
//! ## Examples
//! ```rust
//! use minipas_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<>"), Some(OperatorId::NotEq));
//! assert!(operators::is_relational(OperatorId::LtEq));
//! assert!(!operators::is_relational(OperatorId::Assign));
//! ```

/// Stable identifier for every symbol operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Assignment
    Assign,

    // Relational
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    BangEq,
}

/// Broad grouping used by the parser to decide which grammar rule owns an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    /// `+` and `-`, folded by `Expr`.
    Additive,
    /// `*` and `/`, folded by `Term` (together with the `mod` keyword).
    Multiplicative,
    Assignment,
    Relational,
}

/// Metadata for an operator.
///
/// Binding strength is encoded in the grammar (`Expr` over `Term` over `Factor`), not here.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    pub category: OperatorCategory,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", OperatorCategory::Additive),
    op(OperatorId::Minus, "-", OperatorCategory::Additive),
    op(OperatorId::Star, "*", OperatorCategory::Multiplicative),
    op(OperatorId::Slash, "/", OperatorCategory::Multiplicative),
    // Assignment
    op(OperatorId::Assign, ":=", OperatorCategory::Assignment),
    // Relational
    op(OperatorId::Eq, "=", OperatorCategory::Relational),
    op(OperatorId::NotEq, "<>", OperatorCategory::Relational),
    op(OperatorId::Lt, "<", OperatorCategory::Relational),
    op(OperatorId::LtEq, "<=", OperatorCategory::Relational),
    op(OperatorId::Gt, ">", OperatorCategory::Relational),
    op(OperatorId::GtEq, ">=", OperatorCategory::Relational),
    op(OperatorId::BangEq, "!=", OperatorCategory::Relational),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return `true` for members of the relational (`relop`) class.
pub fn is_relational(id: OperatorId) -> bool {
    category(id) == OperatorCategory::Relational
}

/// Return the full metadata for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == s).map(|o| o.id)
}

const fn op(id: OperatorId, canonical: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo { id, canonical, category }
}
