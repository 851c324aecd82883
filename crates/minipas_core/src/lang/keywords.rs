//! Define the reserved keyword vocabulary for the minipas language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) recording canonical spellings and a
//! coarse category.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Begin` is an identifier, `begin` is a keyword.
//! - Word operators (`and`, `or`, `not`, `mod`) are reserved words too. The parser treats them by
//!   keyword id; they never appear in [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use minipas_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::from_str("While"), None);
//! assert_eq!(keywords::as_str(KeywordId::Mod), "mod");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program structure
    Program,
    Begin,
    End,

    // Control flow
    If,
    Then,
    Else,
    While,
    Do,
    Break,

    // Word operators
    And,
    Or,
    Not,
    Mod,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Structure,
    ControlFlow,
    /// Logical connectives used inside conditions.
    Logical,
    /// Multiplicative word operator (`mod`).
    Arithmetic,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Program structure
    info(KeywordId::Program, "program", KeywordCategory::Structure),
    info(KeywordId::Begin, "begin", KeywordCategory::Structure),
    info(KeywordId::End, "end", KeywordCategory::Structure),
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Then, "then", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    // Word operators
    info(KeywordId::And, "and", KeywordCategory::Logical),
    info(KeywordId::Or, "or", KeywordCategory::Logical),
    info(KeywordId::Not, "not", KeywordCategory::Logical),
    info(KeywordId::Mod, "mod", KeywordCategory::Arithmetic),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a reserved word.
/// - `None` otherwise (the spelling is an ordinary identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
