//! minipas language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`, `MessageId`,
//! `LabelId`) and look up spellings or localized text through the registry tables instead of
//! comparing strings at every call site.
//!
//! ## Examples
//! ```rust
//! use minipas_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("begin"), Some(KeywordId::Begin));
//! assert_eq!(keywords::as_str(KeywordId::Begin), "begin");
//! ```

pub mod keywords;
pub mod messages;
pub mod operators;
pub mod punctuation;
