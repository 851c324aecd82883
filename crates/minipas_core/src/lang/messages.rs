//! Localized message catalog.
//!
//! Every user-visible string the front end produces is keyed by a stable id: diagnostic messages
//! ([`MessageId`]), syntax-tree labels ([`LabelId`]), names of expected constructs
//! ([`ConstructId`]) and the driver verdict ([`Verdict`]). Each entry carries an English and a
//! Chinese rendering; [`Locale`] picks one.
//!
//! ## Notes
//! - English is the default locale.
//! - The catalog holds text only. Deciding *when* a message applies is the parser's job.
//!
//! ## Examples
//! ```rust
//! use minipas_core::lang::messages::{self, LabelId, Locale, MessageId};
//!
//! assert_eq!(messages::label(LabelId::Variable, Locale::En, Some("x")), "Variable: x");
//! assert_eq!(messages::label(LabelId::Variable, Locale::Zh, Some("x")), "变量: x");
//! assert_eq!(messages::message(MessageId::MissingRelop, Locale::En), "condition is missing a relational operator");
//! ```

use std::fmt;
use std::str::FromStr;

/// Output language for diagnostics and tree labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Short tag accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a locale tag is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale '{}' (expected 'en' or 'zh')", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "zh" | "cn" | "chinese" => Ok(Locale::Zh),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// A pair of renderings for one catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct Text {
    pub en: &'static str,
    pub zh: &'static str,
}

impl Text {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Zh => self.zh,
        }
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Stable identifier for every diagnostic the parser can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    ProgramKeyword,
    ProgramName,
    ProgramSemicolon,
    ProgramDot,
    StatementStartsWithNumber,
    ExpectedStatement,
    AssignTarget,
    ExpectedFactor,
    ParenConditionWithoutRelop,
    MalformedParenCondition,
    MissingRelop,
    TrailingContent,
    /// Generic mismatch raised by `expect`; rendered through [`expected`].
    Expected,
}

#[derive(Debug, Clone, Copy)]
pub struct MessageInfo {
    pub id: MessageId,
    pub text: Text,
}

/// Registry of diagnostic messages.
pub const MESSAGES: &[MessageInfo] = &[
    msg(
        MessageId::ProgramKeyword,
        "a program must start with the 'program' keyword",
        "程序必须以program关键字开始",
    ),
    msg(
        MessageId::ProgramName,
        "'program' must be followed by the program name",
        "program后必须跟程序名",
    ),
    msg(
        MessageId::ProgramSemicolon,
        "the program name must be followed by a semicolon",
        "程序名后必须有分号",
    ),
    msg(MessageId::ProgramDot, "a program must end with a dot", "程序必须以点号结束"),
    msg(
        MessageId::StatementStartsWithNumber,
        "a statement cannot start with a number; the assignment target is likely malformed",
        "语句不能以数字开头，可能是赋值语句左值错误",
    ),
    msg(
        MessageId::ExpectedStatement,
        "expected an assignment, if statement, while statement, break statement or block",
        "应为赋值语句、if语句、while语句、break语句或语句块",
    ),
    msg(
        MessageId::AssignTarget,
        "the assignment target must be an identifier",
        "赋值语句左值必须是标识符",
    ),
    msg(
        MessageId::ExpectedFactor,
        "expected a number, variable, or parenthesized expression",
        "应为数字、变量或括号表达式",
    ),
    msg(
        MessageId::ParenConditionWithoutRelop,
        "a parenthesized condition must contain a relational operator",
        "括号内的条件表达式必须包含关系运算符",
    ),
    msg(
        MessageId::MalformedParenCondition,
        "malformed parenthesized condition",
        "括号内的条件表达式格式错误",
    ),
    msg(
        MessageId::MissingRelop,
        "condition is missing a relational operator",
        "条件表达式中缺少关系运算符",
    ),
    msg(
        MessageId::TrailingContent,
        "unexpected content after the end of the program",
        "程序结束后有多余内容",
    ),
    msg(MessageId::Expected, "expected '{}'", "应为 '{}'"),
];

/// Return the localized text for a diagnostic.
///
/// ## Notes
/// - [`MessageId::Expected`] is a template; use [`expected`] to fill it in.
pub fn message(id: MessageId, locale: Locale) -> &'static str {
    MESSAGES
        .iter()
        .find(|m| m.id == id)
        .expect("INVARIANT: every MessageId has a catalog entry")
        .text
        .get(locale)
}

/// Render the generic "expected '<construct>'" diagnostic.
pub fn expected(construct: &str, locale: Locale) -> String {
    message(MessageId::Expected, locale).replacen("{}", construct, 1)
}

/// Render the one-line error report shown to users.
pub fn error_report(locale: Locale, message: &str, line: usize, col: usize, found: &str) -> String {
    match locale {
        Locale::En => format!("error: {message} (at line {line}, column {col}, found '{found}')"),
        Locale::Zh => format!("错误：{message}（在行 {line}, 列 {col}，遇到 '{found}'）"),
    }
}

// ============================================================================
// Expected-construct names
// ============================================================================

/// Constructs that have a localized name in "expected ..." diagnostics.
///
/// Keywords, operators and parentheses are named by their spelling and need no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructId {
    Semicolon,
    Dot,
    Identifier,
    RelationalOperator,
    /// Fallback for token kinds without a dedicated name.
    Symbol,
}

/// Return the localized name of an expected construct.
pub fn construct(id: ConstructId, locale: Locale) -> &'static str {
    let text = match id {
        ConstructId::Semicolon => Text { en: "semicolon", zh: "分号" },
        ConstructId::Dot => Text { en: "dot", zh: "点号" },
        ConstructId::Identifier => Text {
            en: "identifier",
            zh: "标识符",
        },
        ConstructId::RelationalOperator => Text {
            en: "relational operator",
            zh: "关系运算符",
        },
        ConstructId::Symbol => Text {
            en: "specific symbol",
            zh: "特定符号",
        },
    };
    text.get(locale)
}

// ============================================================================
// Syntax-tree labels
// ============================================================================

/// Stable identifier for every kind of syntax-tree label.
///
/// Arithmetic operator nodes are labeled with the operator text itself and have no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelId {
    Program,
    Keyword,
    ProgramName,
    Block,
    StatementList,
    CompoundStatement,
    Assignment,
    AssignTarget,
    IfStatement,
    WhileStatement,
    BreakStatement,
    Number,
    Variable,
    Condition,
    Relop,
    Not,
    Logical,
}

#[derive(Debug, Clone, Copy)]
pub struct LabelInfo {
    pub id: LabelId,
    pub text: Text,
}

/// Registry of tree labels.
pub const LABELS: &[LabelInfo] = &[
    lbl(LabelId::Program, "Program", "程序"),
    lbl(LabelId::Keyword, "Keyword", "关键字"),
    lbl(LabelId::ProgramName, "Program name", "程序名"),
    lbl(LabelId::Block, "Block", "块"),
    lbl(LabelId::StatementList, "Statement list", "语句列表"),
    lbl(LabelId::CompoundStatement, "Compound statement", "语句块"),
    lbl(LabelId::Assignment, "Assignment", "赋值语句"),
    lbl(LabelId::AssignTarget, "Target", "左值"),
    lbl(LabelId::IfStatement, "If statement", "If语句"),
    lbl(LabelId::WhileStatement, "While statement", "While语句"),
    lbl(LabelId::BreakStatement, "Break statement", "Break语句"),
    lbl(LabelId::Number, "Number", "数字"),
    lbl(LabelId::Variable, "Variable", "变量"),
    lbl(LabelId::Condition, "Condition", "条件表达式"),
    lbl(LabelId::Relop, "Relop", "关系符"),
    lbl(LabelId::Not, "Not", "逻辑非"),
    lbl(LabelId::Logical, "Logical", "逻辑符"),
];

/// Render a tree label, optionally followed by `": <detail>"`.
pub fn label(id: LabelId, locale: Locale, detail: Option<&str>) -> String {
    let name = LABELS
        .iter()
        .find(|l| l.id == id)
        .expect("INVARIANT: every LabelId has a catalog entry")
        .text
        .get(locale);
    match detail {
        Some(detail) => format!("{name}: {detail}"),
        None => name.to_string(),
    }
}

// ============================================================================
// Driver verdicts
// ============================================================================

/// Outcome line written by the driver before the tree or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

pub fn verdict(v: Verdict, locale: Locale) -> &'static str {
    let text = match v {
        Verdict::Accepted => Text {
            en: "The program is correct.",
            zh: "该程序是正确的。",
        },
        Verdict::Rejected => Text {
            en: "The program has syntax errors.",
            zh: "该程序有语法错误。",
        },
    };
    text.get(locale)
}

// --- helpers -----------------------------------------------------------------

const fn msg(id: MessageId, en: &'static str, zh: &'static str) -> MessageInfo {
    MessageInfo { id, text: Text { en, zh } }
}

const fn lbl(id: LabelId, en: &'static str, zh: &'static str) -> LabelInfo {
    LabelInfo { id, text: Text { en, zh } }
}
