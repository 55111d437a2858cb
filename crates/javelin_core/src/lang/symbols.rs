//! Symbol vocabulary.
//!
//! This module defines the canonical set of fixed symbols the lexer can produce:
//! delimiters, separators, and operators, each with a stable [`SymbolId`].
//!
//! ## Notes
//! - [`SYMBOLS`] is ordered longest spelling first so that [`match_at`] implements
//!   maximal munch directly: `++` is found before `+`, `<=` before `<`.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize
//!   source text.
//!
//! ## Examples
//! ```rust
//! use javelin_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(symbols::from_str("++"), Some(SymbolId::PlusPlus));
//! assert_eq!(symbols::as_str(SymbolId::Ellipsis), "...");
//! assert_eq!(symbols::match_at("+= 1").map(|s| s.id), Some(SymbolId::PlusEq));
//! ```

/// Stable identifier for symbol tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolId {
    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Separators / markers
    Comma,
    Dot,
    Ellipsis,
    Semicolon,
    Hash,
    Dollar,
    Question,
    Colon,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,

    // Logical
    AmpAmp,
    PipePipe,
    Not,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

/// Broad syntactic grouping for symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    Delimiter,
    Separator,
    Marker,
    Operator,
}

/// Metadata for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    pub id: SymbolId,
    pub spelling: &'static str,
    pub category: SymbolCategory,
}

/// Registry of all symbols, ordered longest spelling first.
///
/// The ordering IS semantically meaningful: [`match_at`] scans this table in
/// order, so longer spellings must come before their prefixes.
pub const SYMBOLS: &[SymbolInfo] = &[
    // Three characters
    info(SymbolId::Ellipsis, "...", SymbolCategory::Marker),
    // Two characters
    info(SymbolId::EqEq, "==", SymbolCategory::Operator),
    info(SymbolId::NotEq, "!=", SymbolCategory::Operator),
    info(SymbolId::LtEq, "<=", SymbolCategory::Operator),
    info(SymbolId::GtEq, ">=", SymbolCategory::Operator),
    info(SymbolId::AmpAmp, "&&", SymbolCategory::Operator),
    info(SymbolId::PipePipe, "||", SymbolCategory::Operator),
    info(SymbolId::PlusPlus, "++", SymbolCategory::Operator),
    info(SymbolId::MinusMinus, "--", SymbolCategory::Operator),
    info(SymbolId::PlusEq, "+=", SymbolCategory::Operator),
    info(SymbolId::MinusEq, "-=", SymbolCategory::Operator),
    info(SymbolId::StarEq, "*=", SymbolCategory::Operator),
    info(SymbolId::SlashEq, "/=", SymbolCategory::Operator),
    info(SymbolId::PercentEq, "%=", SymbolCategory::Operator),
    // One character
    info(SymbolId::LParen, "(", SymbolCategory::Delimiter),
    info(SymbolId::RParen, ")", SymbolCategory::Delimiter),
    info(SymbolId::LBracket, "[", SymbolCategory::Delimiter),
    info(SymbolId::RBracket, "]", SymbolCategory::Delimiter),
    info(SymbolId::LBrace, "{", SymbolCategory::Delimiter),
    info(SymbolId::RBrace, "}", SymbolCategory::Delimiter),
    info(SymbolId::Comma, ",", SymbolCategory::Separator),
    info(SymbolId::Dot, ".", SymbolCategory::Separator),
    info(SymbolId::Semicolon, ";", SymbolCategory::Separator),
    info(SymbolId::Hash, "#", SymbolCategory::Marker),
    info(SymbolId::Dollar, "$", SymbolCategory::Marker),
    info(SymbolId::Question, "?", SymbolCategory::Marker),
    info(SymbolId::Colon, ":", SymbolCategory::Marker),
    info(SymbolId::Eq, "=", SymbolCategory::Operator),
    info(SymbolId::Plus, "+", SymbolCategory::Operator),
    info(SymbolId::Minus, "-", SymbolCategory::Operator),
    info(SymbolId::Star, "*", SymbolCategory::Operator),
    info(SymbolId::Slash, "/", SymbolCategory::Operator),
    info(SymbolId::Percent, "%", SymbolCategory::Operator),
    info(SymbolId::Not, "!", SymbolCategory::Operator),
    info(SymbolId::Lt, "<", SymbolCategory::Operator),
    info(SymbolId::Gt, ">", SymbolCategory::Operator),
];

/// Canonical spelling for a symbol.
pub fn as_str(id: SymbolId) -> &'static str {
    info_for(id).spelling
}

/// Full metadata for a symbol.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: SymbolId) -> &'static SymbolInfo {
    SYMBOLS.iter().find(|s| s.id == id).expect("symbol info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<SymbolId> {
    SYMBOLS.iter().find(|sym| sym.spelling == s).map(|sym| sym.id)
}

/// Longest symbol matching a prefix of `input`, if any.
///
/// Because [`SYMBOLS`] is ordered longest first, the first hit is the
/// maximal-munch match.
pub fn match_at(input: &str) -> Option<&'static SymbolInfo> {
    SYMBOLS.iter().find(|sym| input.starts_with(sym.spelling))
}

const fn info(id: SymbolId, spelling: &'static str, category: SymbolCategory) -> SymbolInfo {
    SymbolInfo { id, spelling, category }
}
