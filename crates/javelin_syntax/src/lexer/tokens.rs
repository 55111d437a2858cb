//! Token types for the Javelin lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Symbol(SymbolId)` for fixed symbols
//!
//! Identifier and literal kinds carry their text payload. INT/FLOAT payloads
//! stay raw: decoding to numeric values is the parser's job.
//!
//! ## Notes
//! - Every token holds an `Arc` to its [`Source`] plus its absolute byte
//!   offset; line/column/caret rendering is derived lazily from those, only
//!   when a diagnostic is actually produced.

use std::fmt;
use std::sync::Arc;

use javelin_core::lang::keywords::{self, KeywordId};
use javelin_core::lang::symbols::{self, SymbolId};

use crate::diagnostics::Source;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / symbol (ID-based) ==========
    Keyword(KeywordId),
    Symbol(SymbolId),

    // ========== Identifiers and literals ==========
    Name(String),
    TypeName(String),
    Int(String),
    Float(String),
    Str(String),

    // ========== Special ==========
    Error,
    Eof,
}

impl TokenKind {
    /// Identifier or literal payload, if this kind carries one.
    pub fn data(&self) -> Option<&str> {
        match self {
            TokenKind::Name(s)
            | TokenKind::TypeName(s)
            | TokenKind::Int(s)
            | TokenKind::Float(s)
            | TokenKind::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    /// Kind label: keyword/symbol spellings render as themselves, the rest as
    /// their classification name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => f.write_str(keywords::as_str(*id)),
            TokenKind::Symbol(id) => f.write_str(symbols::as_str(*id)),
            TokenKind::Name(_) => f.write_str("NAME"),
            TokenKind::TypeName(_) => f.write_str("TYPENAME"),
            TokenKind::Int(_) => f.write_str("INT"),
            TokenKind::Float(_) => f.write_str("FLOAT"),
            TokenKind::Str(_) => f.write_str("STRING"),
            TokenKind::Error => f.write_str("ERROR"),
            TokenKind::Eof => f.write_str("EOF"),
        }
    }
}

/// A token with its kind and absolute position in the source it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    source: Arc<Source>,
    /// Byte offset where the token begins; `0 <= pos <= source.text.len()`.
    pub pos: usize,
    pub kind: TokenKind,
}

impl Token {
    /// Construct a new token.
    pub fn new(source: &Arc<Source>, pos: usize, kind: TokenKind) -> Self {
        Self {
            source: Arc::clone(source),
            pos,
            kind,
        }
    }

    /// The source buffer this token was lexed from.
    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    /// 1-based line number, derived by counting newlines up to `pos`.
    pub fn line_number(&self) -> usize {
        self.source.text[..self.pos].matches('\n').count() + 1
    }

    /// 1-based column number within the line.
    pub fn column_number(&self) -> usize {
        self.pos - self.line_start() + 1
    }

    /// The full text of the line containing this token, without the newline.
    pub fn line_text(&self) -> &str {
        let start = self.line_start();
        let end = self.source.text[start..]
            .find('\n')
            .map_or(self.source.text.len(), |i| start + i);
        &self.source.text[start..end]
    }

    /// Caret-annotated location block, appended verbatim to compile error text.
    pub fn location_message(&self) -> String {
        format!(
            "\nin {}, line {}\n{}\n{}*",
            self.source.uri,
            self.line_number(),
            self.line_text(),
            " ".repeat(self.column_number() - 1)
        )
    }

    fn line_start(&self) -> usize {
        self.source.text[..self.pos].rfind('\n').map_or(0, |i| i + 1)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.data() {
            Some(data) => write!(f, "Token({}, {})", self.kind, data),
            None => write!(f, "Token({})", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_derivation() {
        let source = Source::new("<test>", "first\nsecond line\nthird");
        let token = Token::new(&source, 13, TokenKind::Name("line".to_string()));
        assert_eq!(token.line_number(), 2);
        assert_eq!(token.column_number(), 8);
        assert_eq!(token.line_text(), "second line");
        assert_eq!(
            token.location_message(),
            "\nin <test>, line 2\nsecond line\n       *"
        );
    }

    #[test]
    fn test_display() {
        let source = Source::new("<test>", "class foo");
        let keyword = Token::new(&source, 0, TokenKind::Keyword(KeywordId::Class));
        let name = Token::new(&source, 6, TokenKind::Name("foo".to_string()));
        let plus = Token::new(&source, 9, TokenKind::Symbol(SymbolId::PlusPlus));
        assert_eq!(keyword.to_string(), "Token(class)");
        assert_eq!(name.to_string(), "Token(NAME, foo)");
        assert_eq!(plus.to_string(), "Token(++)");
    }
}
