//! Lexer for the Javelin programming language
//!
//! Handles tokenization including:
//! - Keywords, names, and typenames (casing-classified, see `javelin_core::lang::types`)
//! - Numeric and string literals (raw `r"..."` and triple-quoted forms)
//! - Symbols with maximal munch (`++` before `+`, `<=` before `<`)
//! - Line and block comments
//!
//! The lexer is pull-based: the parser drives it one token at a time through
//! `peek`/`advance`, and tokens are only scanned on demand. A whole-source
//! [`lex`] entrypoint materializes the full stream for testing and tooling.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token) and location rendering

pub mod tokens;

pub use tokens::{Token, TokenKind};

use std::sync::Arc;

use javelin_core::lang::{keywords, symbols, types};

use crate::diagnostics::{CompileError, Source};

/// Lexer for Javelin source code.
///
/// Holds an `Arc` to the source so every token it produces can render
/// diagnostics independently of the lexer's lifetime.
///
/// At end of input the lexer keeps producing `Eof` tokens; it never advances
/// past the end or errors after reaching it.
pub struct Lexer {
    source: Arc<Source>,
    pos: usize,
    peeked: Option<Token>,
}

impl Lexer {
    /// Create a new lexer for the given source buffer.
    pub fn new(source: Arc<Source>) -> Self {
        Self {
            source,
            pos: 0,
            peeked: None,
        }
    }

    /// Next unconsumed token, without advancing.
    pub fn peek(&mut self) -> Result<&Token, CompileError> {
        if self.peeked.is_none() {
            let token = self.scan_token()?;
            self.peeked = Some(token);
        }
        Ok(self.peeked.as_ref().expect("token was just scanned"))
    }

    /// Next unconsumed token, consuming it.
    pub fn advance(&mut self) -> Result<Token, CompileError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.scan_token(),
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn rest(&self) -> &str {
        &self.source.text[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_char_next(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn token(&self, start: usize, kind: TokenKind) -> Token {
        Token::new(&self.source, start, kind)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    /// Classification priority: trivia, strings, numbers, words, symbols.
    fn scan_token(&mut self) -> Result<Token, CompileError> {
        self.skip_trivia()?;
        let start = self.pos;

        let Some(c) = self.peek_char() else {
            return Ok(self.token(start, TokenKind::Eof));
        };

        if c == '"' || c == '\'' || (c == 'r' && matches!(self.peek_char_next(), Some('"' | '\''))) {
            return self.scan_string(start);
        }

        if c.is_ascii_digit()
            || (c == '.' && self.peek_char_next().is_some_and(|d| d.is_ascii_digit()))
        {
            return Ok(self.scan_number(start));
        }

        if is_word_char(c) {
            return Ok(self.scan_word(start));
        }

        if let Some(symbol) = symbols::match_at(self.rest()) {
            self.pos += symbol.spelling.len();
            return Ok(self.token(start, TokenKind::Symbol(symbol.id)));
        }

        let token = self.token(start, TokenKind::Error);
        Err(CompileError::new("Unrecognized token", &[token]))
    }

    /// Skip whitespace and comments. An unclosed `/*` is fatal.
    fn skip_trivia(&mut self) -> Result<(), CompileError> {
        loop {
            if self.rest().starts_with("//") {
                while let Some(c) = self.peek_char() {
                    if c == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else if self.rest().starts_with("/*") {
                let start = self.pos;
                self.pos += 2;
                while !self.rest().is_empty() && !self.rest().starts_with("*/") {
                    self.bump();
                }
                if self.rest().is_empty() {
                    let token = self.token(start, TokenKind::Error);
                    return Err(CompileError::new("Unterminated multiline comment", &[token]));
                }
                self.pos += 2;
            } else if matches!(self.peek_char(), Some(' ' | '\r' | '\n' | '\t')) {
                self.bump();
            } else {
                return Ok(());
            }
        }
    }

    // ========================================================================
    // Literal and word scanning
    // ========================================================================

    /// String literals: optional `r` raw marker, then `'`/`"` or the
    /// triple-quoted form of either. Escapes are decoded unless raw.
    fn scan_string(&mut self, start: usize) -> Result<Token, CompileError> {
        let raw = self.peek_char() == Some('r');
        if raw {
            self.bump();
        }
        let quote = self.peek_char().expect("quote checked by dispatch");
        let closing: &str = match (quote, self.rest().starts_with(triple(quote))) {
            (_, true) => triple(quote),
            ('"', false) => "\"",
            _ => "'",
        };
        self.pos += closing.len();

        let mut value = String::new();
        while !self.rest().is_empty() && !self.rest().starts_with(closing) {
            let Some(c) = self.peek_char() else { break };
            if !raw && c == '\\' {
                self.bump();
                let escape_pos = self.pos;
                let decoded = match self.peek_char() {
                    Some('t') => '\t',
                    Some('n') => '\n',
                    Some('f') => '\x0c',
                    Some('r') => '\r',
                    Some('\\') => '\\',
                    Some('\'') => '\'',
                    Some('"') => '"',
                    _ => {
                        let token = self.token(escape_pos, TokenKind::Error);
                        return Err(CompileError::new("Unrecognized string escape", &[token]));
                    }
                };
                value.push(decoded);
                self.bump();
            } else {
                value.push(c);
                self.bump();
            }
        }
        self.pos = (self.pos + closing.len()).min(self.source.text.len());
        Ok(self.token(start, TokenKind::Str(value)))
    }

    /// Numeric literals: digits, optionally one `.` and more digits. The
    /// payload stays raw text; decoding is the parser's job. A `.` marks the
    /// result FLOAT. Dispatch guarantees at least one digit is present.
    fn scan_number(&mut self, start: usize) -> Token {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        let mut found_dot = false;
        if self.peek_char() == Some('.') {
            found_dot = true;
            self.bump();
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }
        let text = self.source.text[start..self.pos].to_string();
        let kind = if found_dot {
            TokenKind::Float(text)
        } else {
            TokenKind::Int(text)
        };
        self.token(start, kind)
    }

    /// Word runs: keyword lookup first, then the typename casing rule, then
    /// plain NAME.
    fn scan_word(&mut self, start: usize) -> Token {
        while self.peek_char().is_some_and(is_word_char) {
            self.bump();
        }
        let text = &self.source.text[start..self.pos];
        let kind = if let Some(id) = keywords::from_str(text) {
            TokenKind::Keyword(id)
        } else if types::is_type_name(text) {
            TokenKind::TypeName(text.to_string())
        } else {
            TokenKind::Name(text.to_string())
        };
        self.token(start, kind)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn triple(quote: char) -> &'static str {
    if quote == '"' { "\"\"\"" } else { "'''" }
}

/// Tokenize a whole source buffer.
///
/// Returns the complete ordered token stream ending in exactly one `Eof`
/// token, or the first [`CompileError`] (never partial results).
#[tracing::instrument(skip_all, fields(uri = uri, source_len = text.len()))]
pub fn lex(uri: &str, text: &str) -> Result<Vec<Token>, CompileError> {
    let mut lexer = Lexer::new(Source::new(uri, text));
    let mut tokens = Vec::new();
    loop {
        let token = lexer.advance()?;
        let done = matches!(token.kind, TokenKind::Eof);
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelin_core::lang::symbols::SymbolId;
    use proptest::prelude::*;

    fn kinds(source: &str) -> String {
        let tokens = lex("<test>", source).unwrap();
        tokens
            .iter()
            .map(|t| t.kind.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn test_simple_example() {
        assert_eq!(
            kinds("aa Bb class 1 2.4 'hi' ++"),
            "NAME,TYPENAME,class,INT,FLOAT,STRING,++,EOF"
        );
    }

    #[test]
    fn test_positions() {
        let tokens = lex("<test>", "aa Bb\n  class").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![0, 3, 8, 13]);
        assert_eq!(tokens[2].line_number(), 2);
        assert_eq!(tokens[2].column_number(), 3);
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(kinds("++"), "++,EOF");
        assert_eq!(kinds("+ +"), "+,+,EOF");
        assert_eq!(kinds("<="), "<=,EOF");
        assert_eq!(kinds("<  ="), "<,=,EOF");
        assert_eq!(kinds("..."), "...,EOF");
    }

    #[test]
    fn test_typename_classification() {
        assert_eq!(kinds("MyClass"), "TYPENAME,EOF");
        assert_eq!(kinds("myVar"), "NAME,EOF");
        assert_eq!(kinds("CONST_NAME"), "NAME,EOF");
        assert_eq!(kinds("X"), "NAME,EOF");
        assert_eq!(kinds("HTTPServer"), "TYPENAME,EOF");
        assert_eq!(kinds("int"), "TYPENAME,EOF");
        assert_eq!(kinds("class"), "class,EOF");
    }

    #[test]
    fn test_keyword_registry_parity() {
        for info in keywords::KEYWORDS {
            let tokens = lex("<test>", info.spelling).unwrap();
            assert_eq!(
                tokens[0].kind,
                TokenKind::Keyword(info.id),
                "spelling {:?} did not lex to its keyword",
                info.spelling
            );
        }
    }

    #[test]
    fn test_symbol_registry_parity() {
        for info in symbols::SYMBOLS {
            let tokens = lex("<test>", info.spelling).unwrap();
            assert_eq!(tokens.len(), 2, "spelling {:?} lexed to several tokens", info.spelling);
            assert_eq!(
                tokens[0].kind,
                TokenKind::Symbol(info.id),
                "spelling {:?} did not lex to its symbol",
                info.spelling
            );
        }
    }

    #[test]
    fn test_string_literals() {
        let tokens = lex("<test>", r#" "hi" 'there' "#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Str("hi".to_string()));
        assert_eq!(tokens[1].kind, TokenKind::Str("there".to_string()));
    }

    #[test]
    fn test_string_escapes() {
        let tokens = lex("<test>", r#"'a\tb\nc\\d\'e\"f'"#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Str("a\tb\nc\\d'e\"f".to_string()));
    }

    #[test]
    fn test_raw_string_keeps_backslashes() {
        let tokens = lex("<test>", r#"r'a\nb'"#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Str("a\\nb".to_string()));
    }

    #[test]
    fn test_triple_quoted_string() {
        let tokens = lex("<test>", "'''line one\nline 'two' done'''").unwrap();
        assert_eq!(
            tokens[0].kind,
            TokenKind::Str("line one\nline 'two' done".to_string())
        );
    }

    #[test]
    fn test_unrecognized_escape() {
        let error = lex("<test>", r#"'\q'"#).unwrap_err();
        assert!(error.to_string().contains("Unrecognized string escape"));
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("<test>", "123 1.5 1. .5").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Int("123".to_string()));
        assert_eq!(tokens[1].kind, TokenKind::Float("1.5".to_string()));
        assert_eq!(tokens[2].kind, TokenKind::Float("1.".to_string()));
        assert_eq!(tokens[3].kind, TokenKind::Float(".5".to_string()));
    }

    #[test]
    fn test_bare_dot_is_a_symbol() {
        assert_eq!(kinds(". .."), ".,.,.,EOF");
        let tokens = lex("<test>", ".").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Symbol(SymbolId::Dot));
    }

    #[test]
    fn test_comments_skipped() {
        assert_eq!(kinds("a // rest of line\nb"), "NAME,NAME,EOF");
        assert_eq!(kinds("a /* span\nlines */ b"), "NAME,NAME,EOF");
    }

    #[test]
    fn test_unterminated_comment() {
        let error = lex("<test>", "a /* never closed").unwrap_err();
        assert!(error.to_string().contains("Unterminated multiline comment"));
    }

    #[test]
    fn test_unrecognized_token() {
        let error = lex("<test>", "a @ b").unwrap_err();
        assert!(error.to_string().contains("Unrecognized token"));
    }

    #[test]
    fn test_eof_idempotent() {
        let mut lexer = Lexer::new(Source::new("<test>", "x"));
        assert!(matches!(lexer.advance().unwrap().kind, TokenKind::Name(_)));
        assert_eq!(lexer.advance().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.peek().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.advance().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.advance().unwrap().kind, TokenKind::Eof);
    }

    proptest! {
        #[test]
        fn prop_lowercase_words_lex_as_names(word in "[a-z][a-z0-9_]{0,10}") {
            prop_assume!(keywords::from_str(&word).is_none());
            prop_assume!(!javelin_core::lang::types::is_primitive(&word));
            let tokens = lex("<prop>", &word).unwrap();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(&tokens[0].kind, &TokenKind::Name(word.clone()));
        }

        #[test]
        fn prop_digit_runs_lex_as_int(digits in "[0-9]{1,18}") {
            let tokens = lex("<prop>", &digits).unwrap();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(&tokens[0].kind, &TokenKind::Int(digits.clone()));
        }

        #[test]
        fn prop_lexing_never_panics(input in "\\PC{0,64}") {
            let _ = lex("<prop>", &input);
        }
    }
}
