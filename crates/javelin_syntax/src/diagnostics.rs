//! Diagnostics for the Javelin frontend: source buffers and compile errors.
//!
//! Every failure in this crate is a [`CompileError`]: one human-readable message
//! plus a caret-annotated excerpt for each attributed token. The rendered text
//! format is stable and tests assert on it:
//!
//! ```text
//! Expected TYPENAME but got Token(NAME, foo)
//! in demo.jav, line 3
//! class foo {
//!       *
//! ```
//!
//! The miette `Diagnostic` layer is additive: the CLI gets fancy source-context
//! reports, while `Display` keeps the plain format above.

use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::lexer::tokens::Token;

/// A named, immutable source buffer.
///
/// Shared as `Arc<Source>`: every [`Token`] holds a clone so diagnostics can be
/// rendered after the lexer and parser are gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub uri: String,
    pub text: String,
}

impl Source {
    pub fn new(uri: impl Into<String>, text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            uri: uri.into(),
            text: text.into(),
        })
    }
}

/// The single structured failure type for lexing and parsing.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}{locations}")]
#[diagnostic(code(javelin::syntax))]
pub struct CompileError {
    message: String,
    /// Pre-rendered caret blocks, one per attributed token.
    locations: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{message}")]
    span: SourceSpan,
}

impl CompileError {
    /// Build an error attributing one or more tokens.
    ///
    /// The miette span points at the first token; the plain-text rendering
    /// concatenates a caret block for every token, in order.
    pub fn new(message: impl Into<String>, tokens: &[Token]) -> Self {
        let message = message.into();
        let locations: String = tokens.iter().map(Token::location_message).collect();
        let (src, span) = match tokens.first() {
            Some(token) => {
                let source = token.source();
                let len = source.text.len().saturating_sub(token.pos).min(1);
                (
                    NamedSource::new(source.uri.clone(), source.text.clone()),
                    SourceSpan::from(token.pos..token.pos + len),
                )
            }
            None => (NamedSource::new("<unknown>", String::new()), SourceSpan::from(0..0)),
        };
        Self {
            message,
            locations,
            src,
            span,
        }
    }

    /// The message without the location blocks.
    pub fn message(&self) -> &str {
        &self.message
    }
}
