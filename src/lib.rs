#![forbid(unsafe_code)]
//! Javelin Programming Language Frontend
//!
//! Javelin is a small Java-like object-oriented language. The language
//! implementation lives in `javelin_core` (vocabulary registries) and
//! `javelin_syntax` (lexer, parser, AST, diagnostics); this crate is the
//! command-line driver on top of them.

pub mod cli;

pub use javelin_syntax::ast;
pub use javelin_syntax::diagnostics;
pub use javelin_syntax::lexer;
pub use javelin_syntax::parser;
