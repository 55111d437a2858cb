//! Syntax frontend for the Javelin language: lexer, parser, AST, diagnostics.
//!
//! Javelin is a small Java-like object-oriented language. This crate covers the
//! whole front half of its compiler: turning source text into tokens, and tokens
//! into an abstract syntax tree. There is no semantic analysis here.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no name resolution, no type
//!   checking, no lowering.
//! - Vocabulary identity (keywords/symbols/primitives) comes from
//!   `javelin_core::lang` registries.
//! - Parsing is fail-fast: the first error aborts with a [`diagnostics::CompileError`].
//!
//! ## Examples
//! ```rust,no_run
//! use javelin_syntax::parser;
//!
//! let program = parser::parse("demo.jav", "public class Demo { }").unwrap();
//! assert_eq!(program.classes.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
