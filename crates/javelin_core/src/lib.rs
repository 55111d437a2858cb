//! Shared language vocabulary for the Javelin compiler frontend and tooling.
//!
//! This crate is intentionally small and dependency-free. It holds the canonical
//! spellings of the language (keywords, symbols, primitive types) plus the
//! identifier classification rule, so the lexer, parser, and any future tooling
//! agree on a single source of truth.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no AST types.

pub mod lang;
