//! Javelin language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords,
//! fixed symbols, and the primitive-type / typename classification rule.
//!
//! The design goal is to avoid stringly-typed checks scattered across the frontend.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `SymbolId`) and look up
//! spellings via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and classification
//!   for shared use (diagnostics, docs, highlighting).
//!
//! ## Examples
//! ```rust
//! use javelin_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("class"), Some(KeywordId::Class));
//! assert_eq!(keywords::as_str(KeywordId::Class), "class");
//! ```

pub mod keywords;
pub mod symbols;
pub mod types;
