//! Parser for the Javelin programming language
//!
//! Converts source text into an AST by single-pass recursive descent. The
//! parser drives the pull-based [`Lexer`] directly, buffering at most two
//! tokens of lookahead; the grammar is backtracking-free.
//!
//! Parsing is fail-fast: the first [`CompileError`] aborts the parse.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use javelin_syntax::parser;
//!
//! let program = parser::parse("demo.jav", "public class Demo { }").unwrap();
//! assert_eq!(program.classes.len(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use javelin_core::lang::keywords::{self, KeywordId};
use javelin_core::lang::symbols::{self, SymbolId};

use crate::ast::*;
use crate::diagnostics::{CompileError, Source};
use crate::lexer::{Lexer, Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
