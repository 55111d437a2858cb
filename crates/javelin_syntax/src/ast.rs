//! AST node definitions for the Javelin language.
//!
//! One tagged union per node family ([`Stmt`], [`Expr`], [`Else`]) with struct
//! payloads for the named declaration kinds. Every node carries the [`Token`]
//! at which it begins, for error attribution; the tree is strictly
//! single-owner, rooted at [`Program`].
//!
//! ## Notes
//! - The expression schema is the canonical one: plain-variable assignment is
//!   [`Expr::Assign`], attribute reads/writes are the `*Attribute` variants,
//!   and everything operator-shaped (unary, binary, ternary, increment,
//!   compound assignment) is a single [`Expr::Operator`] distinguished by
//!   [`Op`] and arity.
//! - `Display` renders nodes back to source-like text via exhaustive matches.

use std::fmt;

use crate::lexer::tokens::Token;

// ============================================================================
// DECLARATIONS
// ============================================================================

/// Access modifier; defaults to `Public` when omitted in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Private,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Public => f.write_str("public"),
            Access::Private => f.write_str("private"),
        }
    }
}

/// Top-level container; owns all descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub token: Token,
    pub classes: Vec<Class>,
    pub interfaces: Vec<Interface>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub token: Token,
    pub access: Access,
    pub name: String,
    /// Base type name; `"Object"` when no `extends` clause is present.
    pub base: String,
    pub interfaces: Vec<String>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub token: Token,
    pub access: Access,
    pub name: String,
    pub bases: Vec<String>,
    pub stubs: Vec<MethodStub>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub token: Token,
    pub access: Access,
    pub is_static: bool,
    pub type_name: String,
    pub name: String,
    pub value: Option<Expr>,
}

/// Interface member: signature only, no body. Never private.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodStub {
    pub token: Token,
    pub access: Access,
    pub return_type: String,
    pub name: String,
    pub args: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub token: Token,
    pub access: Access,
    pub is_static: bool,
    pub return_type: String,
    pub name: String,
    pub args: Vec<Argument>,
    pub body: Block,
}

/// Typed parameter; no default values.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub token: Token,
    pub type_name: String,
    pub name: String,
}

// ============================================================================
// STATEMENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Block),
    If(If),
    While(While),
    For(For),
    Break { token: Token },
    Continue { token: Token },
    Return { token: Token, value: Option<Expr> },
    Declaration(Declaration),
    Expr(ExprStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub token: Token,
    pub condition: Expr,
    pub body: Block,
    pub alternate: Option<Else>,
}

/// Else branch: either a chained `else if` or a plain block.
#[derive(Debug, Clone, PartialEq)]
pub enum Else {
    If(Box<If>),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub token: Token,
    pub condition: Expr,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct For {
    pub token: Token,
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Expr>,
    pub increment: Option<Expr>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub token: Token,
    pub type_name: String,
    pub name: String,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub token: Token,
    pub expr: Expr,
}

impl Stmt {
    /// The token at which this statement begins.
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Block(block) => &block.token,
            Stmt::If(node) => &node.token,
            Stmt::While(node) => &node.token,
            Stmt::For(node) => &node.token,
            Stmt::Break { token } | Stmt::Continue { token } | Stmt::Return { token, .. } => token,
            Stmt::Declaration(node) => &node.token,
            Stmt::Expr(node) => &node.token,
        }
    }
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

/// Operator spellings for [`Expr::Operator`] nodes.
///
/// `Sub` doubles as unary negation when the node has a single operand;
/// `Inc`/`Dec` are always postfix and unary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Or,
    And,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Not,
    Inc,
    Dec,
    Ternary,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
}

impl Op {
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Or => "||",
            Op::And => "&&",
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Rem => "%",
            Op::Not => "!",
            Op::Inc => "++",
            Op::Dec => "--",
            Op::Ternary => "?:",
            Op::AddAssign => "+=",
            Op::SubAssign => "-=",
            Op::MulAssign => "*=",
            Op::DivAssign => "/=",
            Op::RemAssign => "%=",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    This { token: Token },
    Null { token: Token },
    Bool { token: Token, value: bool },
    Int { token: Token, value: i64 },
    Float { token: Token, value: f64 },
    Str { token: Token, value: String },
    Name { token: Token, name: String },
    Operator { token: Token, op: Op, args: Vec<Expr> },
    /// Plain-variable assignment, distinct from attribute assignment.
    Assign { token: Token, name: String, value: Box<Expr> },
    GetAttribute { token: Token, owner: Box<Expr>, name: String },
    SetAttribute { token: Token, owner: Box<Expr>, name: String, value: Box<Expr> },
    GetStaticAttribute { token: Token, class_name: String, name: String },
    SetStaticAttribute { token: Token, class_name: String, name: String, value: Box<Expr> },
    MethodCall { token: Token, owner: Box<Expr>, name: String, args: Vec<Expr> },
    StaticMethodCall { token: Token, class_name: String, name: String, args: Vec<Expr> },
    New { token: Token, class_name: String, args: Vec<Expr> },
}

impl Expr {
    /// The token at which this expression begins.
    pub fn token(&self) -> &Token {
        match self {
            Expr::This { token }
            | Expr::Null { token }
            | Expr::Bool { token, .. }
            | Expr::Int { token, .. }
            | Expr::Float { token, .. }
            | Expr::Str { token, .. }
            | Expr::Name { token, .. }
            | Expr::Operator { token, .. }
            | Expr::Assign { token, .. }
            | Expr::GetAttribute { token, .. }
            | Expr::SetAttribute { token, .. }
            | Expr::GetStaticAttribute { token, .. }
            | Expr::SetStaticAttribute { token, .. }
            | Expr::MethodCall { token, .. }
            | Expr::StaticMethodCall { token, .. }
            | Expr::New { token, .. } => token,
        }
    }
}

// ============================================================================
// PRETTY PRINTING
// ============================================================================

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expr]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::This { .. } => f.write_str("this"),
            Expr::Null { .. } => f.write_str("null"),
            Expr::Bool { value, .. } => write!(f, "{value}"),
            Expr::Int { value, .. } => write!(f, "{value}"),
            Expr::Float { value, .. } => write!(f, "{value}"),
            Expr::Str { value, .. } => write!(f, "{value:?}"),
            Expr::Name { name, .. } => f.write_str(name),
            Expr::Operator { op, args, .. } => match (op, args.as_slice()) {
                (Op::Ternary, [cond, consequent, alternate]) => {
                    write!(f, "({cond} ? {consequent} : {alternate})")
                }
                (Op::Inc | Op::Dec, [operand]) => write!(f, "{operand}{op}"),
                (_, [operand]) => write!(f, "{op}{operand}"),
                (_, [left, right]) => write!(f, "({left} {op} {right})"),
                _ => {
                    write!(f, "{op}(")?;
                    write_args(f, args)?;
                    f.write_str(")")
                }
            },
            Expr::Assign { name, value, .. } => write!(f, "{name} = {value}"),
            Expr::GetAttribute { owner, name, .. } => write!(f, "{owner}.{name}"),
            Expr::SetAttribute { owner, name, value, .. } => {
                write!(f, "{owner}.{name} = {value}")
            }
            Expr::GetStaticAttribute { class_name, name, .. } => write!(f, "{class_name}.{name}"),
            Expr::SetStaticAttribute { class_name, name, value, .. } => {
                write!(f, "{class_name}.{name} = {value}")
            }
            Expr::MethodCall { owner, name, args, .. } => {
                write!(f, "{owner}.{name}(")?;
                write_args(f, args)?;
                f.write_str(")")
            }
            Expr::StaticMethodCall { class_name, name, args, .. } => {
                write!(f, "{class_name}.{name}(")?;
                write_args(f, args)?;
                f.write_str(")")
            }
            Expr::New { class_name, args, .. } => {
                write!(f, "{class_name}(")?;
                write_args(f, args)?;
                f.write_str(")")
            }
        }
    }
}

fn indent(f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
    for _ in 0..level {
        f.write_str("  ")?;
    }
    Ok(())
}

impl Block {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        f.write_str("{\n")?;
        for stmt in &self.statements {
            indent(f, level + 1)?;
            stmt.fmt_indented(f, level + 1)?;
            f.write_str("\n")?;
        }
        indent(f, level)?;
        f.write_str("}")
    }
}

impl If {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        write!(f, "if ({}) ", self.condition)?;
        self.body.fmt_indented(f, level)?;
        match &self.alternate {
            Some(Else::If(chained)) => {
                f.write_str(" else ")?;
                chained.fmt_indented(f, level)
            }
            Some(Else::Block(block)) => {
                f.write_str(" else ")?;
                block.fmt_indented(f, level)
            }
            None => Ok(()),
        }
    }
}

impl Stmt {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        match self {
            Stmt::Block(block) => block.fmt_indented(f, level),
            Stmt::If(node) => node.fmt_indented(f, level),
            Stmt::While(node) => {
                write!(f, "while ({}) ", node.condition)?;
                node.body.fmt_indented(f, level)
            }
            Stmt::For(node) => {
                f.write_str("for (")?;
                match &node.init {
                    Some(init) => init.fmt_indented(f, level)?,
                    None => f.write_str(";")?,
                }
                match &node.condition {
                    Some(condition) => write!(f, " {condition};")?,
                    None => f.write_str(";")?,
                }
                if let Some(increment) = &node.increment {
                    write!(f, " {increment}")?;
                }
                f.write_str(") ")?;
                node.body.fmt_indented(f, level)
            }
            Stmt::Break { .. } => f.write_str("break;"),
            Stmt::Continue { .. } => f.write_str("continue;"),
            Stmt::Return { value: Some(value), .. } => write!(f, "return {value};"),
            Stmt::Return { value: None, .. } => f.write_str("return;"),
            Stmt::Declaration(node) => match &node.value {
                Some(value) => write!(f, "{} {} = {value};", node.type_name, node.name),
                None => write!(f, "{} {};", node.type_name, node.name),
            },
            Stmt::Expr(node) => write!(f, "{};", node.expr),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

fn write_arg_list(f: &mut fmt::Formatter<'_>, args: &[Argument]) -> fmt::Result {
    f.write_str("(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    f.write_str(")")
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} interface {}", self.access, self.name)?;
        if !self.bases.is_empty() {
            write!(f, " extends {}", self.bases.join(", "))?;
        }
        f.write_str(" {\n")?;
        for stub in &self.stubs {
            write!(f, "  {} {} {}", stub.access, stub.return_type, stub.name)?;
            write_arg_list(f, &stub.args)?;
            f.write_str(";\n")?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} class {} extends {}", self.access, self.name, self.base)?;
        if !self.interfaces.is_empty() {
            write!(f, " implements {}", self.interfaces.join(", "))?;
        }
        f.write_str(" {\n")?;
        for field in &self.fields {
            write!(f, "  {} ", field.access)?;
            if field.is_static {
                f.write_str("static ")?;
            }
            write!(f, "{} {}", field.type_name, field.name)?;
            if let Some(value) = &field.value {
                write!(f, " = {value}")?;
            }
            f.write_str(";\n")?;
        }
        for method in &self.methods {
            write!(f, "  {} ", method.access)?;
            if method.is_static {
                f.write_str("static ")?;
            }
            write!(f, "{} {}", method.return_type, method.name)?;
            write_arg_list(f, &method.args)?;
            f.write_str(" ")?;
            method.body.fmt_indented(f, 1)?;
            f.write_str("\n")?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for interface in &self.interfaces {
            if !first {
                f.write_str("\n\n")?;
            }
            first = false;
            write!(f, "{interface}")?;
        }
        for class in &self.classes {
            if !first {
                f.write_str("\n\n")?;
            }
            first = false;
            write!(f, "{class}")?;
        }
        Ok(())
    }
}
