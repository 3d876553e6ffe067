// Bramble - Name analysis for the Bramble programming language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Expression AST nodes.
//!
//! Every node owns its children exclusively; the tree is acyclic. The
//! one mutable slot is [`Ident::symbol`], the resolved-symbol
//! back-reference the analyzer fills in for later phases.

use std::rc::Rc;

use crate::analyzer::Symbol;
use crate::error::SourcePos;

/// An identifier occurrence, either declaring or using a name.
#[derive(Debug, Clone)]
pub struct Ident {
    /// The identifier text.
    pub name: String,
    /// Where the identifier appears in the source.
    pub pos: SourcePos,
    /// The symbol this use resolved to. Unset until name analysis runs,
    /// and left unset when resolution fails.
    pub symbol: Option<Rc<Symbol>>,
}

impl Ident {
    /// Create a new, unresolved identifier.
    pub fn new(name: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            name: name.into(),
            pos,
            symbol: None,
        }
    }

    /// Check if this identifier has been bound to a symbol.
    pub fn is_resolved(&self) -> bool {
        self.symbol.is_some()
    }
}

/// Equality ignores the resolved-symbol back-reference: two identifiers
/// are the same written occurrence if name and position match.
impl PartialEq for Ident {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.pos == other.pos
    }
}

impl Eq for Ident {}

/// An expression.
#[derive(Debug, Clone)]
pub enum Expr {
    /// An integer literal.
    IntLit { value: i32, pos: SourcePos },

    /// A string literal.
    StrLit { value: String, pos: SourcePos },

    /// The literal `true`.
    True(SourcePos),

    /// The literal `false`.
    False(SourcePos),

    /// An identifier use.
    Ident(Ident),

    /// A field access, e.g. `base.field`.
    DotAccess { base: Box<Expr>, field: Ident },

    /// An assignment expression.
    Assign(AssignExpr),

    /// A function call.
    Call(CallExpr),

    /// A unary operation.
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// A binary operation.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// The source position of this expression's leftmost positioned
    /// leaf, used to anchor diagnostics on compound expressions.
    pub fn pos(&self) -> SourcePos {
        match self {
            Expr::IntLit { pos, .. } | Expr::StrLit { pos, .. } => *pos,
            Expr::True(pos) | Expr::False(pos) => *pos,
            Expr::Ident(id) => id.pos,
            Expr::DotAccess { base, .. } => base.pos(),
            Expr::Assign(assign) => assign.lhs.pos(),
            Expr::Call(call) => call.callee.pos,
            Expr::Unary { operand, .. } => operand.pos(),
            Expr::Binary { lhs, .. } => lhs.pos(),
        }
    }
}

/// An assignment, `lhs = rhs`.
///
/// Shared between the expression form and the assignment statement.
#[derive(Debug, Clone)]
pub struct AssignExpr {
    /// The assignment target.
    pub lhs: Box<Expr>,
    /// The assigned value.
    pub rhs: Box<Expr>,
}

impl AssignExpr {
    /// Create a new assignment.
    pub fn new(lhs: Expr, rhs: Expr) -> Self {
        Self {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// A call, `callee(args)`.
///
/// Shared between the expression form and the call statement.
#[derive(Debug, Clone)]
pub struct CallExpr {
    /// The called function's name.
    pub callee: Ident,
    /// The argument expressions, in order.
    pub args: Vec<Expr>,
}

impl CallExpr {
    /// Create a new call.
    pub fn new(callee: Ident, args: Vec<Expr>) -> Self {
        Self { callee, args }
    }
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation (`-x`).
    Neg,
    /// Logical NOT (`!x`).
    Not,
}

impl UnaryOp {
    /// Get a string representation of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Logical
    And,
    Or,

    // Comparison
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl BinaryOp {
    /// Get a string representation of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
