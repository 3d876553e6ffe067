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

//! Statement AST nodes.
//!
//! Control structures own their nested declaration list and statement
//! list directly; each branch opens one scope during analysis.

use super::{AssignExpr, CallExpr, Decl, Expr};

/// A statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// An assignment statement, `lhs = rhs;`.
    Assign(AssignExpr),

    /// A pre-increment, `++x;`.
    PreIncrement(Expr),

    /// A pre-decrement, `--x;`.
    PreDecrement(Expr),

    /// An input statement, `receive >> x;`.
    Receive(Expr),

    /// An output statement, `print << e;`.
    Print(Expr),

    /// An if statement without an else branch.
    If {
        cond: Expr,
        decls: Vec<Decl>,
        stmts: Vec<Stmt>,
    },

    /// An if statement with an else branch.
    IfElse {
        cond: Expr,
        then_decls: Vec<Decl>,
        then_stmts: Vec<Stmt>,
        else_decls: Vec<Decl>,
        else_stmts: Vec<Stmt>,
    },

    /// A while loop.
    While {
        cond: Expr,
        decls: Vec<Decl>,
        stmts: Vec<Stmt>,
    },

    /// A repeat loop, `repeat (n) { ... }`.
    Repeat {
        cond: Expr,
        decls: Vec<Decl>,
        stmts: Vec<Stmt>,
    },

    /// A call statement, `f(a, b);`.
    Call(CallExpr),

    /// A return statement with an optional value.
    Return(Option<Expr>),
}
