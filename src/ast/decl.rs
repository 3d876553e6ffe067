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

//! Declaration AST nodes.

use super::{Ident, Stmt, Type};

/// A declaration.
#[derive(Debug, Clone)]
pub enum Decl {
    /// A variable declaration.
    Var(VarDecl),
    /// A function declaration.
    Function(FunctionDecl),
    /// A struct type declaration.
    Struct(StructDecl),
}

/// A variable declaration, e.g. `int x;` or `struct Point p;`.
///
/// Whether this declares a struct-typed variable is carried by the type
/// itself (`Type::Struct`).
#[derive(Debug, Clone)]
pub struct VarDecl {
    /// The declared type.
    pub ty: Type,
    /// The declared name.
    pub name: Ident,
}

impl VarDecl {
    /// Create a new variable declaration.
    pub fn new(ty: Type, name: Ident) -> Self {
        Self { ty, name }
    }
}

/// A function declaration with its body.
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    /// The declared return type.
    pub return_type: Type,
    /// The function name.
    pub name: Ident,
    /// The formal parameters, in order. Order is significant: it is the
    /// parameter signature recorded on the function's symbol.
    pub formals: Vec<FormalDecl>,
    /// The function body.
    pub body: FnBody,
}

impl FunctionDecl {
    /// Create a new function declaration.
    pub fn new(return_type: Type, name: Ident, formals: Vec<FormalDecl>, body: FnBody) -> Self {
        Self {
            return_type,
            name,
            formals,
            body,
        }
    }
}

/// A formal parameter declaration.
#[derive(Debug, Clone)]
pub struct FormalDecl {
    /// The parameter type.
    pub ty: Type,
    /// The parameter name.
    pub name: Ident,
}

impl FormalDecl {
    /// Create a new formal parameter.
    pub fn new(ty: Type, name: Ident) -> Self {
        Self { ty, name }
    }
}

/// A function body: local declarations followed by statements.
#[derive(Debug, Clone, Default)]
pub struct FnBody {
    /// Local declarations, in declaration order.
    pub decls: Vec<Decl>,
    /// Statements, in execution order.
    pub stmts: Vec<Stmt>,
}

impl FnBody {
    /// Create a new function body.
    pub fn new(decls: Vec<Decl>, stmts: Vec<Stmt>) -> Self {
        Self { decls, stmts }
    }
}

/// A struct type declaration, e.g. `struct Point { int x; int y; };`.
#[derive(Debug, Clone)]
pub struct StructDecl {
    /// The struct type name.
    pub name: Ident,
    /// The field declarations. Fields share one flat scope; there is no
    /// nested block inside a struct body.
    pub fields: Vec<Decl>,
}

impl StructDecl {
    /// Create a new struct declaration.
    pub fn new(name: Ident, fields: Vec<Decl>) -> Self {
        Self { name, fields }
    }
}
