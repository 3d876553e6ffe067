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

//! Abstract Syntax Tree (AST) definitions for the Bramble language.
//!
//! The tree is organized as one closed enum per syntactic category
//! (declarations, types, statements, expressions), so a traversal is a
//! total match over variants. Nodes carry only source positions and
//! owned children; the parser produces the tree, and name analysis
//! annotates identifier uses in place.

mod decl;
mod expr;
mod stmt;
mod types;

pub use decl::*;
pub use expr::*;
pub use stmt::*;
pub use types::*;

/// A complete Bramble program: a list of top-level declarations.
#[derive(Debug, Clone, Default)]
pub struct Program {
    /// Top-level declarations, in declaration order.
    pub decls: Vec<Decl>,
}

impl Program {
    /// Create a new empty program.
    pub fn new(decls: Vec<Decl>) -> Self {
        Self { decls }
    }
}
