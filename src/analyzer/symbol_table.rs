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

//! The scoped symbol table.
//!
//! The table is a stack of scope frames plus one distinguished struct
//! namespace. Ordinary declarations live in frames and may shadow outer
//! frames; struct type names live in the namespace, which nested tables
//! can share by reference so that a struct's field table sees every
//! struct type visible in the enclosing program.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use super::scope::Scope;
use super::symbol::Symbol;

/// The struct-type namespace, shareable by reference between tables.
///
/// Both the program table and every struct's field table alias the same
/// backing map, so a registration through either is visible to all.
pub type StructNamespace = Rc<RefCell<HashMap<String, Rc<Symbol>>>>;

/// Errors from symbol-table operations.
///
/// These are contract results consumed by the caller, not user-facing
/// diagnostics: `DuplicateName` is the expected outcome the analyzer
/// turns into a report, while `InvalidArgument` and `EmptyTable` signal
/// a bug in the traversal itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The name is already declared in the relevant namespace.
    #[error("duplicate declaration of '{0}'")]
    DuplicateName(String),
    /// An empty name was passed to a declare operation.
    #[error("symbol name must not be empty")]
    InvalidArgument,
    /// The scope stack was empty.
    #[error("scope stack is empty")]
    EmptyTable,
}

/// A scoped symbol table with a shared struct namespace.
#[derive(Debug)]
pub struct SymbolTable {
    /// The scope stack (innermost scope last).
    scopes: Vec<Scope>,
    /// Struct type definitions, independent of the scope stack.
    structs: StructNamespace,
}

impl SymbolTable {
    /// Create a new symbol table with one scope frame and a fresh
    /// struct namespace.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new()],
            structs: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Declare an ordinary name in the topmost scope frame.
    ///
    /// Collides against the topmost frame and the full struct
    /// namespace; enclosing frames may be shadowed. On collision the
    /// existing entry is kept.
    pub fn declare(&mut self, name: &str, symbol: Rc<Symbol>) -> Result<(), TableError> {
        if name.is_empty() {
            return Err(TableError::InvalidArgument);
        }
        if self.structs.borrow().contains_key(name) {
            return Err(TableError::DuplicateName(name.to_string()));
        }
        let scope = self.scopes.last_mut().ok_or(TableError::EmptyTable)?;
        scope
            .define(name, symbol)
            .map_err(|_| TableError::DuplicateName(name.to_string()))
    }

    /// Declare a struct type name in the struct namespace.
    ///
    /// Collides against the struct namespace and a full-stack lookup of
    /// ordinary names: a struct may not share a name with any visible
    /// variable or function.
    pub fn declare_struct(&mut self, name: &str, symbol: Rc<Symbol>) -> Result<(), TableError> {
        if name.is_empty() {
            return Err(TableError::InvalidArgument);
        }
        if self.structs.borrow().contains_key(name) || self.lookup(name).is_some() {
            return Err(TableError::DuplicateName(name.to_string()));
        }
        self.structs.borrow_mut().insert(name.to_string(), symbol);
        Ok(())
    }

    /// Push a new scope frame.
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the topmost scope frame, discarding its declarations.
    ///
    /// Fails with [`TableError::EmptyTable`] only when the stack is
    /// already empty, which indicates mismatched push/pop call sites.
    pub fn pop_scope(&mut self) -> Result<(), TableError> {
        self.scopes.pop().map(|_| ()).ok_or(TableError::EmptyTable)
    }

    /// Look up a name in the topmost scope frame only.
    pub fn lookup_local(&self, name: &str) -> Option<Rc<Symbol>> {
        self.scopes.last().and_then(|scope| scope.lookup(name))
    }

    /// Look up a name from the innermost to the outermost frame,
    /// returning the first match (innermost shadows outermost).
    pub fn lookup(&self, name: &str) -> Option<Rc<Symbol>> {
        self.scopes.iter().rev().find_map(|scope| scope.lookup(name))
    }

    /// Look up a struct type name in the struct namespace.
    pub fn lookup_struct(&self, name: &str) -> Option<Rc<Symbol>> {
        self.structs.borrow().get(name).map(Rc::clone)
    }

    /// Replace this table's struct namespace with a reference to
    /// `other`'s, so both observe future insertions identically.
    ///
    /// Used once per struct declaration, to link the new field table to
    /// the enclosing program's namespace.
    pub fn share_struct_namespace(&mut self, other: &SymbolTable) {
        self.structs = Rc::clone(&other.structs);
    }

    /// Get the current scope depth.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
