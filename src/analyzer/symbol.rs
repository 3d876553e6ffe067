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

//! Symbol definitions: what the table stores for each declared name.
//!
//! Symbols are immutable once constructed and shared as `Rc<Symbol>`.
//! A variable declared with a struct type stores a clone of the same
//! `Rc` the struct namespace holds, so dot access through the variable
//! reaches the struct's own field table by identity, not by copy.

use std::cell::RefCell;
use std::rc::Rc;

use super::symbol_table::SymbolTable;

/// A symbol table entry.
#[derive(Debug)]
pub enum Symbol {
    /// A variable or field of a non-struct type.
    Var {
        /// The declared type name (`int`, `bool`).
        type_name: String,
    },
    /// A function.
    Function {
        /// The declared return type name.
        return_type: String,
        /// The parameter type names, in declaration order. Order is
        /// significant; call-site checking is a downstream concern.
        params: Vec<String>,
    },
    /// A struct type definition, or a variable declared with one.
    Struct(Rc<StructSymbol>),
}

impl Symbol {
    /// Create a variable symbol.
    pub fn var(type_name: impl Into<String>) -> Self {
        Symbol::Var {
            type_name: type_name.into(),
        }
    }

    /// Create a function symbol.
    pub fn function(return_type: impl Into<String>, params: Vec<String>) -> Self {
        Symbol::Function {
            return_type: return_type.into(),
            params,
        }
    }

    /// Create a struct symbol.
    pub fn struct_type(def: Rc<StructSymbol>) -> Self {
        Symbol::Struct(def)
    }

    /// Get the struct definition if this symbol is struct-typed.
    pub fn as_struct(&self) -> Option<&Rc<StructSymbol>> {
        match self {
            Symbol::Struct(def) => Some(def),
            _ => None,
        }
    }

    /// Check if this symbol is struct-typed.
    pub fn is_struct(&self) -> bool {
        matches!(self, Symbol::Struct(_))
    }

    /// The declared type name: the variable's type, the struct's name,
    /// or `func` for functions (whose full signature is in `Display`).
    pub fn type_name(&self) -> &str {
        match self {
            Symbol::Var { type_name } => type_name,
            Symbol::Function { .. } => "func",
            Symbol::Struct(def) => &def.name,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Var { type_name } => write!(f, "{}", type_name),
            Symbol::Function {
                return_type,
                params,
            } => write!(f, "{} -> {}", params.join(", "), return_type),
            Symbol::Struct(def) => write!(f, "{}", def.name),
        }
    }
}

/// A struct type definition.
///
/// The field table is created once, when the struct declaration is
/// processed, and is never replaced: it is the struct type's permanent
/// field namespace. `RefCell` exists only so the fields can be declared
/// after the symbol is registered, which self-referential structs
/// (`struct P { struct P next; }`) require.
#[derive(Debug)]
pub struct StructSymbol {
    /// The struct type name.
    pub name: String,
    /// The field table: one flat scope listing the struct's members.
    pub fields: RefCell<SymbolTable>,
}

impl StructSymbol {
    /// Create a struct definition with an empty field table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: RefCell::new(SymbolTable::new()),
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<Rc<Symbol>> {
        self.fields.borrow().lookup(name)
    }
}
