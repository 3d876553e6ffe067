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

//! A single scope frame of the symbol table.

use std::collections::HashMap;
use std::rc::Rc;

use super::symbol::Symbol;

/// One lexical scope: a mapping from declared names to their symbols.
/// Insertion order within a frame is not significant.
#[derive(Debug, Default)]
pub struct Scope {
    symbols: HashMap<String, Rc<Symbol>>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a symbol in this scope.
    ///
    /// On a name collision the incumbent symbol is kept and returned as
    /// the error value; the new symbol is discarded.
    pub fn define(&mut self, name: &str, symbol: Rc<Symbol>) -> Result<(), Rc<Symbol>> {
        if let Some(existing) = self.symbols.get(name) {
            return Err(Rc::clone(existing));
        }
        self.symbols.insert(name.to_string(), symbol);
        Ok(())
    }

    /// Look up a symbol in this scope.
    pub fn lookup(&self, name: &str) -> Option<Rc<Symbol>> {
        self.symbols.get(name).map(Rc::clone)
    }

    /// Check if this scope defines a name.
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }
}
