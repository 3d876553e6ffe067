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

//! Type annotations as they appear in declarations.

use super::Ident;

/// A type written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Integer.
    Int,
    /// Boolean.
    Bool,
    /// Void (legal only as a function return type).
    Void,
    /// A named struct type, e.g. `struct Point p;`.
    Struct(Ident),
}

impl Type {
    /// The canonical type-name string, used as the symbol-table key.
    ///
    /// For struct types this is the bare struct name, which is also the
    /// key into the struct namespace.
    pub fn type_name(&self) -> &str {
        match self {
            Type::Int => "int",
            Type::Bool => "bool",
            Type::Void => "void",
            Type::Struct(id) => &id.name,
        }
    }

    /// Check if this is the void type.
    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// Check if this is a struct type.
    pub fn is_struct(&self) -> bool {
        matches!(self, Type::Struct(_))
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Struct(id) => write!(f, "struct {}", id.name),
            other => write!(f, "{}", other.type_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourcePos;

    #[test]
    fn test_type_names() {
        assert_eq!(Type::Int.type_name(), "int");
        assert_eq!(Type::Bool.type_name(), "bool");
        assert_eq!(Type::Void.type_name(), "void");

        let ty = Type::Struct(Ident::new("Point", SourcePos::new(1, 8)));
        assert_eq!(ty.type_name(), "Point");
        assert_eq!(format!("{}", ty), "struct Point");
    }

    #[test]
    fn test_type_predicates() {
        assert!(Type::Void.is_void());
        assert!(!Type::Int.is_void());
        assert!(Type::Struct(Ident::new("P", SourcePos::new(1, 1))).is_struct());
        assert!(!Type::Bool.is_struct());
    }
}
