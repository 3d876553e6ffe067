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

//! Bramble Name Analysis Library
//!
//! This library implements the name-analysis phase of the Bramble
//! front end: it walks a parsed program, builds scoped symbol tables,
//! binds every identifier use to its declaration and reports semantic
//! errors without aborting the traversal.
//!
//! # Modules
//!
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`analyzer`] - Symbol tables and the name-analysis traversal
//! - [`error`] - Diagnostics, error codes and reporting
//!
//! # Example
//!
//! ```
//! use bramble::analyzer;
//! use bramble::ast::{Decl, Ident, Program, Type, VarDecl};
//! use bramble::error::SourcePos;
//!
//! let x = Ident::new("x", SourcePos::new(1, 5));
//! let mut program = Program::new(vec![Decl::Var(VarDecl::new(Type::Int, x))]);
//!
//! let (table, diagnostics) = analyzer::analyze(&mut program);
//! assert!(diagnostics.is_empty());
//! assert!(table.lookup("x").is_some());
//! ```

pub mod analyzer;
pub mod ast;
pub mod error;

// Re-export commonly used types
pub use analyzer::{analyze, NameAnalyzer, StructSymbol, Symbol, SymbolTable};
pub use ast::{Program, Type};
pub use error::{render_diagnostic, Diagnostic, DiagnosticCode, Reporter, SourcePos};

/// The version of the Bramble front end.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the language.
pub const NAME: &str = "Bramble";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Bramble");
    }
}
