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

//! Name analysis for the Bramble language.
//!
//! One depth-first pass over the AST that:
//! - builds a scoped symbol table describing every declared name,
//! - binds every identifier use to the declaration it refers to, and
//! - reports semantic errors through an injected [`Reporter`].
//!
//! Analysis never stops at the first error: each failing node
//! contributes a "no symbol / no table" result and the walk continues,
//! so a single run surfaces every reachable error.

mod declarations;
mod expressions;
mod scope;
mod statements;
mod symbol;
mod symbol_table;

pub use declarations::DeclarationAnalyzer;
pub use expressions::ExpressionAnalyzer;
pub use scope::Scope;
pub use statements::StatementAnalyzer;
pub use symbol::{StructSymbol, Symbol};
pub use symbol_table::{StructNamespace, SymbolTable, TableError};

use std::rc::Rc;

use crate::ast::{Ident, Program};
use crate::error::{Diagnostic, DiagnosticCode, Reporter, SourcePos};

/// The name analyzer.
///
/// The analyzer owns no table state of its own: the symbol table is
/// threaded through the traversal explicitly, because struct bodies are
/// analyzed against the struct's field table rather than the enclosing
/// program table.
pub struct NameAnalyzer<R: Reporter> {
    reporter: R,
}

impl<R: Reporter> NameAnalyzer<R> {
    /// Create a new analyzer reporting through `reporter`.
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Analyze a program, returning the populated program-level symbol
    /// table. Struct field tables hang off their [`StructSymbol`]s.
    pub fn analyze(&mut self, program: &mut Program) -> SymbolTable {
        let mut table = SymbolTable::new();
        self.analyze_decls(&mut table, &mut program.decls);
        table
    }

    /// Emit one diagnostic.
    fn report_at(&mut self, code: DiagnosticCode, message: String, pos: SourcePos) {
        self.reporter.report(Diagnostic::new(code, message, pos));
    }

    /// Declare an ordinary name, reporting a collision as
    /// `MultiplyDeclared` at the identifier's position.
    fn declare_or_report(&mut self, table: &mut SymbolTable, id: &Ident, symbol: Rc<Symbol>) {
        match table.declare(&id.name, symbol) {
            Ok(()) => {}
            Err(TableError::DuplicateName(_)) => self.report_at(
                DiagnosticCode::MultiplyDeclared,
                format!("Multiply declared identifier '{}'", id.name),
                id.pos,
            ),
            Err(err) => panic!("symbol table misuse during name analysis: {err}"),
        }
    }

    /// Run `f` inside a fresh scope frame. Push and pop are paired here
    /// and nowhere else, so every exit path releases the frame.
    fn with_scope(&mut self, table: &mut SymbolTable, f: impl FnOnce(&mut Self, &mut SymbolTable)) {
        table.push_scope();
        f(self, table);
        table
            .pop_scope()
            .expect("scope stack underflow: push/pop call sites are mismatched");
    }
}

/// Analyze a program, collecting diagnostics into a list.
///
/// Convenience entry point over [`NameAnalyzer`] with a collecting
/// reporter; callers with their own sink construct the analyzer
/// directly.
pub fn analyze(program: &mut Program) -> (SymbolTable, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let mut analyzer = NameAnalyzer::new(|diag: Diagnostic| diagnostics.push(diag));
    let table = analyzer.analyze(program);
    (table, diagnostics)
}
