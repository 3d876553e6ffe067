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

//! Expression analysis.
//!
//! Expression traversal never mutates the table; it binds identifier
//! uses to their symbols. Each method returns the struct definition the
//! expression's value gives access to, if any, which is what lets
//! chained dot access (`a.b.c`) resolve left to right.

use std::rc::Rc;

use crate::ast::{CallExpr, Expr, Ident};
use crate::error::{DiagnosticCode, Reporter};

use super::{NameAnalyzer, StructSymbol, SymbolTable};

/// Analysis of expressions.
pub trait ExpressionAnalyzer {
    fn analyze_expr(&mut self, table: &SymbolTable, expr: &mut Expr)
        -> Option<Rc<StructSymbol>>;

    fn analyze_ident(&mut self, table: &SymbolTable, id: &mut Ident)
        -> Option<Rc<StructSymbol>>;

    fn analyze_call(&mut self, table: &SymbolTable, call: &mut CallExpr);

    fn analyze_dot_access(
        &mut self,
        table: &SymbolTable,
        base: &mut Expr,
        field: &mut Ident,
    ) -> Option<Rc<StructSymbol>>;
}

impl<R: Reporter> ExpressionAnalyzer for NameAnalyzer<R> {
    fn analyze_expr(
        &mut self,
        table: &SymbolTable,
        expr: &mut Expr,
    ) -> Option<Rc<StructSymbol>> {
        match expr {
            Expr::IntLit { .. } | Expr::StrLit { .. } | Expr::True(_) | Expr::False(_) => None,
            Expr::Ident(id) => self.analyze_ident(table, id),
            Expr::DotAccess { base, field } => self.analyze_dot_access(table, base, field),
            Expr::Assign(assign) => {
                self.analyze_expr(table, &mut assign.lhs);
                self.analyze_expr(table, &mut assign.rhs);
                None
            }
            Expr::Call(call) => {
                self.analyze_call(table, call);
                None
            }
            Expr::Unary { operand, .. } => {
                self.analyze_expr(table, operand);
                None
            }
            Expr::Binary { lhs, rhs, .. } => {
                self.analyze_expr(table, lhs);
                self.analyze_expr(table, rhs);
                None
            }
        }
    }

    fn analyze_ident(&mut self, table: &SymbolTable, id: &mut Ident) -> Option<Rc<StructSymbol>> {
        let Some(symbol) = table.lookup(&id.name) else {
            self.report_at(
                DiagnosticCode::UndeclaredIdentifier,
                format!("Undeclared identifier '{}'", id.name),
                id.pos,
            );
            return None;
        };
        let def = symbol.as_struct().cloned();
        id.symbol = Some(symbol);
        def
    }

    fn analyze_call(&mut self, table: &SymbolTable, call: &mut CallExpr) {
        self.analyze_ident(table, &mut call.callee);
        for arg in &mut call.args {
            self.analyze_expr(table, arg);
        }
    }

    fn analyze_dot_access(
        &mut self,
        table: &SymbolTable,
        base: &mut Expr,
        field: &mut Ident,
    ) -> Option<Rc<StructSymbol>> {
        let Some(def) = self.analyze_expr(table, base) else {
            // any base without a field table is an error here, whether
            // it is a non-struct variable, a literal or an unresolved
            // name
            let message = match base {
                Expr::Ident(id) => format!("Dot-access of non-struct type '{}'", id.name),
                _ => DiagnosticCode::DotAccessOnNonStruct.stem().to_string(),
            };
            self.report_at(DiagnosticCode::DotAccessOnNonStruct, message, base.pos());
            return None;
        };

        let Some(symbol) = def.field(&field.name) else {
            self.report_at(
                DiagnosticCode::InvalidFieldName,
                format!("Invalid struct field name '{}'", field.name),
                field.pos,
            );
            return None;
        };
        let next = symbol.as_struct().cloned();
        field.symbol = Some(symbol);
        next
    }
}
