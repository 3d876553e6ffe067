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

//! Statement analysis.

use crate::ast::Stmt;
use crate::error::Reporter;

use super::{DeclarationAnalyzer, ExpressionAnalyzer, NameAnalyzer, SymbolTable};

/// Analysis of statements. Block-bearing statements open one scope per
/// block and analyze the block's declarations before its statements.
pub trait StatementAnalyzer {
    fn analyze_stmts(&mut self, table: &mut SymbolTable, stmts: &mut [Stmt]);

    fn analyze_stmt(&mut self, table: &mut SymbolTable, stmt: &mut Stmt);
}

impl<R: Reporter> StatementAnalyzer for NameAnalyzer<R> {
    fn analyze_stmts(&mut self, table: &mut SymbolTable, stmts: &mut [Stmt]) {
        for stmt in stmts {
            self.analyze_stmt(table, stmt);
        }
    }

    fn analyze_stmt(&mut self, table: &mut SymbolTable, stmt: &mut Stmt) {
        match stmt {
            Stmt::Assign(assign) => {
                self.analyze_expr(table, &mut assign.lhs);
                self.analyze_expr(table, &mut assign.rhs);
            }
            Stmt::PreIncrement(expr)
            | Stmt::PreDecrement(expr)
            | Stmt::Receive(expr)
            | Stmt::Print(expr) => {
                self.analyze_expr(table, expr);
            }
            Stmt::If { cond, decls, stmts }
            | Stmt::While { cond, decls, stmts }
            | Stmt::Repeat { cond, decls, stmts } => {
                self.analyze_expr(table, cond);
                self.with_scope(table, |analyzer, table| {
                    analyzer.analyze_decls(table, decls);
                    analyzer.analyze_stmts(table, stmts);
                });
            }
            Stmt::IfElse {
                cond,
                then_decls,
                then_stmts,
                else_decls,
                else_stmts,
            } => {
                self.analyze_expr(table, cond);
                self.with_scope(table, |analyzer, table| {
                    analyzer.analyze_decls(table, then_decls);
                    analyzer.analyze_stmts(table, then_stmts);
                });
                self.with_scope(table, |analyzer, table| {
                    analyzer.analyze_decls(table, else_decls);
                    analyzer.analyze_stmts(table, else_stmts);
                });
            }
            Stmt::Call(call) => self.analyze_call(table, call),
            Stmt::Return(expr) => {
                if let Some(expr) = expr {
                    self.analyze_expr(table, expr);
                }
            }
        }
    }
}
