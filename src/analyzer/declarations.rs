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

//! Declaration analysis.

use std::rc::Rc;

use crate::ast::{Decl, FormalDecl, FunctionDecl, StructDecl, Type, VarDecl};
use crate::error::{DiagnosticCode, Reporter};

use super::{
    NameAnalyzer, StatementAnalyzer, StructSymbol, Symbol, SymbolTable, TableError,
};

/// Analysis of declarations: variables, functions, formals and structs.
pub trait DeclarationAnalyzer {
    fn analyze_decls(&mut self, table: &mut SymbolTable, decls: &mut [Decl]);

    fn analyze_decl(&mut self, table: &mut SymbolTable, decl: &mut Decl);

    fn analyze_var_decl(&mut self, table: &mut SymbolTable, decl: &mut VarDecl);

    fn analyze_function_decl(&mut self, table: &mut SymbolTable, decl: &mut FunctionDecl);

    fn analyze_formal_decl(&mut self, table: &mut SymbolTable, decl: &mut FormalDecl);

    fn analyze_struct_decl(&mut self, table: &mut SymbolTable, decl: &mut StructDecl);
}

impl<R: Reporter> DeclarationAnalyzer for NameAnalyzer<R> {
    fn analyze_decls(&mut self, table: &mut SymbolTable, decls: &mut [Decl]) {
        for decl in decls {
            self.analyze_decl(table, decl);
        }
    }

    fn analyze_decl(&mut self, table: &mut SymbolTable, decl: &mut Decl) {
        match decl {
            Decl::Var(var) => self.analyze_var_decl(table, var),
            Decl::Function(func) => self.analyze_function_decl(table, func),
            Decl::Struct(strct) => self.analyze_struct_decl(table, strct),
        }
    }

    fn analyze_var_decl(&mut self, table: &mut SymbolTable, decl: &mut VarDecl) {
        if decl.ty.is_void() {
            self.report_at(
                DiagnosticCode::NonFunctionVoid,
                format!("Non-function '{}' declared void", decl.name.name),
                decl.name.pos,
            );
            // the declaration contributes no symbol
            return;
        }

        if let Type::Struct(type_id) = &decl.ty {
            let Some(symbol) = table.lookup_struct(&type_id.name) else {
                self.report_at(
                    DiagnosticCode::InvalidStructType,
                    format!("Invalid name of struct type '{}'", type_id.name),
                    decl.name.pos,
                );
                return;
            };
            // the variable's entry is the struct type's own symbol, so
            // dot access on the variable reaches the field table
            self.declare_or_report(table, &decl.name, symbol);
        } else {
            let symbol = Rc::new(Symbol::var(decl.ty.type_name()));
            self.declare_or_report(table, &decl.name, symbol);
        }
    }

    fn analyze_function_decl(&mut self, table: &mut SymbolTable, decl: &mut FunctionDecl) {
        // the function is declared in the enclosing scope even when its
        // name collides, so its body is always analyzed
        let params = decl
            .formals
            .iter()
            .map(|formal| formal.ty.type_name().to_string())
            .collect();
        let symbol = Rc::new(Symbol::function(decl.return_type.type_name(), params));
        self.declare_or_report(table, &decl.name, symbol);

        self.with_scope(table, |analyzer, table| {
            for formal in &mut decl.formals {
                analyzer.analyze_formal_decl(table, formal);
            }
            analyzer.analyze_decls(table, &mut decl.body.decls);
            analyzer.analyze_stmts(table, &mut decl.body.stmts);
        });
    }

    fn analyze_formal_decl(&mut self, table: &mut SymbolTable, decl: &mut FormalDecl) {
        let symbol = Rc::new(Symbol::var(decl.ty.type_name()));
        self.declare_or_report(table, &decl.name, symbol);
    }

    fn analyze_struct_decl(&mut self, table: &mut SymbolTable, decl: &mut StructDecl) {
        let def = Rc::new(StructSymbol::new(decl.name.name.clone()));
        // the field table sees the same struct namespace as the program
        // table, so struct-typed fields (including self-references)
        // resolve
        def.fields.borrow_mut().share_struct_namespace(table);

        let symbol = Rc::new(Symbol::struct_type(Rc::clone(&def)));
        match table.declare_struct(&decl.name.name, symbol) {
            Ok(()) => {}
            Err(TableError::DuplicateName(_)) => {
                self.report_at(
                    DiagnosticCode::MultiplyDeclared,
                    format!("Multiply declared identifier '{}'", decl.name.name),
                    decl.name.pos,
                );
                // a duplicate struct's body is skipped entirely
                return;
            }
            Err(err) => panic!("symbol table misuse during name analysis: {err}"),
        }

        let mut fields = def.fields.borrow_mut();
        self.analyze_decls(&mut fields, &mut decl.fields);
    }
}
