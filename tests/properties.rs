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

//! Property-based tests for name analysis.
//!
//! These tests generate random (mostly broken) programs and verify
//! invariants that must hold for every input: analysis never panics,
//! the scope stack always balances, and results are deterministic.

use bramble::analyzer::analyze;
use bramble::ast::{
    Decl, Expr, FnBody, FormalDecl, FunctionDecl, Ident, Program, Stmt, StructDecl, Type, VarDecl,
};
use bramble::error::SourcePos;
use proptest::prelude::*;

// ============================================================================
// Program Generation
// ============================================================================

/// Short lowercase names from a tiny alphabet, so collisions and
/// shadowing happen often.
fn name() -> impl Strategy<Value = String> {
    "[a-e][a-b]?"
}

fn struct_name() -> impl Strategy<Value = String> {
    "[A-C]"
}

fn pos() -> impl Strategy<Value = SourcePos> {
    (1u32..100, 1u32..80).prop_map(|(line, column)| SourcePos::new(line, column))
}

fn ident() -> impl Strategy<Value = Ident> {
    (name(), pos()).prop_map(|(name, pos)| Ident::new(name, pos))
}

/// Any declared type, including void and (possibly undeclared) struct
/// types, so every declaration-side error path is reachable.
fn ty() -> impl Strategy<Value = Type> {
    prop_oneof![
        Just(Type::Int),
        Just(Type::Bool),
        Just(Type::Void),
        (struct_name(), pos()).prop_map(|(name, pos)| Type::Struct(Ident::new(name, pos))),
    ]
}

fn var_decl() -> impl Strategy<Value = Decl> {
    (ty(), ident()).prop_map(|(ty, name)| Decl::Var(VarDecl::new(ty, name)))
}

fn struct_decl() -> impl Strategy<Value = Decl> {
    (
        struct_name(),
        pos(),
        prop::collection::vec(var_decl(), 0..4),
    )
        .prop_map(|(name, pos, fields)| {
            Decl::Struct(StructDecl::new(Ident::new(name, pos), fields))
        })
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        ident().prop_map(Expr::Ident),
        (any::<i32>(), pos()).prop_map(|(value, pos)| Expr::IntLit { value, pos }),
        pos().prop_map(Expr::True),
    ];
    leaf.prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            (inner.clone(), ident()).prop_map(|(base, field)| Expr::DotAccess {
                base: Box::new(base),
                field,
            }),
            (inner.clone(), inner).prop_map(|(lhs, rhs)| Expr::Binary {
                op: bramble::ast::BinaryOp::Add,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            }),
        ]
    })
}

fn stmt() -> impl Strategy<Value = Stmt> {
    let simple = prop_oneof![
        expr().prop_map(Stmt::Print),
        expr().prop_map(Stmt::PreIncrement),
        expr().prop_map(|e| Stmt::Return(Some(e))),
    ];
    simple.prop_recursive(2, 8, 3, |inner| {
        prop_oneof![
            (
                expr(),
                prop::collection::vec(var_decl(), 0..3),
                prop::collection::vec(inner.clone(), 0..3),
            )
                .prop_map(|(cond, decls, stmts)| Stmt::While { cond, decls, stmts }),
            (
                expr(),
                prop::collection::vec(var_decl(), 0..2),
                prop::collection::vec(inner.clone(), 0..2),
                prop::collection::vec(var_decl(), 0..2),
                prop::collection::vec(inner, 0..2),
            )
                .prop_map(
                    |(cond, then_decls, then_stmts, else_decls, else_stmts)| Stmt::IfElse {
                        cond,
                        then_decls,
                        then_stmts,
                        else_decls,
                        else_stmts,
                    }
                ),
        ]
    })
}

fn function_decl() -> impl Strategy<Value = Decl> {
    (
        ident(),
        prop::collection::vec((ty(), ident()), 0..3),
        prop::collection::vec(var_decl(), 0..3),
        prop::collection::vec(stmt(), 0..4),
    )
        .prop_map(|(name, formals, decls, stmts)| {
            let formals = formals
                .into_iter()
                .map(|(ty, name)| FormalDecl::new(ty, name))
                .collect();
            Decl::Function(FunctionDecl::new(
                Type::Void,
                name,
                formals,
                FnBody::new(decls, stmts),
            ))
        })
}

fn program() -> impl Strategy<Value = Program> {
    prop::collection::vec(
        prop_oneof![var_decl(), struct_decl(), function_decl()],
        0..8,
    )
    .prop_map(Program::new)
}

// ============================================================================
// Invariants
// ============================================================================

proptest! {
    /// Property: analysis finishes on arbitrary programs, valid or not.
    #[test]
    fn prop_analysis_never_panics(mut p in program()) {
        let _ = analyze(&mut p);
    }

    /// Property: whatever scopes the traversal opens, it closes; the
    /// returned table always holds exactly the program scope.
    #[test]
    fn prop_scope_stack_balances(mut p in program()) {
        let (table, _) = analyze(&mut p);
        prop_assert_eq!(table.depth(), 1);
    }

    /// Property: analysis is deterministic; two runs over clones of the
    /// same tree report identical diagnostics.
    #[test]
    fn prop_analysis_deterministic(p in program()) {
        let mut first = p.clone();
        let mut second = p;
        let (_, diags1) = analyze(&mut first);
        let (_, diags2) = analyze(&mut second);
        prop_assert_eq!(diags1, diags2);
    }

    /// Property: every diagnostic carries one of the six analysis codes
    /// and a 1-indexed position.
    #[test]
    fn prop_diagnostics_well_formed(mut p in program()) {
        let (_, diags) = analyze(&mut p);
        for diag in &diags {
            prop_assert!(diag.code.code().starts_with('E'));
            prop_assert!(diag.pos.line >= 1, "line is 1-indexed");
            prop_assert!(diag.pos.column >= 1, "column is 1-indexed");
            prop_assert!(!diag.message.is_empty());
        }
    }

    /// Property: a program of distinctly named int globals analyzes
    /// cleanly and every name is in the table.
    #[test]
    fn prop_distinct_globals_all_declared(names in prop::collection::hash_set("[a-z]{1,6}", 1..10)) {
        let decls = names
            .iter()
            .map(|n| Decl::Var(VarDecl::new(Type::Int, Ident::new(n.clone(), SourcePos::new(1, 1)))))
            .collect();
        let mut p = Program::new(decls);

        let (table, diags) = analyze(&mut p);
        prop_assert!(diags.is_empty());
        for n in &names {
            prop_assert!(table.lookup(n).is_some(), "missing '{}'", n);
        }
    }
}
