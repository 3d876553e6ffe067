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

//! Tests for diagnostic codes, messages and rendering.

use bramble::error::{render_diagnostic, Diagnostic, DiagnosticCode, SourcePos};
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Code and Message Formatting
// ============================================================================

#[test_case(DiagnosticCode::NonFunctionVoid, "E300", "Non-function declared void")]
#[test_case(DiagnosticCode::MultiplyDeclared, "E301", "Multiply declared identifier")]
#[test_case(DiagnosticCode::InvalidStructType, "E302", "Invalid name of struct type")]
#[test_case(DiagnosticCode::UndeclaredIdentifier, "E303", "Undeclared identifier")]
#[test_case(DiagnosticCode::DotAccessOnNonStruct, "E304", "Dot-access of non-struct type")]
#[test_case(DiagnosticCode::InvalidFieldName, "E305", "Invalid struct field name")]
fn test_code_and_stem(code: DiagnosticCode, number: &str, stem: &str) {
    assert_eq!(code.code(), number);
    assert_eq!(code.stem(), stem);
    assert_eq!(code.to_string(), number);
}

#[test]
fn test_diagnostic_display_includes_code_and_message() {
    let diag = Diagnostic::new(
        DiagnosticCode::MultiplyDeclared,
        "Multiply declared identifier 'x'",
        SourcePos::new(4, 9),
    );
    assert_eq!(diag.to_string(), "[E301] Multiply declared identifier 'x'");
}

#[test]
fn test_source_pos_display() {
    assert_eq!(SourcePos::new(12, 3).to_string(), "12:3");
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_points_at_offending_line() {
    let source = "int x;\nbool x;\n";
    let diag = Diagnostic::new(
        DiagnosticCode::MultiplyDeclared,
        "Multiply declared identifier 'x'",
        SourcePos::new(2, 6),
    );

    let rendered = render_diagnostic(&diag, source, "dup.bramble");
    assert!(rendered.contains("E301"), "missing code: {rendered}");
    assert!(
        rendered.contains("Multiply declared identifier 'x'"),
        "missing message: {rendered}"
    );
    assert!(rendered.contains("bool x;"), "missing line: {rendered}");
    assert!(rendered.contains("dup.bramble"), "missing file: {rendered}");
}

#[test]
fn test_render_includes_hint_when_present() {
    let source = "struct Ghost g;\n";
    let diag = Diagnostic::new(
        DiagnosticCode::InvalidStructType,
        "Invalid name of struct type 'Ghost'",
        SourcePos::new(1, 14),
    )
    .with_hint("declare 'struct Ghost { ... }' before using it as a type");

    let rendered = render_diagnostic(&diag, source, "ghost.bramble");
    assert!(
        rendered.contains("declare 'struct Ghost"),
        "missing hint: {rendered}"
    );
}

#[test]
fn test_render_tolerates_out_of_range_position() {
    // positions past the end of the source must not panic
    let source = "int x;\n";
    let diag = Diagnostic::new(
        DiagnosticCode::UndeclaredIdentifier,
        "Undeclared identifier 'y'",
        SourcePos::new(99, 99),
    );

    let rendered = render_diagnostic(&diag, source, "short.bramble");
    assert!(rendered.contains("E303"));
}

// ============================================================================
// Analyzer Message Texts
// ============================================================================

/// The analyzer's messages start with the canonical stem and name the
/// offending identifier.
#[test]
fn test_analyzer_messages_carry_identifier_names() {
    use bramble::analyzer::analyze;
    use bramble::ast::{Decl, Ident, Program, Type, VarDecl};

    let mut program = Program::new(vec![
        Decl::Var(VarDecl::new(
            Type::Void,
            Ident::new("broken", SourcePos::new(1, 6)),
        )),
        Decl::Var(VarDecl::new(
            Type::Struct(Ident::new("Nope", SourcePos::new(2, 8))),
            Ident::new("n", SourcePos::new(2, 13)),
        )),
    ]);
    let (_, diags) = analyze(&mut program);

    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].message, "Non-function 'broken' declared void");
    assert_eq!(diags[1].message, "Invalid name of struct type 'Nope'");
    assert_eq!(diags[0].pos, SourcePos::new(1, 6));
    assert_eq!(diags[1].pos, SourcePos::new(2, 13));
}
