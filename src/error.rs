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

//! Diagnostics and the error-reporting interface.
//!
//! Name analysis never prints or aborts: every semantic error becomes a
//! [`Diagnostic`] handed to an injected [`Reporter`]. The caller decides
//! how to collect, count, or render them; [`render_diagnostic`] is the
//! provided renderer for terminal output.

use ariadne::{Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// A position in the source text (1-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePos {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl SourcePos {
    /// Create a new source position.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourcePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Diagnostic codes for name analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// A non-function declaration uses type `void`.
    NonFunctionVoid,
    /// A name collides with an existing declaration in the same scope,
    /// or a struct name collides with another struct or global name.
    MultiplyDeclared,
    /// A variable declares a struct type that has not been defined.
    InvalidStructType,
    /// An identifier use has no reachable declaration.
    UndeclaredIdentifier,
    /// The base of a field access is not bound to a struct-typed symbol.
    DotAccessOnNonStruct,
    /// The right-hand name of a field access is not a field of the
    /// resolved struct.
    InvalidFieldName,
}

impl DiagnosticCode {
    /// Get the numeric code for this diagnostic.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticCode::NonFunctionVoid => "E300",
            DiagnosticCode::MultiplyDeclared => "E301",
            DiagnosticCode::InvalidStructType => "E302",
            DiagnosticCode::UndeclaredIdentifier => "E303",
            DiagnosticCode::DotAccessOnNonStruct => "E304",
            DiagnosticCode::InvalidFieldName => "E305",
        }
    }

    /// Get the canonical message stem for this diagnostic.
    pub fn stem(&self) -> &'static str {
        match self {
            DiagnosticCode::NonFunctionVoid => "Non-function declared void",
            DiagnosticCode::MultiplyDeclared => "Multiply declared identifier",
            DiagnosticCode::InvalidStructType => "Invalid name of struct type",
            DiagnosticCode::UndeclaredIdentifier => "Undeclared identifier",
            DiagnosticCode::DotAccessOnNonStruct => "Dot-access of non-struct type",
            DiagnosticCode::InvalidFieldName => "Invalid struct field name",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A semantic error report with source location.
///
/// Diagnostics are non-fatal: the analyzer reports and keeps walking, so
/// one run surfaces every error it can reach.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct Diagnostic {
    /// The diagnostic code.
    pub code: DiagnosticCode,
    /// The diagnostic message.
    pub message: String,
    /// Where the error occurred.
    pub pos: SourcePos,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(code: DiagnosticCode, message: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            code,
            message: message.into(),
            pos,
            hint: None,
        }
    }

    /// Add a hint to this diagnostic.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the diagnostic code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }
}

/// The error sink the analyzer reports through.
///
/// The analyzer only ever calls [`Reporter::report`]; it never formats
/// output, counts errors, or decides exit status.
pub trait Reporter {
    /// Receive one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Any `FnMut(Diagnostic)` closure is a reporter.
impl<F: FnMut(Diagnostic)> Reporter for F {
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

/// A reporter that accumulates diagnostics into a list.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    /// The diagnostics reported so far, in report order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any diagnostics were reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Consume the collector, yielding the diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Convert a 1-indexed line/column position to a byte offset in `source`.
fn offset_of(source: &str, pos: SourcePos) -> usize {
    let mut line = 1u32;
    let mut line_start = 0usize;
    if pos.line > 1 {
        for (i, c) in source.char_indices() {
            if c == '\n' {
                line += 1;
                line_start = i + 1;
                if line == pos.line {
                    break;
                }
            }
        }
    }

    let rest = &source[line_start..];
    let line_end = rest.find('\n').unwrap_or(rest.len());
    let column = (pos.column.max(1) - 1) as usize;
    let column_offset = rest[..line_end]
        .char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(line_end);

    line_start + column_offset
}

/// Render a diagnostic against its source text.
///
/// Produces a plain-text report with the offending line and a pointer at
/// the diagnostic's position.
pub fn render_diagnostic(diagnostic: &Diagnostic, source: &str, filename: &str) -> String {
    let offset = offset_of(source, diagnostic.pos);
    let span_end = (offset + 1).min(source.len()).max(offset);

    let mut report = Report::build(ReportKind::Error, filename, offset)
        .with_config(Config::default().with_color(false))
        .with_code(diagnostic.code_str())
        .with_message(&diagnostic.message)
        .with_label(Label::new((filename, offset..span_end)).with_message(diagnostic.code.stem()));

    if let Some(hint) = &diagnostic.hint {
        report = report.with_help(hint);
    }

    let mut buf = Vec::new();
    report
        .finish()
        .write((filename, Source::from(source)), &mut buf)
        .expect("writing to an in-memory buffer cannot fail");

    String::from_utf8_lossy(&buf).into_owned()
}
