//! Specifier extraction from compiled JS and declaration files.
//!
//! Parses one module's text with the OXC parser and returns every
//! module-specifier literal with its exact byte span (quotes excluded).
//! Spans are emitted non-overlapping and in ascending start order.
//! Extraction is read-only; a parse failure is fatal and names the file.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{Expression, ImportExpression, ModuleDeclaration, StringLiteral};
use oxc_ast_visit::{Visit, walk};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{RelinkError, Result};

/// The exact literal text span of one module specifier inside a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecifierOccurrence {
    /// Byte offset of the first character of the literal (after the
    /// opening quote).
    pub start: usize,
    /// Byte offset one past the last character (before the closing
    /// quote).
    pub end: usize,
    /// The specifier value, unescaped.
    pub raw: String,
}

fn occurrence_from(lit: &StringLiteral) -> SpecifierOccurrence {
    SpecifierOccurrence {
        start: lit.span.start as usize + 1,
        end: lit.span.end as usize - 1,
        raw: lit.value.to_string(),
    }
}

/// Collects `import("...")` expressions anywhere in the tree. Computed
/// specifiers (`import(expr)`) cannot be safely rewritten and are
/// skipped.
struct DynamicImportCollector<'v> {
    occurrences: &'v mut Vec<SpecifierOccurrence>,
}

impl<'v, 'ast> Visit<'ast> for DynamicImportCollector<'v> {
    fn visit_import_expression(&mut self, it: &ImportExpression<'ast>) {
        if let Expression::StringLiteral(lit) = &it.source {
            self.occurrences.push(occurrence_from(lit));
        }
        walk::walk_import_expression(self, it);
    }
}

/// Extract every import/re-export/dynamic-import specifier literal
/// from `source`. The file path selects the grammar (`.js` vs `.d.ts`)
/// and names the file in parse errors.
pub fn extract_specifiers(source: &str, file: &Path) -> Result<Vec<SpecifierOccurrence>> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(file).unwrap_or_else(|_| SourceType::mjs());
    let parsed = Parser::new(&allocator, source, source_type).parse();

    if !parsed.errors.is_empty() {
        let message = parsed
            .errors
            .iter()
            .map(|err| format!("{err:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(RelinkError::Parse {
            file: file.to_path_buf(),
            message,
        });
    }

    let mut occurrences = Vec::new();
    for stmt in &parsed.program.body {
        let Some(decl) = stmt.as_module_declaration() else {
            continue;
        };
        let source_lit = match decl {
            ModuleDeclaration::ImportDeclaration(import) => Some(&import.source),
            ModuleDeclaration::ExportNamedDeclaration(named) => named.source.as_ref(),
            ModuleDeclaration::ExportAllDeclaration(all) => Some(&all.source),
            _ => None,
        };
        if let Some(lit) = source_lit {
            occurrences.push(occurrence_from(lit));
        }
    }

    let mut collector = DynamicImportCollector {
        occurrences: &mut occurrences,
    };
    collector.visit_program(&parsed.program);

    // Dynamic imports are appended after the top-level walk; restore
    // ascending span order.
    occurrences.sort_unstable_by_key(|occ| occ.start);
    Ok(occurrences)
}
