//! Helpers shared by lowering and emission.

use std::collections::HashSet;

use crate::model::{Declaration, TriviaKind, TypeParameter};

use super::types::GenericClause;

/// Marker emitted before every member.
pub const INHERITDOC: &str = "/// <inheritdoc />";

/// Escape a string for use in a C# regular string literal.
/// Escapes backslashes, double quotes and common control characters.
pub fn escape_cs_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
    out
}

/// Build a generic clause from type parameters.
///
/// Parameters keep their order; constraints follow in the same order,
/// skipping parameters without one.
pub fn generic_clause(params: &[TypeParameter]) -> GenericClause {
    if params.is_empty() {
        return GenericClause::default();
    }
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    let constraints: Vec<&str> = params
        .iter()
        .filter_map(|p| p.constraint.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();
    GenericClause {
        params: format!("<{}>", names.join(", ")),
        constraints: constraints.join(" "),
    }
}

/// Documentation lines of the first non-blank doc comment in `decl`'s
/// leading trivia.
///
/// Lines are trimmed. A `/** ... */` block is kept as is; in any other
/// block a line without `///` gets the prefix.
pub fn documentation_lines(decl: &Declaration) -> Vec<String> {
    let Some(doc) = decl
        .leading_trivia
        .iter()
        .find(|t| t.kind == TriviaKind::DocComment && !t.text.trim().is_empty())
    else {
        return Vec::new();
    };

    let lines = doc.text.lines().map(str::trim).filter(|line| !line.is_empty());
    if doc.text.trim_start().starts_with("/**") {
        return lines.map(str::to_string).collect();
    }
    lines
        .map(|line| {
            if line.starts_with("///") {
                line.to_string()
            } else {
                format!("/// {line}")
            }
        })
        .collect()
}

/// Flatten import directives across every scope of every declaration.
pub fn collect_imports(declarations: &[Declaration], dedup: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    declarations
        .iter()
        .flat_map(|decl| decl.import_scopes.iter())
        .flat_map(|scope| scope.imports.iter())
        .map(|import| import.trim())
        .filter(|import| !import.is_empty())
        .filter(|import| !dedup || seen.insert(*import))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::{DeclarationKind, ImportScope, Trivia};

    fn declaration(imports: &[&[&str]]) -> Declaration {
        let mut decl = Declaration::new(DeclarationKind::Class);
        decl.import_scopes = imports
            .iter()
            .map(|scope| ImportScope {
                imports: scope.iter().map(|s| (*s).to_string()).collect(),
            })
            .collect();
        decl
    }

    #[test]
    fn test_escape_cs_string() {
        assert_eq!(escape_cs_string("x"), "x");
        assert_eq!(escape_cs_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_cs_string("C:\\temp"), "C:\\\\temp");
        assert_eq!(escape_cs_string("a\nb"), "a\\nb");
    }

    #[test]
    fn test_generic_clause_empty() {
        let clause = generic_clause(&[]);
        assert!(clause.is_empty());
        assert!(clause.constraints.is_empty());
    }

    #[test]
    fn test_generic_clause_keeps_order() {
        let clause = generic_clause(&[
            TypeParameter::constrained("TKey", "where TKey : notnull"),
            TypeParameter::new("TValue"),
            TypeParameter::constrained("TRest", "  where TRest : class, new()  "),
        ]);
        assert_eq!(clause.params, "<TKey, TValue, TRest>");
        assert_eq!(
            clause.constraints,
            "where TKey : notnull where TRest : class, new()"
        );
    }

    #[test]
    fn test_documentation_first_non_blank_block() {
        let mut decl = Declaration::new(DeclarationKind::Class);
        decl.leading_trivia = vec![
            Trivia {
                kind: TriviaKind::Comment,
                text: "// not docs".into(),
            },
            Trivia::doc("   \n  "),
            Trivia::doc("/// <summary>\n    /// A widget.\n/// </summary>"),
            Trivia::doc("/// <remarks>ignored</remarks>"),
        ];
        assert_eq!(
            documentation_lines(&decl),
            vec!["/// <summary>", "/// A widget.", "/// </summary>"]
        );
    }

    #[test]
    fn test_documentation_adds_missing_marker() {
        let mut decl = Declaration::new(DeclarationKind::Class);
        decl.leading_trivia = vec![Trivia::doc("<summary>Plain</summary>")];
        assert_eq!(documentation_lines(&decl), vec!["/// <summary>Plain</summary>"]);
    }

    #[test]
    fn test_documentation_block_comment_kept_verbatim() {
        let mut decl = Declaration::new(DeclarationKind::Class);
        decl.leading_trivia = vec![Trivia::doc(
            "/**\n     * <summary>\n     A widget.\n     * </summary>\n     */",
        )];
        assert_eq!(
            documentation_lines(&decl),
            vec!["/**", "* <summary>", "A widget.", "* </summary>", "*/"]
        );
    }

    #[test]
    fn test_documentation_absent() {
        let decl = Declaration::new(DeclarationKind::Class);
        assert!(documentation_lines(&decl).is_empty());
    }

    #[test]
    fn test_collect_imports_preserves_duplicates() {
        let decls = vec![
            declaration(&[&["using System;"], &["using System.Linq;"]]),
            declaration(&[&["using System;", "  using Acme.Core;  "]]),
        ];
        assert_eq!(
            collect_imports(&decls, false),
            vec![
                "using System;",
                "using System.Linq;",
                "using System;",
                "using Acme.Core;"
            ]
        );
    }

    #[test]
    fn test_collect_imports_dedup_keeps_first() {
        let decls = vec![
            declaration(&[&["using System;", "using System.Linq;"]]),
            declaration(&[&["using System;", "using Acme.Core;"]]),
        ];
        assert_eq!(
            collect_imports(&decls, true),
            vec!["using System;", "using System.Linq;", "using Acme.Core;"]
        );
    }
}
