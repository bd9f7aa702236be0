//! In-place application of specifier replacements.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// One planned text replacement: splice `value` over `content[start..end]`.
/// A file's plan is sorted ascending by `start` and non-overlapping by
/// construction (each entry comes from a distinct specifier occurrence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub start: usize,
    pub end: usize,
    pub value: String,
}

/// Apply a replacement plan to `content` in one pass. Bytes outside the
/// planned spans are copied verbatim and in order; an empty plan is the
/// identity.
pub fn apply(content: &str, plan: &[Replacement]) -> String {
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    for replacement in plan {
        out.push_str(&content[cursor..replacement.start]);
        out.push_str(&replacement.value);
        cursor = replacement.end;
    }
    out.push_str(&content[cursor..]);
    out
}

/// Persist `content` with the plan applied. An empty plan performs no
/// write at all, so untouched files keep their mtime.
pub fn rewrite_file(path: &Path, content: &str, plan: &[Replacement]) -> Result<()> {
    if plan.is_empty() {
        return Ok(());
    }
    fs::write(path, apply(content, plan))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacement(start: usize, end: usize, value: &str) -> Replacement {
        Replacement {
            start,
            end,
            value: value.to_string(),
        }
    }

    #[test]
    fn splices_spans_and_keeps_surrounding_bytes() {
        let content = "import \"./a\";\nimport \"./b\";\n";
        let plan = vec![replacement(8, 11, "./a.js"), replacement(22, 25, "./b/index.js")];
        let out = apply(content, &plan);
        assert_eq!(out, "import \"./a.js\";\nimport \"./b/index.js\";\n");
    }

    #[test]
    fn empty_plan_is_identity() {
        let content = "export const answer = 42;\n";
        assert_eq!(apply(content, &[]), content);
    }

    #[test]
    fn shrinking_replacement_is_supported() {
        let content = "export * from \"./types/Foo.d.ts\";\n";
        let plan = vec![replacement(15, 31, "./types/Foo")];
        assert_eq!(apply(content, &plan), "export * from \"./types/Foo\";\n");
    }

    #[test]
    fn empty_plan_never_touches_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("untouched.js");
        rewrite_file(&path, "whatever", &[]).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn non_empty_plan_persists_the_new_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.js");
        std::fs::write(&path, "import \"./a\";\n").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        rewrite_file(&path, &content, &[replacement(8, 11, "./a.js")]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "import \"./a.js\";\n");
    }
}
