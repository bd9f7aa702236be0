//! Alias rewriting for emitted type-declaration files.
//!
//! Declaration files get the same alias expansion and filesystem
//! realization as code modules, with two declaration-specific rules:
//! probing uses the `.d.ts` suffix variants, and a realized candidate
//! ending in `.d.ts` has that suffix stripped before write-back, since
//! import specifiers reference the logical module rather than the
//! declaration file itself.

use std::fs;
use std::path::Path;

use crate::alias::AliasTable;
use crate::error::Result;
use crate::extract::extract_specifiers;
use crate::paths::{find_files, is_relative, relative_specifier, resolve_against};
use crate::resolve::{DECLARATION_SUFFIXES, FileProbe, realize};
use crate::rewrite::{Replacement, rewrite_file};

/// Rewrite aliased specifiers in every `.d.ts` file under `out_dir`.
/// Returns the number of replaced specifiers.
pub fn rewrite_declarations(
    out_dir: &Path,
    aliases: &AliasTable,
    probe: &dyn FileProbe,
) -> Result<usize> {
    let mut replaced = 0;
    for rel in find_files(out_dir, ".d.ts")? {
        let path = out_dir.join(&rel);
        let content = fs::read_to_string(&path)?;
        let mod_dir = path.parent().unwrap_or(out_dir);

        let mut plan = Vec::new();
        for occurrence in extract_specifiers(&content, &path)? {
            let Some(found) = realize_alias(&occurrence.raw, aliases, out_dir, mod_dir, probe)
            else {
                continue;
            };
            let value = found.strip_suffix(".d.ts").unwrap_or(&found).to_string();
            plan.push(Replacement {
                start: occurrence.start,
                end: occurrence.end,
                value,
            });
        }
        if !plan.is_empty() {
            tracing::debug!(file = %rel.display(), count = plan.len(), "rewriting declaration");
        }
        replaced += plan.len();
        rewrite_file(&path, &content, &plan)?;
    }
    Ok(replaced)
}

/// Realize one declaration specifier, or `None` when it must be left
/// alone. Relative specifiers already point where they should; aliased
/// specifiers that resolve to no real candidate stay as they are, since
/// declaration-only resolution of external packages is expected to
/// remain unresolved locally.
fn realize_alias(
    raw: &str,
    aliases: &AliasTable,
    out_dir: &Path,
    mod_dir: &Path,
    probe: &dyn FileProbe,
) -> Option<String> {
    if is_relative(raw) {
        return None;
    }
    let rebased: Vec<String> = aliases
        .expand(raw)?
        .iter()
        .map(|candidate| relative_specifier(mod_dir, &resolve_against(out_dir, candidate)))
        .collect();
    realize(&rebased, mod_dir, DECLARATION_SUFFIXES, probe)
}
