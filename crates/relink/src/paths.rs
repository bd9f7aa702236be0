//! Small path and tree-walking helpers shared by the resolver passes.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::error::Result;

/// Collect every file under `root` whose name ends with `extension`,
/// as paths relative to `root`, sorted for deterministic processing.
/// Dot-directories are skipped.
pub fn find_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !entry.file_name().to_string_lossy().starts_with('.')
        });
    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(extension) {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.push(rel);
        }
    }
    Ok(files)
}

/// True when a specifier denotes a local module (`./` or `../`).
pub fn is_relative(specifier: &str) -> bool {
    specifier.starts_with('.')
}

/// Extension of a specifier including the dot, or `""` when there is none.
/// Only the segment after the last `/` is considered, so `./a.b/c` has
/// no extension.
pub fn specifier_extension(specifier: &str) -> &str {
    let name = match specifier.rfind('/') {
        Some(pos) => &specifier[pos + 1..],
        None => specifier,
    };
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[pos..],
        _ => "",
    }
}

/// Relative specifier from `from_dir` to `target`, always carrying a
/// leading `./` or `../` so the runtime treats it as a local import.
pub fn relative_specifier(from_dir: &Path, target: &Path) -> String {
    let rel = pathdiff::diff_paths(target, from_dir).unwrap_or_else(|| target.to_path_buf());
    let rel = rel.to_string_lossy().replace('\\', "/");
    if rel.starts_with('.') {
        rel
    } else {
        format!("./{rel}")
    }
}

/// Normalized path of `specifier` resolved against `dir`.
pub fn resolve_against(dir: &Path, specifier: &str) -> PathBuf {
    dir.join(specifier).clean()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_extraction() {
        assert_eq!(specifier_extension("./a/b.js"), ".js");
        assert_eq!(specifier_extension("./a/b"), "");
        assert_eq!(specifier_extension("./style.module.css"), ".css");
        assert_eq!(specifier_extension("./a.b/c"), "");
        assert_eq!(specifier_extension("./.hidden"), "");
    }

    #[test]
    fn relative_specifier_gets_dot_prefix() {
        let spec = relative_specifier(Path::new("/out/a"), Path::new("/out/a/b.js"));
        assert_eq!(spec, "./b.js");
        let spec = relative_specifier(Path::new("/out/a"), Path::new("/out/c.js"));
        assert_eq!(spec, "../c.js");
    }

    #[test]
    fn find_files_recurses_and_skips_dot_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("a/b")).unwrap();
        std::fs::create_dir_all(root.join(".cache")).unwrap();
        std::fs::write(root.join("top.js"), "").unwrap();
        std::fs::write(root.join("a/b/deep.js"), "").unwrap();
        std::fs::write(root.join("a/types.d.ts"), "").unwrap();
        std::fs::write(root.join(".cache/skip.js"), "").unwrap();

        let js = find_files(root, ".js").unwrap();
        assert_eq!(js, vec![PathBuf::from("a/b/deep.js"), PathBuf::from("top.js")]);

        let decls = find_files(root, ".d.ts").unwrap();
        assert_eq!(decls, vec![PathBuf::from("a/types.d.ts")]);
    }

    #[test]
    fn resolve_against_cleans_dots() {
        let path = resolve_against(Path::new("/out/a"), "../b.js");
        assert_eq!(path, Path::new("/out/b.js"));
    }
}
