//! Filesystem realization of candidate paths.
//!
//! Candidates produced by alias expansion are not yet known to exist;
//! this module probes the output tree and picks the first real target.
//! Probing sits behind the [`FileProbe`] trait so tests can substitute
//! an in-memory snapshot for the live filesystem.

use std::path::Path;

use crate::paths::{is_relative, resolve_against};

/// Suffix variants probed for compiled code modules, in priority order
/// after the verbatim candidate.
pub const CODE_SUFFIXES: &[&str] = &["/index.js", ".js"];

/// Suffix variants probed for declaration files.
pub const DECLARATION_SUFFIXES: &[&str] = &["/index.d.ts", ".d.ts"];

/// Filesystem-state lookup used by the resolver passes.
pub trait FileProbe {
    /// True when `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// True when `path` exists at all (file or directory).
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the live filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileProbe;

impl FileProbe for OsFileProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Pick the first candidate that realizes to a regular file.
///
/// Candidates are tried in order. A candidate that is not a relative
/// path is an external dependency and is returned immediately without
/// touching the filesystem; the runtime's own loader is assumed to
/// resolve it. Relative candidates are probed verbatim first, then
/// with each suffix variant, resolved against `search_dir`. Returns
/// `None` when nothing matched; the caller falls back to leaving the
/// specifier unrewritten.
pub fn realize(
    candidates: &[String],
    search_dir: &Path,
    suffixes: &[&str],
    probe: &dyn FileProbe,
) -> Option<String> {
    for candidate in candidates {
        if !is_relative(candidate) {
            return Some(candidate.clone());
        }
        if probe.is_file(&resolve_against(search_dir, candidate)) {
            return Some(candidate.clone());
        }
        for suffix in suffixes {
            let variant = format!("{candidate}{suffix}");
            if probe.is_file(&resolve_against(search_dir, &variant)) {
                return Some(variant);
            }
        }
    }
    None
}

#[cfg(test)]
pub(crate) mod test_probe {
    use std::path::{Path, PathBuf};

    use rustc_hash::FxHashSet;

    use super::FileProbe;

    /// In-memory filesystem snapshot for resolver tests.
    #[derive(Debug, Default)]
    pub struct MemoryProbe {
        files: FxHashSet<PathBuf>,
    }

    impl MemoryProbe {
        pub fn with_files(files: &[&str]) -> Self {
            Self {
                files: files.iter().map(PathBuf::from).collect(),
            }
        }
    }

    impl FileProbe for MemoryProbe {
        fn is_file(&self, path: &Path) -> bool {
            self.files.contains(path)
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.contains(path) || self.files.iter().any(|f| f.starts_with(path))
        }
    }
}
