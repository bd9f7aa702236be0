//! Mirroring of non-code assets into the output tree.
//!
//! The compiler only emits code modules; imports of other files (CSS,
//! JSON, translations, ...) still reference paths the output tree does
//! not have. Each such target is copied from the source tree to the
//! equivalent relative path under the output tree.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::error::{RelinkError, Result};

/// Per-run asset copier. The copied-paths set is shared across all
/// modules of one run so each distinct relative path is copied at most
/// once, and is discarded with the run.
#[derive(Debug, Default)]
pub struct AssetMirror {
    copied: FxHashSet<PathBuf>,
}

impl AssetMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `source_root/relative` to `output_root/relative`, creating
    /// intermediate directories as needed. Returns `false` when the
    /// path was already mirrored during this run. A missing or
    /// unreadable source is fatal and names both paths.
    pub fn mirror(
        &mut self,
        relative: &Path,
        source_root: &Path,
        output_root: &Path,
    ) -> Result<bool> {
        if !self.copied.insert(relative.to_path_buf()) {
            return Ok(false);
        }
        let from = source_root.join(relative);
        let to = output_root.join(relative);
        if let Some(parent) = to.parent() {
            if let Err(source) = fs::create_dir_all(parent) {
                return Err(RelinkError::Copy { from, to, source });
            }
        }
        match fs::copy(&from, &to) {
            Ok(_) => {
                tracing::debug!(asset = %relative.display(), "mirrored asset");
                Ok(true)
            }
            Err(source) => Err(RelinkError::Copy { from, to, source }),
        }
    }

    pub fn copied_count(&self) -> usize {
        self.copied.len()
    }
}
