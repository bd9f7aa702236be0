//! Source-tree watching with serialized rebuild runs.
//!
//! Runs never overlap: the rebuild callback executes on the watcher's
//! consumer thread, and change events arriving while a run is in
//! flight stay queued in the channel until the run completes, at which
//! point they trigger one fresh run.

use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{EventKind, RecursiveMode, Watcher};
use tracing::debug;

/// Quiet period after the last change before a rebuild starts.
const DEBOUNCE: Duration = Duration::from_millis(200);

/// Watch `src_dir` recursively and invoke `rebuild` after each settled
/// batch of changes. Returns when the watcher channel closes.
pub fn watch(src_dir: &Path, mut rebuild: impl FnMut()) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |event| {
        let _ = tx.send(event);
    })
    .context("failed to create file watcher")?;
    watcher
        .watch(src_dir, RecursiveMode::Recursive)
        .with_context(|| format!("failed to watch {}", src_dir.display()))?;

    loop {
        let Ok(event) = rx.recv() else {
            return Ok(());
        };
        if !triggers_rebuild(&event) {
            continue;
        }
        debug!(?event, "source change");

        // Debounce: wait until the tree has been quiet for a moment.
        loop {
            match rx.recv_timeout(DEBOUNCE) {
                Ok(_) => continue,
                Err(mpsc::RecvTimeoutError::Timeout) => break,
                Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }

        rebuild();
    }
}

/// Newly created files only matter once they are written to, so
/// create events alone do not trigger a rebuild.
fn triggers_rebuild(event: &notify::Result<notify::Event>) -> bool {
    match event {
        Ok(event) => !matches!(event.kind, EventKind::Create(_) | EventKind::Access(_)),
        Err(_) => true,
    }
}
