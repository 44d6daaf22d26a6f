//! Atomic file write helpers.
//!
//! Uses a temp file + rename pattern so a reader never sees a half-written
//! export. The temp file lives in the destination directory so the rename
//! stays on one filesystem.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistingFilePolicy {
    /// Replace the destination if present.
    #[default]
    Replace,
    /// Fail with `AlreadyExists` if the destination is present.
    Keep,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AtomicWriteOptions {
    pub existing: ExistingFilePolicy,
    /// Create missing parent directories first.
    pub create_parents: bool,
}

/// Write `bytes` to `path` through a synced temp file and a rename.
pub fn atomic_write(
    path: impl AsRef<Path>,
    bytes: &[u8],
    options: AtomicWriteOptions,
) -> io::Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if options.create_parents {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    match options.existing {
        ExistingFilePolicy::Keep => {
            // Rename but fail if the destination already exists.
            tmp.persist_noclobber(path).map_err(|err| err.error)?;
        }
        ExistingFilePolicy::Replace => {
            tmp.persist(path).map_err(|err| err.error)?;
        }
    }

    best_effort_sync_parent_dir(parent);

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote file atomically");
    Ok(())
}

fn best_effort_sync_parent_dir(parent: &Path) {
    #[cfg(unix)]
    {
        if let Err(e) = File::open(parent).and_then(|d| d.sync_all()) {
            debug!(path = %parent.display(), "Parent directory sync_all failed (best-effort): {e}");
        }
    }

    #[cfg(not(unix))]
    let _ = parent;
}
