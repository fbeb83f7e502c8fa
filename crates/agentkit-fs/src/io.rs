//! Atomic writes and recursive copies

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock to prevent concurrent access.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    // Temp file lives next to the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Entry names skipped while copying a tree.
///
/// Matching is by whole path component, so `.git` does not hide `.github`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFilter {
    skip: Vec<String>,
}

impl CopyFilter {
    /// A filter that copies everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter that skips entries with any of the given names.
    pub fn skipping<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skip: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether an entry with this file name should be copied.
    pub fn allows(&self, name: &str) -> bool {
        !self.skip.iter().any(|s| s == name)
    }
}

/// Copy a single file, creating parent directories and overwriting the target.
pub fn copy_file(src: &NormalizedPath, dst: &NormalizedPath) -> Result<()> {
    let src_native = src.to_native();
    let dst_native = dst.to_native();

    if let Some(parent) = dst_native.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    clear_destination(&dst_native, false)?;

    fs::copy(&src_native, &dst_native).map_err(|e| Error::io(&src_native, e))?;
    tracing::trace!(from = %src, to = %dst, "Copied file");
    Ok(())
}

/// Recursively copy a directory tree onto `dst`.
///
/// Files already present in `dst` are overwritten; files only present in
/// `dst` are left alone. Symlinks are recreated as links and never followed.
/// Returns the number of entries copied.
pub fn copy_tree(src: &NormalizedPath, dst: &NormalizedPath, filter: &CopyFilter) -> Result<usize> {
    let dst_native = dst.to_native();
    clear_destination(&dst_native, true)?;
    fs::create_dir_all(&dst_native).map_err(|e| Error::io(&dst_native, e))?;

    let src_native = src.to_native();
    let mut entries = fs::read_dir(&src_native)
        .map_err(|e| Error::io(&src_native, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(&src_native, e))?;
    // Stable order keeps repeated runs identical
    entries.sort_by_key(|entry| entry.file_name());

    let mut copied = 0;
    for entry in entries {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !filter.allows(&name) {
            tracing::debug!(path = %src.join(&name), "Skipping filtered entry");
            continue;
        }

        let child_src = src.join(&name);
        let child_dst = dst.join(&name);
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if file_type.is_symlink() {
            if copy_symlink(&entry.path(), &child_dst.to_native())? {
                copied += 1;
            }
        } else if file_type.is_dir() {
            copied += copy_tree(&child_src, &child_dst, filter)?;
        } else {
            copy_file(&child_src, &child_dst)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Copy a file or a directory tree, whichever `src` is.
pub fn copy_path(src: &NormalizedPath, dst: &NormalizedPath, filter: &CopyFilter) -> Result<usize> {
    if src.is_dir() {
        copy_tree(src, dst, filter)
    } else {
        copy_file(src, dst)?;
        Ok(1)
    }
}

/// Recreate the link at `src` as `dst`, replacing whatever `dst` holds.
///
/// Returns `false` when the platform cannot create the link and it was skipped.
fn copy_symlink(src: &Path, dst: &Path) -> Result<bool> {
    let target = fs::read_link(src).map_err(|e| Error::io(src, e))?;

    clear_destination(dst, false)?;

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(&target, dst).map_err(|e| Error::io(dst, e))?;
        tracing::trace!(from = %src.display(), to = %dst.display(), "Copied symlink");
        Ok(true)
    }

    #[cfg(not(unix))]
    {
        tracing::warn!(
            "Skipping symlink {} -> {}",
            src.display(),
            target.display()
        );
        Ok(false)
    }
}

/// Remove whatever sits at `dst` that a copy must not write through.
///
/// Links are always removed, never followed. Directories are removed unless
/// `keep_dir` is set; plain files are removed only when `keep_dir` is set.
fn clear_destination(dst: &Path, keep_dir: bool) -> Result<()> {
    let Ok(meta) = fs::symlink_metadata(dst) else {
        return Ok(());
    };
    let file_type = meta.file_type();
    if file_type.is_symlink() || (file_type.is_file() && keep_dir) {
        fs::remove_file(dst).map_err(|e| Error::io(dst, e))?;
    } else if file_type.is_dir() && !keep_dir {
        fs::remove_dir_all(dst).map_err(|e| Error::io(dst, e))?;
    }
    Ok(())
}
