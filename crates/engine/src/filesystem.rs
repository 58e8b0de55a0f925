// crates/engine/src/filesystem.rs
use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use crate::ignore_file::{IgnoreMatcher, resolve};
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

/// Check that `root` exists and is a directory.
///
/// # Errors
/// Returns [`EngineError::InvalidRoot`] otherwise.
pub fn validate_root(root: &Path) -> Result<()> {
    let invalid = |reason: &str| EngineError::InvalidRoot {
        path: root.to_path_buf(),
        reason: reason.to_string(),
    };

    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(invalid("not a directory")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(invalid("does not exist")),
        Err(e) => Err(invalid(&e.to_string())),
    }
}

/// Recursive directory walk yielding every file under `root` the matcher admits.
///
/// Ignored directories are pruned before they are read. Only `matcher`
/// decides exclusion: hidden files are included and no `.gitignore` files
/// are picked up on the way down. Unreadable entries are logged and skipped.
pub fn walk(
    root: &Path,
    matcher: &IgnoreMatcher,
    options: &WalkOptions,
) -> impl Iterator<Item = PathBuf> + use<> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    let matcher = matcher.clone();
    let root = root.to_path_buf();
    let resolved_root = resolve(&root);
    builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        let path = entry.path();
        // The matcher sees resolved paths so that relative roots and ignore files line up.
        let candidate = path
            .strip_prefix(&root)
            .map_or_else(|_| path.to_path_buf(), |rel| resolved_root.join(rel));
        let ignored = matcher.is_ignored(&candidate, is_dir);
        if ignored {
            log::trace!("ignored {}", path.display());
        }
        !ignored
    });

    builder.build().filter_map(|entry| match entry {
        Ok(entry) if is_file(&entry) => Some(entry.into_path()),
        Ok(_) => None,
        Err(e) => {
            log::warn!("skipping unreadable entry: {e}");
            None
        }
    })
}

fn is_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        // Unfollowed links still count when they point at a file.
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}
