// crates/engine/src/ignore_file.rs
//! gitignore-style exclusion for a scan.
//!
//! The grammar itself (`#` comments, `*`/`**` globs, `!` negation, trailing-`/`
//! directory patterns) is handled by [`ignore::gitignore`]. This module only
//! decides where the patterns are anchored and how a bad pattern file degrades.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Compiled ignore patterns, built once per scan.
///
/// Cloning is cheap; the compiled glob set is shared.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    inner: Option<Arc<Gitignore>>,
    cwd: Option<PathBuf>,
}

impl IgnoreMatcher {
    /// A matcher that ignores nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load patterns from `path`.
    ///
    /// Missing or unreadable files produce [`IgnoreMatcher::empty`]; lines that
    /// fail to compile are skipped and the rest still apply.
    #[must_use]
    pub fn from_file(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::empty();
        };

        if !path.is_file() {
            log::debug!("ignore file {} not found; nothing is ignored", path.display());
            return Self::empty();
        }

        let contents = match std::fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                log::warn!("cannot read ignore file {}: {e}", path.display());
                return Self::empty();
            }
        };

        // Patterns are anchored where git would anchor them: the directory holding the file.
        let base = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::from_patterns(&resolve(base), Some(path), &contents)
    }

    /// Compile `contents` as if it were an ignore file living in `base`.
    #[must_use]
    pub fn from_patterns(base: &Path, source: Option<&Path>, contents: &str) -> Self {
        let mut builder = GitignoreBuilder::new(base);
        let from = source.map(Path::to_path_buf);

        for (idx, line) in contents.lines().enumerate() {
            if let Err(e) = builder.add_line(from.clone(), line) {
                log::warn!("skipping ignore pattern on line {}: {e}", idx + 1);
            }
        }

        match builder.build() {
            Ok(gitignore) => {
                log::debug!(
                    "loaded {} ignore patterns anchored at {}",
                    gitignore.len(),
                    base.display()
                );
                Self {
                    inner: Some(Arc::new(gitignore)),
                    cwd: std::env::current_dir().ok().map(|d| resolve(&d)),
                }
            }
            Err(e) => {
                log::warn!("ignore patterns could not be compiled: {e}");
                Self::empty()
            }
        }
    }

    /// Number of compiled patterns (0 for the empty matcher).
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.inner.as_ref().map_or(0, |g| g.len())
    }

    /// Whether `path` is excluded. `is_dir` enables directory-only patterns.
    ///
    /// Relative paths are taken relative to the current directory.
    #[must_use]
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        let Some(gitignore) = &self.inner else {
            return false;
        };

        let absolute;
        let path = match &self.cwd {
            Some(cwd) if path.is_relative() => {
                absolute = cwd.join(path);
                absolute.as_path()
            }
            _ => path,
        };

        gitignore.matched(path, is_dir).is_ignore()
    }
}

/// Canonical form of `path` when it exists, otherwise its absolute form.
pub(crate) fn resolve(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
