use crate::config::ScanConfig;
use crate::error::Result;
use crate::filesystem::{validate_root, walk};
use crate::ignore_file::IgnoreMatcher;
use crate::processor::classify_file;
use std::path::PathBuf;

/// Empty-line positions for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyLineReport {
    pub path: PathBuf,
    /// Zero-based, ascending, never empty.
    pub indices: Vec<usize>,
}

/// Find every empty line under the configured root.
///
/// Files without empty lines are left out. Reports are ordered by path.
///
/// # Errors
/// Returns [`crate::error::EngineError::InvalidRoot`] if the root is not a directory.
pub fn locate_empty_lines(config: &ScanConfig) -> Result<Vec<EmptyLineReport>> {
    validate_root(&config.root)?;
    let matcher = IgnoreMatcher::from_file(config.ignore_file.as_deref());

    let mut reports: Vec<_> = walk(&config.root, &matcher, &config.walk)
        .filter_map(|path| {
            let lines = classify_file(&path);
            (!lines.empty_indices.is_empty()).then(|| EmptyLineReport {
                path,
                indices: lines.empty_indices,
            })
        })
        .collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    log::info!("{} files contain empty lines", reports.len());
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reports_indices_and_skips_clean_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("gappy.rs"), "a\nb\n\nc\nd\n\t\ne\n").unwrap();
        fs::write(dir.path().join("dense.rs"), "a\nb\nc\n").unwrap();

        let reports = locate_empty_lines(&ScanConfig::new(dir.path())).unwrap();

        assert_eq!(
            reports,
            vec![EmptyLineReport {
                path: dir.path().join("gappy.rs"),
                indices: vec![2, 5],
            }]
        );
    }

    #[test]
    fn test_respects_ignore_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("build")).unwrap();
        fs::write(dir.path().join("build/gen.rs"), "\n\n").unwrap();
        fs::write(dir.path().join("kept.rs"), "x\n\n").unwrap();
        let ignore = dir.path().join(".gitcount");
        fs::write(&ignore, "build/\n").unwrap();

        let config = ScanConfig {
            ignore_file: Some(ignore),
            ..ScanConfig::new(dir.path())
        };
        let reports = locate_empty_lines(&config).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].path, dir.path().join("kept.rs"));
        assert_eq!(reports[0].indices, vec![1]);
    }

    #[test]
    fn test_invalid_root() {
        let dir = TempDir::new().unwrap();
        assert!(locate_empty_lines(&ScanConfig::new(dir.path().join("nope"))).is_err());
    }
}
