// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod ignore_file;
pub mod locate;
pub mod processor;
pub mod stats;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::filesystem::{validate_root, walk};
use crate::ignore_file::IgnoreMatcher;
use crate::stats::{Aggregator, Summary};

pub use crate::locate::{EmptyLineReport, locate_empty_lines};

/// Scan `config.root` and aggregate line counts per extension.
///
/// Files are visited one at a time; unreadable files count as zero lines
/// and unreadable directories are skipped.
///
/// # Errors
///
/// Returns [`error::EngineError::InvalidRoot`] when the root does not exist
/// or is not a directory. Nothing past that point is fatal.
pub fn run(config: &ScanConfig) -> Result<Summary> {
    validate_root(&config.root)?;

    let matcher = IgnoreMatcher::from_file(config.ignore_file.as_deref());
    log::debug!(
        "scanning {} with {} ignore patterns",
        config.root.display(),
        matcher.pattern_count()
    );

    let mut aggregator = Aggregator::new();
    for path in walk(&config.root, &matcher, &config.walk) {
        let record = processor::process_file(&path);
        log::trace!(
            "{}: {} lines, {} empty",
            record.path.display(),
            record.non_empty_lines,
            record.empty_lines
        );
        aggregator.add(&record);
    }

    let summary = aggregator.finish();
    log::info!(
        "scanned {} files across {} extensions",
        summary.total_files(),
        summary.len()
    );
    Ok(summary)
}
