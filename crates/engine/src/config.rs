use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
}

/// Everything a single scan needs: where to start, what to ignore, how to walk.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(error = "crate::error::EngineError"))]
pub struct ScanConfig {
    pub root: PathBuf,
    /// gitignore-style pattern file. `None` means nothing is ignored.
    #[builder(default)]
    pub ignore_file: Option<PathBuf>,
    #[builder(default)]
    pub walk: WalkOptions,
}

impl ScanConfig {
    /// Shorthand for a scan of `root` with no ignore file and default walk options.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_file: None,
            walk: WalkOptions::default(),
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for crate::error::EngineError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        Self::Config(e.to_string())
    }
}
