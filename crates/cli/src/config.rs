// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use linetally_engine::config::{ScanConfig, ScanConfigBuilder, WalkOptions};

impl TryFrom<&Args> for ScanConfig {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let walk = WalkOptions {
            follow_links: args.scan.follow,
            max_depth: args.scan.max_depth,
        };

        Ok(ScanConfigBuilder::default()
            .root(args.directory.clone())
            .ignore_file(args.scan.ignore_file.clone())
            .walk(walk)
            .build()?)
    }
}
