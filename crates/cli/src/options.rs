use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width table with a `Sum:` row
    #[default]
    Table,
    /// One JSON document with per-extension rows and totals
    Json,
}
