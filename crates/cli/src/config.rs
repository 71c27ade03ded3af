//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};

use stockwatch_observability::LogFormat;
use stockwatch_parties::{AssignmentRule, DEFAULT_LOCAL_CATEGORY};

/// Which catalog to start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedMode {
    /// The five demo products.
    Demo,
    /// No products.
    Empty,
}

/// Every flag can also come from the environment; flags win.
#[derive(Debug, Clone, Parser)]
#[command(name = "stockwatch", version, about = "Inventory restocking notifications")]
pub struct Config {
    /// Category served by local suppliers; global suppliers take the rest.
    #[arg(long, env = "STOCKWATCH_LOCAL_CATEGORY", default_value = DEFAULT_LOCAL_CATEGORY)]
    pub local_category: String,

    /// Initial catalog.
    #[arg(long, env = "STOCKWATCH_SEED", value_enum, default_value_t = SeedMode::Demo)]
    pub seed: SeedMode,

    /// Log output format (`json` or `pretty`). Filtering uses `RUST_LOG`.
    #[arg(long, env = "STOCKWATCH_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,
}

impl Config {
    pub fn assignment_rule(&self) -> AssignmentRule {
        AssignmentRule::new(self.local_category.clone())
    }
}
