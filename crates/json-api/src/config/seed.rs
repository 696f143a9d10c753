//! Seed Feed Config

use clap::Args;
use salesboard_app::feed::DEFAULT_SEED_SOURCE_URL;

/// Seed feed settings.
#[derive(Debug, Args)]
pub struct SeedConfig {
    /// URL of the JSON array imported by the seed endpoint
    #[arg(long, env = "SEED_SOURCE_URL", default_value = DEFAULT_SEED_SOURCE_URL)]
    pub seed_source_url: String,
}
