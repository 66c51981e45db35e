//! CLI commands for vaultscan

pub mod daily;
pub mod orphans;
pub mod tags;

use crate::cli::{Cli, Commands};
use vaultscan_core::config::ScanConfig;
use vaultscan_core::error::Result;
use vaultscan_core::vault::Vault;

/// Dispatch the parsed CLI to its command
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Orphans => orphans::execute(cli),
        Commands::Tags { output } => tags::execute(cli, output.as_deref()),
        Commands::Daily { date, dir } => daily::execute(cli, date.as_deref(), dir),
    }
}

/// Open the vault named by the global flags
pub(crate) fn open_vault(cli: &Cli) -> Result<Vault> {
    let config = ScanConfig::default().with_extra_exclusions(cli.exclude.iter().cloned());
    Vault::open(&cli.root, config)
}
