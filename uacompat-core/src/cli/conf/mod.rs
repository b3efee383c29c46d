mod check;
mod dump;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate the configuration file and exit
    Check {
        /// Path to the config file (defaults to ./uacompat.hcl when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the resolved configuration as JSON
    Dump {
        /// Path to the config file (defaults to ./uacompat.hcl when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { config } => check(config.as_deref()),
        ConfigCmd::Dump { config } => dump(config.as_deref()),
    }
}
