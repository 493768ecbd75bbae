//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use shade::build_info::{HELP_BUILD_METADATA, LONG_VERSION};

/// Keep terminal color themes in step with light/dark mode.
#[derive(Debug, Parser)]
#[command(
    name = "shade",
    version,
    long_version = LONG_VERSION,
    after_help = HELP_BUILD_METADATA
)]
pub struct Args {
    /// Path to config file (default: ./shade.toml or ~/.config/shade/shade.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Follow iTerm2's effective theme and update profiles as it changes.
    Watch,
    /// Switch once based on today's sunrise and sunset (run from cron).
    Sun,
    /// Write the default config to ~/.config/shade/shade.toml.
    Init {
        /// Overwrite an existing config after backing it up.
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use clap::Parser;

    #[test]
    fn sun_parses_with_global_config_flag() {
        let args = Args::parse_from(["shade", "sun", "--config", "/tmp/shade.toml"]);
        assert_eq!(args.command, Command::Sun);
        assert_eq!(args.config.as_deref(), Some("/tmp/shade.toml"));
    }

    #[test]
    fn init_accepts_force() {
        let args = Args::parse_from(["shade", "--no-color", "init", "--force"]);
        assert_eq!(args.command, Command::Init { force: true });
        assert!(args.no_color);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["shade"]).is_err());
    }
}
