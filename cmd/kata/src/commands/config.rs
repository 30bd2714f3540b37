//! Configuration management commands.

use clap::{Args, Subcommand};
use kata_cli::OutputFormat;

use super::{get_config, print_success};
use crate::Cli;

/// Manage CLI configuration.
///
/// Configuration is stored in ~/.kata/kata/config.yaml
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Set the default buffer capacity
    #[command(name = "set-capacity")]
    SetCapacity {
        /// Capacity (must be greater than 0)
        capacity: usize,
    },
    /// Set the default output format
    #[command(name = "set-output")]
    SetOutput {
        /// yaml or json
        format: String,
    },
    /// View the current configuration
    View,
}

impl ConfigCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            ConfigSubcommand::SetCapacity { capacity } => {
                let mut cfg = get_config(cli)?;
                cfg.set_default_capacity(*capacity)?;
                print_success(&format!("Default capacity set to {}", capacity));
                Ok(())
            }

            ConfigSubcommand::SetOutput { format } => {
                let format: OutputFormat = format.parse()?;
                let mut cfg = get_config(cli)?;
                cfg.set_output(format)?;
                print_success(&format!("Default output set to {}", format));
                Ok(())
            }

            ConfigSubcommand::View => {
                let cfg = get_config(cli)?;

                println!("Config file: {}", cfg.path().display());
                match cfg.default_capacity {
                    Some(capacity) => println!("Default capacity: {}", capacity),
                    None => println!("Default capacity: (not set)"),
                }
                println!("Output: {}", cfg.output);
                Ok(())
            }
        }
    }
}
