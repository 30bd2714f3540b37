//! Helpers shared by the commands.

use kata_cli::{load_config, Config, Output, OutputFormat};

use crate::Cli;

/// Application name used for the config directory.
pub const APP_NAME: &str = "kata";

/// Loads the configuration selected by `--config`.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config(APP_NAME, cli.config.as_deref())
}

/// Builds the output target; `--json` wins over the configured format.
pub fn get_output(cli: &Cli, cfg: &Config) -> Output {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        cfg.output
    };
    Output::new(format, cli.output.clone())
}

/// Prints a success message.
pub fn print_success(msg: &str) {
    eprintln!("[ok] {}", msg);
}
