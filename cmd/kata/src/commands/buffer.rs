//! Circular buffer command.

use clap::Args;
use kata_cli::script::{load_script, Script};

use super::{get_config, get_output};
use crate::Cli;

/// Replay operations on a fixed-capacity circular buffer.
///
/// Steps are `read`, `clear`, `write:VALUE` and `overwrite:VALUE`. They can
/// be given inline, loaded from a YAML/JSON script with `-f`, or both (inline
/// steps run after the file's).
///
/// The capacity comes from `--capacity`, then the script, then
/// `default_capacity` in the config file.
#[derive(Args)]
pub struct BufferCommand {
    /// Buffer capacity
    #[arg(short = 'n', long)]
    capacity: Option<usize>,

    /// Script file (YAML or JSON)
    #[arg(short = 'f', long = "file")]
    file: Option<String>,

    /// Steps to run
    steps: Vec<String>,
}

impl BufferCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;

        let mut script = match &self.file {
            Some(path) => load_script(path)?,
            None => Script::default(),
        };
        script
            .steps
            .extend(Script::from_tokens(&self.steps)?.steps);

        if script.steps.is_empty() {
            anyhow::bail!("no steps given: pass steps like `write:1 read` or a script with -f");
        }

        let capacity = cfg
            .resolve_capacity(self.capacity, script.capacity)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "no capacity: use --capacity, set it in the script, or run `kata config set-capacity`"
                )
            })?;

        tracing::debug!(capacity, steps = script.steps.len(), "running buffer script");
        let report = script.run(capacity)?;
        get_output(cli, &cfg).write(&report)
    }
}
