//! kata CLI - run the circular buffer and the coding exercises from the shell.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{
    AcronymCommand, ArmstrongCommand, BufferCommand, ConfigCommand, CryptoSquareCommand,
    DartsCommand, DndCommand, EggsCommand, ResistorCommand, SetCommand, SquaresCommand,
    TwoFerCommand,
};

/// kata - a toolbox of small coding exercises.
///
/// The `buffer` command replays read/write/overwrite/clear operations on a
/// fixed-capacity circular buffer and reports what each one did. The other
/// commands run one exercise each.
///
/// Configuration is stored in ~/.kata/kata/config.yaml
#[derive(Parser)]
#[command(name = "kata")]
#[command(about = "Coding exercise toolbox")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.kata/kata/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage CLI configuration
    Config(ConfigCommand),
    /// Replay operations on a circular buffer
    Buffer(BufferCommand),
    /// Build an acronym from a phrase
    Acronym(AcronymCommand),
    /// Check whether a number is an Armstrong number
    Armstrong(ArmstrongCommand),
    /// Encode text with the crypto square cipher
    #[command(name = "crypto-square")]
    CryptoSquare(CryptoSquareCommand),
    /// Score a dart throw
    Darts(DartsCommand),
    /// Square of sum, sum of squares and their difference
    Squares(SquaresCommand),
    /// Roll D&D characters
    Dnd(DndCommand),
    /// Count the eggs in a display value
    Eggs(EggsCommand),
    /// Decode a two-band resistor value
    Resistor(ResistorCommand),
    /// Share something: one for you, one for me
    #[command(name = "two-fer")]
    TwoFer(TwoFerCommand),
    /// Compare two integer sets
    Set(SetCommand),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Config(cmd) => cmd.run(&cli),
        Commands::Buffer(cmd) => cmd.run(&cli),
        Commands::Acronym(cmd) => cmd.run(&cli),
        Commands::Armstrong(cmd) => cmd.run(&cli),
        Commands::CryptoSquare(cmd) => cmd.run(&cli),
        Commands::Darts(cmd) => cmd.run(&cli),
        Commands::Squares(cmd) => cmd.run(&cli),
        Commands::Dnd(cmd) => cmd.run(&cli),
        Commands::Eggs(cmd) => cmd.run(&cli),
        Commands::Resistor(cmd) => cmd.run(&cli),
        Commands::TwoFer(cmd) => cmd.run(&cli),
        Commands::Set(cmd) => cmd.run(&cli),
    }
}
