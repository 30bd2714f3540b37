//! CLI commands module.

mod buffer;
mod config;
mod exercise;
mod util;

pub use buffer::BufferCommand;
pub use config::ConfigCommand;
pub use exercise::{
    AcronymCommand, ArmstrongCommand, CryptoSquareCommand, DartsCommand, DndCommand, EggsCommand,
    ResistorCommand, SetCommand, SquaresCommand, TwoFerCommand,
};

pub(crate) use util::*;
