//! CLI utilities for kata.
//!
//! This crate provides the configuration file, output formatting and buffer
//! script runner shared by the `kata` binary.

pub mod config;
pub mod output;
pub mod script;

pub use config::{load_config, Config};
pub use output::{Output, OutputFormat};
pub use script::{Op, Report, Script, ScriptError, Step, StepReport};
