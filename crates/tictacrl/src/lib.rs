//! Terminal driver for the tictacrl engine.
//!
//! Parses the command line, loads configuration, and runs the console game
//! loop. All rules live in [`tictacrl_engine`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DisplayConfig, TictacrlConfig};
pub use console::{Input, describe, parse_input, play, replay};
