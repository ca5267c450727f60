use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const STDIN_MARKER: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "judgebox", version, about = "Batch runner for judge exercises")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = STDIN_MARKER,
        help = "Read trials from this file instead of stdin ('-' for stdin)"
    )]
    pub input: String,
    #[arg(long, global = true, help = "Config file (default: ~/.config/judgebox/config.toml)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Reject input left over after the last trial")]
    pub strict: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fewest cards to remove so the rest share a value.
    Card,
    /// Whether one button press covers every closed door.
    #[command(name = "falsealarm")]
    FalseAlarm,
}

impl Cli {
    pub fn input_path(&self) -> Option<PathBuf> {
        if self.input == STDIN_MARKER {
            None
        } else {
            Some(PathBuf::from(&self.input))
        }
    }
}
