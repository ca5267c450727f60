//! Command handler layer.
//!
//! Owns input/output wiring for the `card` and `falsealarm` subcommands.
//! Parse CLI inputs here and delegate the exercise logic to `services/*`.
//! Keep text output byte-compatible with the judge format.

pub mod runtime;

pub use runtime::handle_runtime_commands;
