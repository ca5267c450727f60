//! Service layer containing exercise logic and I/O helpers.
//!
//! ## Service map
//! - `scanner.rs` — whitespace integer tokenizer + trailing-input check.
//! - `card.rs` — card trial parsing and the bucket-count answer.
//! - `alarm.rs` — falsealarm trial parsing and the button simulation.
//! - `settings.rs` — config file loading and flag merging.
//! - `input.rs` — stdin/file input.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Parsing and solving are pure; only `input.rs`/`output.rs` touch I/O.
//! - Keep command handlers thin; delegate to services.

pub mod alarm;
pub mod card;
pub mod input;
pub mod output;
pub mod scanner;
pub mod settings;
