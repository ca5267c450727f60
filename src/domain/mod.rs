//! Shared data model layer (structs/enums only).
//!
//! ## Purpose
//! - Keep trial, answer, and config types in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or stdin side effects.
//!
//! ## Compatibility note
//! `CardAnswer` and `AlarmAnswer` define the `--json` rows.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod models;
