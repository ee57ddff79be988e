//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep domain/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — canonical status enum, discrepancy/outcome/report structs.
//! - `constants.rs` — fixed artifact locations relative to the repo root.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects, no regex.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` output and the report contract.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
