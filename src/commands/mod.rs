//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `check.rs` — the full parity run: extract, normalize, compare, report.
//! - `dump.rs` — print one extracted dataset for debugging extraction rules.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate extraction and comparison to `services/*`.
//! - Keep output schema stable; it is covered by `docs/contracts/*`.

pub mod check;
pub mod dump;

pub use check::run_checks;
pub use dump::handle_dump;
