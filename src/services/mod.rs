//! Service layer: extraction, normalization, comparison, output.
//!
//! ## Service map
//! - `sources.rs` — read the three artifacts up front (only fatal errors).
//! - `webapp.rs` — regex extraction from the free-form JS artifact.
//! - `scraper.rs` — direct lookups in the structured JSON artifact.
//! - `android.rs` — regex extraction from the Kotlin artifact.
//! - `normalize.rs` — escape decoding so datasets compare equal.
//! - `compare.rs` — set/map comparison producing `CheckOutcome` values.
//! - `output.rs` — text/JSON rendering.
//!
//! ## Conventions
//! - Extractors never fail on absent data: no matches means an empty dataset,
//!   surfaced later as a WARN, not an error.
//! - Comparison functions are pure; no shared mutable error list.
//! - All user-visible output goes through `output.rs`.

pub mod android;
pub mod compare;
pub mod normalize;
pub mod output;
pub mod scraper;
pub mod sources;
pub mod webapp;
