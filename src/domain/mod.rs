//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — input product, generated pages, run reports.
//! - `constants.rs` — stable constants (endpoint defaults, file names, thresholds).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Page structs are written verbatim to the output directory.
//! Keep field renames explicit and synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
