//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `llm.rs` — endpoint config, remote client, fence stripping + strict page decode.
//! - `prompts.rs` — fixed prompt templates.
//! - `agents.rs` — FAQ and comparison agents.
//! - `competitor.rs` — deterministic competitor synthesis.
//! - `validation.rs` — FAQ minimum and page/input checks.
//! - `pages.rs` — product page templating.
//! - `pipeline.rs` — the sequential run.
//! - `storage.rs` — input loading and the output sink.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Network and filesystem effects live in `llm.rs` and `storage.rs` only.
//! - Keep command handlers thin; delegate to services.

pub mod agents;
pub mod competitor;
pub mod llm;
pub mod output;
pub mod pages;
pub mod pipeline;
pub mod prompts;
pub mod storage;
pub mod validation;
