//! Mapping store service for the Mayfly link shortener.
//!
//! This crate owns the create/resolve/expire lifecycle of short links:
//! code generation with bounded collision retry, liveness-filtered
//! lookups, and the optional background reaper.

pub mod reaper;
pub mod store;

pub use reaper::Reaper;
pub use store::{CreateParams, LinkStore, StoreSettings};
