//! HTTP gateway for the Mayfly link shortener.
//!
//! Routing, request validation, and error-to-status mapping live here;
//! the mapping store and the code generator are wired in from the
//! sibling crates.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod validate;
