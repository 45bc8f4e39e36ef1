//! Core types and traits for the Mayfly link shortener.
//!
//! This crate provides the shared vocabulary used by the code generator,
//! the storage backends, the mapping store, and the HTTP gateway.

pub mod backend;
pub mod clock;
pub mod error;
pub mod link;
pub mod shortcode;

pub use backend::Backend;
pub use clock::{Clock, SystemClock};
pub use error::{BackendError, StoreError};
pub use link::{LinkRecord, ShortLink};
pub use shortcode::ShortCode;
