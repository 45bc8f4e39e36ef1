//! Backend implementations for the Mayfly link shortener.
//!
//! The durable production store is an external collaborator behind the
//! [`mayfly_core::Backend`] seam; this crate provides the in-memory
//! implementation used by tests, development, and single-node setups.

pub mod memory;

pub use memory::InMemoryBackend;
