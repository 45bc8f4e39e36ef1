//! Short code generation for the Mayfly link shortener.
//!
//! Generators are pure: they produce candidate codes and never talk to
//! storage. Collision handling happens at insert time in the mapping
//! store, which discards a colliding candidate and draws a fresh one.

pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SequenceGenerator;

use mayfly_core::ShortCode;

/// Trait for generating candidate short codes.
///
/// Implementations can vary from uniform random generators to
/// deterministic counters; all must respect the fixed length/alphabet
/// contract of [`ShortCode`]. Generation cannot fail.
pub trait Generator: Send + Sync + 'static {
    /// Produces the next candidate short code.
    fn generate(&self) -> ShortCode;
}
