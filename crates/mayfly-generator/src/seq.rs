use crate::Generator;
use mayfly_core::shortcode::CODE_LENGTH;
use mayfly_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter wraps here so codes keep the fixed length.
const COUNTER_SPACE: u64 = 10_000_000;

/// A deterministic short code generator using a sequential counter.
///
/// Produces zero-padded codes like "0000000", "0000001", which satisfy
/// the fixed-length alphanumeric contract. Useful in tests and tooling
/// where reproducible codes matter more than unguessability.
#[derive(Debug)]
pub struct SequenceGenerator {
    counter: AtomicU64,
}

impl Clone for SequenceGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl SequenceGenerator {
    /// Creates a new sequence generator starting at zero.
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a new sequence generator starting from a specific counter
    /// value. Useful for resuming from a known state or distributing
    /// counter ranges across instances.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SequenceGenerator {
    fn generate(&self) -> ShortCode {
        let count = self.counter.fetch_add(1, Ordering::SeqCst) % COUNTER_SPACE;
        ShortCode::new_unchecked(format!("{:0width$}", count, width = CODE_LENGTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_codes() {
        let generator = SequenceGenerator::new();

        assert_eq!(generator.generate().as_str(), "0000000");
        assert_eq!(generator.generate().as_str(), "0000001");
        assert_eq!(generator.generate().as_str(), "0000002");
    }

    #[test]
    fn with_offset_starts_mid_range() {
        let generator = SequenceGenerator::with_offset(1000);

        assert_eq!(generator.generate().as_str(), "0001000");
        assert_eq!(generator.generate().as_str(), "0001001");
    }

    #[test]
    fn codes_satisfy_the_contract() {
        let generator = SequenceGenerator::with_offset(9_999_999);

        // Boundary: the counter wraps instead of growing an eighth digit.
        assert_eq!(generator.generate().as_str(), "9999999");
        assert_eq!(generator.generate().as_str(), "0000000");

        let code = generator.generate();
        assert!(ShortCode::parse(code.as_str()).is_ok());
    }

    #[test]
    fn clone_preserves_counter_state() {
        let generator = SequenceGenerator::new();
        generator.generate();
        generator.generate();

        let cloned = generator.clone();

        assert_eq!(generator.generate().as_str(), "0000002");
        assert_eq!(cloned.generate().as_str(), "0000002");
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SequenceGenerator>();
    }
}
