use crate::Generator;
use mayfly_core::shortcode::{ALPHABET, CODE_LENGTH};
use mayfly_core::ShortCode;
use rand::Rng;

/// Uniform random code generator.
///
/// Draws [`CODE_LENGTH`] symbols from the 62-character alphabet, a space
/// of 62^7 codes, so collisions against the live set are rare and the
/// store's bounded retry loop is a safety net rather than a hot path.
/// Randomness does not need to be cryptographic; it only needs to be
/// uniform.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    /// Creates a new random generator.
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_satisfy_the_contract() {
        let generator = RandomGenerator::new();

        for _ in 0..100 {
            let code = generator.generate();
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(code.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
            // A generated code must survive re-validation.
            assert!(ShortCode::parse(code.as_str()).is_ok());
        }
    }

    #[test]
    fn draws_are_not_constant() {
        let generator = RandomGenerator::new();

        let codes: std::collections::HashSet<String> = (0..100)
            .map(|_| generator.generate().as_str().to_owned())
            .collect();

        // 100 draws from a 62^7 space colliding down to one value would
        // mean the generator is not drawing at all.
        assert!(codes.len() > 1);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
