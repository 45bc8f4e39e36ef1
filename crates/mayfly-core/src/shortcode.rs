use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of characters in every short code.
pub const CODE_LENGTH: usize = 7;

/// The 62-symbol alphabet short codes are drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A validated short code identifier for a shortened link.
///
/// Short codes are exactly [`CODE_LENGTH`] characters drawn from
/// `[A-Za-z0-9]`. The fixed shape keeps lookups a single point read and
/// lets callers reject malformed codes before any backend access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(String);

impl ShortCode {
    /// Parses a `ShortCode` after validating the length/alphabet contract.
    pub fn parse(code: impl Into<String>) -> Result<Self, StoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (generators that are guaranteed to respect the alphabet contract).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), StoreError> {
        if code.len() != CODE_LENGTH {
            return Err(StoreError::InvalidCodeFormat(format!(
                "length must be exactly {}, got {}",
                CODE_LENGTH,
                code.len()
            )));
        }

        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(StoreError::InvalidCodeFormat(format!(
                "must contain only ASCII letters and digits: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::parse("abc1234").is_ok());
        assert!(ShortCode::parse("AbCdEfG").is_ok());
        assert!(ShortCode::parse("0000000").is_ok());
    }

    #[test]
    fn wrong_length() {
        assert!(ShortCode::parse("").is_err());
        assert!(ShortCode::parse("abc123").is_err());
        assert!(ShortCode::parse("abc12345").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::parse("abc 123").is_err());
        assert!(ShortCode::parse("abc-123").is_err());
        assert!(ShortCode::parse("abc_123").is_err());
        assert!(ShortCode::parse("abc!123").is_err());
        assert!(ShortCode::parse("abcd12é").is_err());
    }

    #[test]
    fn rejection_is_a_format_error() {
        let err = ShortCode::parse("bad code!").unwrap_err();
        assert!(matches!(err, StoreError::InvalidCodeFormat(_)));
    }

    #[test]
    fn display_round_trips() {
        let code = ShortCode::parse("xYz0987").unwrap();
        assert_eq!(code.to_string(), "xYz0987");
        assert_eq!(code.as_str(), "xYz0987");
    }

    #[test]
    fn to_url_joins_base() {
        let code = ShortCode::parse("abc1234").unwrap();
        assert_eq!(code.to_url("https://may.fly"), "https://may.fly/abc1234");
        assert_eq!(code.to_url("https://may.fly/"), "https://may.fly/abc1234");
    }

    #[test]
    fn alphabet_covers_base62() {
        assert_eq!(ALPHABET.len(), 62);
        let unique: std::collections::HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), ALPHABET.len());
    }
}
