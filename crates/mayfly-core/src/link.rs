use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored link mapping, keyed by its short code in the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The destination URL.
    pub original_url: String,
    /// When the record was created. Set once, never mutated.
    pub created_at: Timestamp,
    /// When the record stops being served. Strictly after `created_at`,
    /// immutable once set.
    pub expire_at: Timestamp,
}

impl LinkRecord {
    /// Whether the record is still served at `now`.
    ///
    /// A record is live strictly before its expiry; at `expire_at` and
    /// after, it is logically deleted and its code reusable.
    pub fn is_live(&self, now: Timestamp) -> bool {
        self.expire_at > now
    }
}

/// A created short link: the stored record plus the code that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLink {
    pub code: ShortCode,
    pub original_url: String,
    pub created_at: Timestamp,
    pub expire_at: Timestamp,
}
