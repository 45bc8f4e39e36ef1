use crate::error::BackendError;
use crate::link::LinkRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// The durable key-value collaborator the mapping store writes through.
///
/// Liveness-sensitive operations take the caller's `now` explicitly, so
/// the service's clock is the single time authority.
#[async_trait]
pub trait Backend: Send + Sync + 'static {
    /// Atomic conditional insert.
    ///
    /// Fails with [`BackendError::Conflict`] when `code` is owned by a
    /// record that is still live at `now`. An expired record under the
    /// same code does not block the insert and is replaced. The occupancy
    /// check and the write are one operation with no observable
    /// intermediate state.
    async fn insert(&self, code: &ShortCode, record: LinkRecord, now: Timestamp) -> Result<()>;

    /// Point lookup. May return an expired record; liveness filtering is
    /// the caller's concern.
    async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;

    /// Removes the record for `code`. Returns `true` if one existed.
    async fn delete(&self, code: &ShortCode) -> Result<bool>;

    /// Physically removes every record expired at `now`, returning the
    /// number removed. Space reclamation only: inserts and lookups filter
    /// liveness on their own and never depend on this running.
    async fn purge_expired(&self, now: Timestamp) -> Result<u64>;
}
