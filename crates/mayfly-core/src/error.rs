use thiserror::Error;

/// Failure modes of the durable backend itself.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// The code is already owned by a live record.
    #[error("short code already taken: {0}")]
    Conflict(String),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("backend operation timed out: {0}")]
    Timeout(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("backend operation failed: {0}")]
    Operation(String),
}

/// Failure modes of the mapping store, as reported to callers.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The caller violated the input contract (e.g. a non-future expiry).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The looked-up code does not match the alphabet/length contract.
    #[error("invalid short code: {0}")]
    InvalidCodeFormat(String),
    /// The code is unknown or its record has expired. The two cases are
    /// deliberately indistinguishable so clients cannot probe which codes
    /// once existed.
    #[error("url not found or expired")]
    NotFoundOrExpired,
    /// Every candidate in the retry budget collided with a live record.
    #[error("failed to find an unused short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },
    /// The backend failed for a reason other than a uniqueness conflict.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}
