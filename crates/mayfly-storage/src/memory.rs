use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use mayfly_core::backend::{Backend, Result};
use mayfly_core::{BackendError, LinkRecord, ShortCode};

/// In-memory implementation of the [`Backend`] trait using DashMap.
///
/// DashMap's sharded locks let reads and writes on different buckets
/// proceed concurrently, and its entry API holds the shard lock across
/// the occupied-and-live check and the write, making the conditional
/// insert a single atomic step.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    storage: DashMap<String, LinkRecord>,
}

impl InMemoryBackend {
    /// Creates a new in-memory backend.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory backend with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of physically stored records, expired ones included.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the backend holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl Backend for InMemoryBackend {
    async fn insert(&self, code: &ShortCode, record: LinkRecord, now: Timestamp) -> Result<()> {
        // The entry guard keeps the shard locked, so the liveness check
        // and the write cannot interleave with a concurrent insert on the
        // same code.
        match self.storage.entry(code.as_str().to_owned()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_live(now) {
                    return Err(BackendError::Conflict(code.to_string()));
                }
                // An expired record no longer holds its code.
                occupied.insert(record);
                Ok(())
            }
            Entry::Vacant(vacant) => {
                vacant.insert(record);
                Ok(())
            }
        }
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| entry.value().clone()))
    }

    async fn delete(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.storage.remove(code.as_str()).is_some())
    }

    async fn purge_expired(&self, now: Timestamp) -> Result<u64> {
        let mut removed = 0u64;
        self.storage.retain(|_, record| {
            if record.is_live(now) {
                true
            } else {
                removed += 1;
                false
            }
        });
        Ok(removed)
    }
}
