use mayfly_core::backend::Result;
use mayfly_core::{Backend, Clock, SystemClock};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Background task that physically deletes expired records.
///
/// Space reclamation only: inserts and lookups filter liveness on their
/// own, so the store behaves identically whether or not the reaper runs.
/// Sweeps are safe against concurrent create/resolve calls because the
/// backend's per-key atomicity already orders a purge of an expired
/// record against an insert reusing its code.
pub struct Reaper<B, C = SystemClock> {
    backend: Arc<B>,
    clock: C,
    interval: Duration,
}

impl<B: Backend> Reaper<B> {
    /// Creates a reaper backed by the real system clock.
    pub fn new(backend: Arc<B>, interval: Duration) -> Self {
        Self::with_clock(backend, SystemClock, interval)
    }
}

impl<B: Backend, C: Clock> Reaper<B, C> {
    /// Creates a reaper reading time from a caller-supplied clock.
    pub fn with_clock(backend: Arc<B>, clock: C, interval: Duration) -> Self {
        Self {
            backend,
            clock,
            interval,
        }
    }

    /// Performs a single sweep, returning how many records were removed.
    pub async fn sweep(&self) -> Result<u64> {
        let removed = self.backend.purge_expired(self.clock.now()).await?;
        if removed > 0 {
            debug!(removed, "reaped expired short links");
        }
        Ok(removed)
    }

    /// Spawns the periodic sweep loop onto the current tokio runtime.
    ///
    /// Sweep failures are logged and the loop keeps running; the task
    /// only ends when the handle is aborted or the runtime shuts down.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            // interval fires immediately; skip straight to the steady cadence.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(err) = self.sweep().await {
                    warn!(error = %err, "reaper sweep failed");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::{SignedDuration, Timestamp};
    use mayfly_core::{LinkRecord, ShortCode};
    use mayfly_storage::InMemoryBackend;
    use std::sync::Mutex;

    #[derive(Clone)]
    struct ManualClock {
        now: Arc<Mutex<Timestamp>>,
    }

    impl ManualClock {
        fn new(now: Timestamp) -> Self {
            Self {
                now: Arc::new(Mutex::new(now)),
            }
        }

        fn advance(&self, delta: SignedDuration) {
            let mut now = self.now.lock().unwrap();
            *now = *now + delta;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Timestamp {
            *self.now.lock().unwrap()
        }
    }

    fn base() -> Timestamp {
        Timestamp::from_second(1_700_000_000).unwrap()
    }

    async fn seed(backend: &InMemoryBackend, code: &str, ttl_hours: i64) {
        let record = LinkRecord {
            original_url: format!("https://example.com/{code}"),
            created_at: base(),
            expire_at: base() + SignedDuration::from_hours(ttl_hours),
        };
        backend
            .insert(&ShortCode::new_unchecked(code), record, base())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn sweep_removes_only_expired_records() {
        let backend = Arc::new(InMemoryBackend::new());
        seed(&backend, "dead111", 1).await;
        seed(&backend, "live111", 48).await;

        let clock = ManualClock::new(base());
        clock.advance(SignedDuration::from_hours(2));
        let reaper = Reaper::with_clock(Arc::clone(&backend), clock, Duration::from_secs(60));

        assert_eq!(reaper.sweep().await.unwrap(), 1);
        assert!(backend
            .get(&ShortCode::new_unchecked("dead111"))
            .await
            .unwrap()
            .is_none());
        assert!(backend
            .get(&ShortCode::new_unchecked("live111"))
            .await
            .unwrap()
            .is_some());

        // A second sweep finds nothing left to reclaim.
        assert_eq!(reaper.sweep().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn sweep_never_removes_live_records() {
        let backend = Arc::new(InMemoryBackend::new());
        seed(&backend, "live111", 24).await;
        seed(&backend, "live222", 24).await;

        let reaper =
            Reaper::with_clock(Arc::clone(&backend), ManualClock::new(base()), Duration::from_secs(60));

        assert_eq!(reaper.sweep().await.unwrap(), 0);
        assert_eq!(backend.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_loop_sweeps_on_its_cadence() {
        let backend = Arc::new(InMemoryBackend::new());
        seed(&backend, "dead111", 1).await;

        let clock = ManualClock::new(base());
        clock.advance(SignedDuration::from_hours(2));

        let handle = Reaper::with_clock(Arc::clone(&backend), clock, Duration::from_secs(30)).spawn();

        // Paused tokio time auto-advances: one full interval elapses and
        // the sweep runs.
        tokio::time::sleep(Duration::from_secs(45)).await;

        assert!(backend.is_empty());
        handle.abort();
    }
}
