use jiff::{SignedDuration, Timestamp};
use mayfly_core::{
    Backend, BackendError, Clock, LinkRecord, ShortCode, ShortLink, StoreError, SystemClock,
};
use mayfly_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

/// Result type for mapping store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Tuning knobs for [`LinkStore`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct StoreSettings {
    /// Upper bound on conditional-insert attempts per `create` call.
    #[builder(default = 5)]
    pub max_retries: u32,
    /// Lifetime granted when the caller supplies no expiry.
    #[builder(default = SignedDuration::from_hours(24))]
    pub default_ttl: SignedDuration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Parameters for creating a short link.
#[derive(Debug, Clone)]
pub struct CreateParams {
    /// The destination URL. Assumed already validated by the caller
    /// (non-empty, http(s) scheme).
    pub original_url: String,
    /// Optional caller-supplied expiry. Must be strictly in the future.
    pub expire_at: Option<Timestamp>,
}

/// The mapping store: owns the create/lookup/expire protocol against the
/// durable backend.
///
/// `create` is the only operation needing cross-caller coordination, and
/// that coordination is delegated entirely to the backend's atomic
/// conditional insert; the store itself never does a read-then-write
/// uniqueness check. `resolve` is a single uncoordinated read.
#[derive(Debug)]
pub struct LinkStore<B, G, C = SystemClock> {
    backend: Arc<B>,
    generator: Arc<G>,
    clock: C,
    settings: StoreSettings,
}

impl<B, G, C: Clone> Clone for LinkStore<B, G, C> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            generator: Arc::clone(&self.generator),
            clock: self.clock.clone(),
            settings: self.settings,
        }
    }
}

impl<B: Backend, G: Generator> LinkStore<B, G> {
    /// Creates a store backed by the real system clock.
    pub fn new(backend: B, generator: G, settings: StoreSettings) -> Self {
        Self::with_clock(backend, generator, SystemClock, settings)
    }
}

impl<B: Backend, G: Generator, C: Clock> LinkStore<B, G, C> {
    /// Creates a store reading time from a caller-supplied clock.
    pub fn with_clock(backend: B, generator: G, clock: C, settings: StoreSettings) -> Self {
        Self {
            backend: Arc::new(backend),
            generator: Arc::new(generator),
            clock,
            settings,
        }
    }

    /// Returns a handle to the backend, shared with the reaper.
    pub fn backend(&self) -> Arc<B> {
        Arc::clone(&self.backend)
    }

    /// Creates a new short link for `params.original_url`.
    ///
    /// Draws candidates from the generator and performs up to
    /// `max_retries` atomic conditional inserts. Only uniqueness
    /// conflicts are retried; any other backend failure aborts
    /// immediately and surfaces untransformed. On success exactly one
    /// durable write has happened; failed attempts leave no visible
    /// state.
    pub async fn create(&self, params: CreateParams) -> Result<ShortLink> {
        let created_at = self.clock.now();

        // Upstream validation owns this check; re-checking here keeps the
        // input contract enforced even for direct callers.
        if let Some(expire_at) = params.expire_at {
            if expire_at <= created_at {
                return Err(StoreError::InvalidInput(format!(
                    "expiry must be strictly in the future, got {expire_at}"
                )));
            }
        }

        let expire_at = params
            .expire_at
            .unwrap_or_else(|| created_at + self.settings.default_ttl);

        let record = LinkRecord {
            original_url: params.original_url,
            created_at,
            expire_at,
        };

        for attempt in 1..=self.settings.max_retries {
            let code = self.generator.generate();

            match self
                .backend
                .insert(&code, record.clone(), created_at)
                .await
            {
                Ok(()) => {
                    debug!(code = %code, attempt, "short link created");
                    return Ok(ShortLink {
                        code,
                        original_url: record.original_url,
                        created_at,
                        expire_at,
                    });
                }
                Err(BackendError::Conflict(_)) => {
                    trace!(code = %code, attempt, "candidate collided with a live record");
                }
                Err(err) => return Err(StoreError::Backend(err)),
            }
        }

        warn!(
            attempts = self.settings.max_retries,
            "retry budget exhausted without an unused code"
        );
        Err(StoreError::CodeSpaceExhausted {
            attempts: self.settings.max_retries,
        })
    }

    /// Resolves a short code to its original URL.
    ///
    /// Malformed codes are rejected before any backend access. A missing
    /// record and an expired record both surface as
    /// [`StoreError::NotFoundOrExpired`]. The URL is returned unchanged.
    pub async fn resolve(&self, code: &str) -> Result<String> {
        let code = ShortCode::parse(code)?;
        trace!(code = %code, "resolving short code");

        let Some(record) = self.backend.get(&code).await? else {
            trace!(code = %code, "short code not found");
            return Err(StoreError::NotFoundOrExpired);
        };

        if !record.is_live(self.clock.now()) {
            debug!(code = %code, "record has expired");
            return Err(StoreError::NotFoundOrExpired);
        }

        debug!(code = %code, url = %record.original_url, "resolved short code");
        Ok(record.original_url)
    }
}
