use thiserror::Error;

/// Input validation errors surfaced before any network call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },
}

/// Failures reported by or on the way to the upstream data provider.
///
/// Provider-level advisories (an error payload or a rate-limit note inside an
/// HTTP 200 body) are distinct from transport failures but equally fatal for
/// the lookup that triggered them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("provider error: {0}")]
    Provider(String),
    #[error("provider rate limit: {0}")]
    RateLimited(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("malformed upstream payload: {0}")]
    Payload(String),
}

impl UpstreamError {
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

/// Top-level error for a single ticker lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Persistence errors from the favorites store write path.
///
/// The read path never produces an error for bad data: an absent or malformed
/// blob degrades to an empty collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
