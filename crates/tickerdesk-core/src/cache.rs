//! Transient per-ticker quote cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::{StockRecord, Ticker};

/// A cached lookup result and the moment it was fetched.
#[derive(Debug, Clone)]
pub struct CachedQuote {
    pub record: StockRecord,
    pub fetched_at: Instant,
}

#[derive(Debug)]
struct CacheInner {
    map: HashMap<String, CachedQuote>,
    ttl: Duration,
}

impl CacheInner {
    fn get(&self, key: &str) -> Option<StockRecord> {
        self.map.get(key).and_then(|entry| {
            if entry.fetched_at.elapsed() <= self.ttl {
                Some(entry.record.clone())
            } else {
                None
            }
        })
    }
}

/// Time-bounded cache keyed by ticker, owned solely by the aggregator and
/// never persisted. Expired entries are overwritten naturally on the next
/// lookup of the same ticker.
#[derive(Debug, Clone)]
pub struct QuoteCache {
    inner: Arc<tokio::sync::RwLock<CacheInner>>,
}

impl QuoteCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(tokio::sync::RwLock::new(CacheInner {
                map: HashMap::new(),
                ttl,
            })),
        }
    }

    /// Cache with the standard 5-minute lifetime.
    pub fn with_default_ttl() -> Self {
        Self::new(Duration::from_secs(300))
    }

    /// A cache that never returns hits and stores nothing.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Return the record for `ticker` if a non-expired entry exists.
    pub async fn get(&self, ticker: &Ticker) -> Option<StockRecord> {
        let cache = self.inner.read().await;
        if cache.ttl == Duration::ZERO {
            return None;
        }
        cache.get(ticker.as_str())
    }

    /// Store a freshly fetched record under its own ticker.
    pub async fn put(&self, record: StockRecord) {
        let mut cache = self.inner.write().await;
        if cache.ttl == Duration::ZERO {
            return;
        }
        cache.map.insert(
            record.ticker.as_str().to_owned(),
            CachedQuote {
                record,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop entries past their lifetime.
    pub async fn clear_expired(&self) {
        let mut cache = self.inner.write().await;
        let ttl = cache.ttl;
        cache.map.retain(|_, entry| entry.fetched_at.elapsed() <= ttl);
    }

    pub async fn clear(&self) {
        let mut cache = self.inner.write().await;
        cache.map.clear();
    }

    /// Number of entries, expired ones included.
    pub async fn len(&self) -> usize {
        let cache = self.inner.read().await;
        cache.map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn record(ticker: &str) -> StockRecord {
        StockRecord::unavailable(
            Ticker::parse(ticker).expect("valid ticker"),
            OffsetDateTime::UNIX_EPOCH,
        )
    }

    #[tokio::test]
    async fn stores_and_returns_fresh_entries() {
        let cache = QuoteCache::new(Duration::from_secs(60));
        let ticker = Ticker::parse("AAPL").expect("valid ticker");

        assert!(cache.get(&ticker).await.is_none());

        cache.put(record("AAPL")).await;
        let hit = cache.get(&ticker).await.expect("fresh entry");
        assert_eq!(hit.ticker.as_str(), "AAPL");
    }

    #[tokio::test]
    async fn expired_entries_are_misses() {
        let cache = QuoteCache::new(Duration::from_millis(50));
        let ticker = Ticker::parse("AAPL").expect("valid ticker");

        cache.put(record("AAPL")).await;
        tokio::time::sleep(Duration::from_millis(80)).await;

        assert!(cache.get(&ticker).await.is_none());
    }

    #[tokio::test]
    async fn overwrite_refreshes_the_entry() {
        let cache = QuoteCache::new(Duration::from_secs(60));
        let ticker = Ticker::parse("AAPL").expect("valid ticker");

        cache.put(record("AAPL")).await;
        let mut updated = record("AAPL");
        updated.name = String::from("Apple Inc.");
        cache.put(updated).await;

        assert_eq!(cache.len().await, 1);
        let hit = cache.get(&ticker).await.expect("entry");
        assert_eq!(hit.name, "Apple Inc.");
    }

    #[tokio::test]
    async fn clear_expired_retains_fresh_entries() {
        let cache = QuoteCache::new(Duration::from_millis(50));

        cache.put(record("AAPL")).await;
        tokio::time::sleep(Duration::from_millis(80)).await;
        cache.put(record("MSFT")).await;

        cache.clear_expired().await;
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn disabled_cache_stores_nothing() {
        let cache = QuoteCache::disabled();
        let ticker = Ticker::parse("AAPL").expect("valid ticker");

        cache.put(record("AAPL")).await;
        assert!(cache.get(&ticker).await.is_none());
        assert!(cache.is_empty().await);
    }
}
