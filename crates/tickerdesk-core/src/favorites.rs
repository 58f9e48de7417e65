//! Durable favorites collection.
//!
//! Persistence is a whole-collection JSON overwrite under a fixed key on
//! every mutation. The backing store is a string key-value blob store so the
//! collection logic stays independent of where the bytes live.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use time::OffsetDateTime;

use crate::domain::StockRecord;
use crate::error::StoreError;

/// Fixed key the serialized favorites collection lives under.
pub const FAVORITES_KEY: &str = "favorites";

/// String-keyed blob persistence contract.
pub trait BlobStore: Send + Sync {
    /// Read the blob for `key`; `Ok(None)` when no blob exists.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the blob for `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Blob store keeping one JSON file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory blob store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().expect("blob map lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("blob map lock poisoned");
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Ordered collection of favorite stock records with ticker uniqueness.
///
/// Loaded once at startup; every mutation rewrites the full blob. A missing
/// or malformed blob loads as an empty collection rather than an error.
pub struct FavoritesStore {
    blob: Arc<dyn BlobStore>,
    records: Vec<StockRecord>,
}

impl FavoritesStore {
    pub fn open(blob: Arc<dyn BlobStore>) -> Result<Self, StoreError> {
        let records = match blob.read(FAVORITES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { blob, records })
    }

    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    /// Append a record unless its ticker is already present; persists and
    /// returns the full updated list. Duplicate adds leave the collection
    /// untouched and skip the write.
    pub fn add(&mut self, mut record: StockRecord) -> Result<&[StockRecord], StoreError> {
        let exists = self
            .records
            .iter()
            .any(|existing| existing.ticker == record.ticker);
        if !exists {
            record.added_at = OffsetDateTime::now_utc();
            self.records.push(record);
            self.persist()?;
        }
        Ok(&self.records)
    }

    /// Remove the record whose stored (uppercase) ticker exactly equals
    /// `symbol`; a miss is a no-op that skips the write.
    pub fn remove(&mut self, symbol: &str) -> Result<&[StockRecord], StoreError> {
        let before = self.records.len();
        self.records.retain(|record| record.ticker.as_str() != symbol);
        if self.records.len() != before {
            self.persist()?;
        }
        Ok(&self.records)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.records)?;
        self.blob.write(FAVORITES_KEY, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ticker;

    fn record(ticker: &str) -> StockRecord {
        StockRecord::unavailable(
            Ticker::parse(ticker).expect("valid ticker"),
            OffsetDateTime::UNIX_EPOCH,
        )
    }

    fn open_memory() -> (Arc<MemoryStore>, FavoritesStore) {
        let blob = Arc::new(MemoryStore::default());
        let store = FavoritesStore::open(blob.clone()).expect("open");
        (blob, store)
    }

    #[test]
    fn duplicate_add_leaves_collection_unchanged() {
        let (_, mut store) = open_memory();

        store.add(record("AAPL")).expect("add");
        let after_second = store.add(record("AAPL")).expect("add again");

        assert_eq!(after_second.len(), 1);
    }

    #[test]
    fn remove_of_absent_symbol_is_a_noop() {
        let (_, mut store) = open_memory();
        store.add(record("AAPL")).expect("add");

        let after = store.remove("MSFT").expect("remove");
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn malformed_blob_loads_as_empty() {
        let blob = Arc::new(MemoryStore::default());
        blob.write(FAVORITES_KEY, "{not json").expect("seed");

        let store = FavoritesStore::open(blob).expect("open");
        assert!(store.records().is_empty());
    }

    #[test]
    fn mutations_persist_the_whole_collection() {
        let (blob, mut store) = open_memory();

        store.add(record("AAPL")).expect("add");
        store.add(record("MSFT")).expect("add");
        store.remove("AAPL").expect("remove");

        let reloaded = FavoritesStore::open(blob).expect("reopen");
        let tickers: Vec<&str> = reloaded
            .records()
            .iter()
            .map(|r| r.ticker.as_str())
            .collect();
        assert_eq!(tickers, vec!["MSFT"]);
    }
}
