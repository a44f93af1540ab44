//! Read-through caching for slow-changing remote lookups
//!
//! Two tiers, as before:
//! - L1: in-memory LRU with a per-entry expiry
//! - L2: an optional [`DurableCache`] (file system by default) that survives
//!   restarts
//!
//! Concurrent misses for the same key share one in-flight fetch.

use lru::LruCache;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    future::Future,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};
use tokio::sync::OnceCell;

use crate::{Result, SleeperError};

/// Path: ~/.cache/sleeper-ffl
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("sleeper-ffl")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Generic cache key usable for both memory and durable caching
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// String form used as the durable storage key
    fn to_file_key(&self) -> String;
}

/// Cache key for the full player directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerDirectoryKey;

impl CacheKey for PlayerDirectoryKey {
    fn to_file_key(&self) -> String {
        "players_nfl".to_string()
    }
}

/// Cache key for a draft's pick list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraftPicksKey {
    pub draft_id: String,
}

impl CacheKey for DraftPicksKey {
    fn to_file_key(&self) -> String {
        format!("draft_picks_{}", self.draft_id)
    }
}

/// Cache key for one league week of matchups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchupsKey {
    pub league_id: crate::LeagueId,
    pub week: crate::Week,
}

impl CacheKey for MatchupsKey {
    fn to_file_key(&self) -> String {
        format!("matchups_l{}_w{}", self.league_id, self.week)
    }
}

/// Storage-medium-agnostic persistence behind the in-memory tier.
pub trait DurableCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self);
}

/// One JSON file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileDurableCache {
    root: PathBuf,
}

impl FileDurableCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `~/.cache/sleeper-ffl/lookups`
    pub fn in_user_cache_dir() -> Self {
        Self::new(cache_root().join("lookups"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.root.join(format!("{}.json", safe))
    }
}

impl DurableCache for FileDurableCache {
    fn get(&self, key: &str) -> Option<String> {
        try_read_to_string(&self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = write_string(&self.path_for(key), value) {
            tracing::warn!(key, error = %e, "failed to write durable cache entry");
        }
    }

    fn clear(&self) {
        if self.root.exists() {
            if let Err(e) = fs::remove_dir_all(&self.root) {
                tracing::warn!(root = %self.root.display(), error = %e, "failed to clear durable cache");
            }
        }
    }
}

/// Durable layer that stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDurableCache;

impl DurableCache for NoopDurableCache {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn clear(&self) {}
}

struct CacheEntry<V> {
    expires_at: Instant,
    value: V,
}

/// On-disk envelope; expiry is wall-clock so it survives restarts.
#[derive(Serialize, Deserialize)]
struct DurableEntry<V> {
    expires_at: u64,
    value: V,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Time-bounded read-through cache with in-flight de-duplication.
pub struct TtlCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned + Send + Sync,
{
    entries: Mutex<LruCache<K, CacheEntry<V>>>,
    pending: Mutex<HashMap<K, Arc<OnceCell<V>>>>,
    durable: Arc<dyn DurableCache>,
    ttl: Duration,
    capacity: usize,
}

impl<K, V> TtlCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned + Send + Sync,
{
    /// Memory-only cache
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self::with_durable(capacity, ttl, Arc::new(NoopDurableCache))
    }

    pub fn with_durable(capacity: usize, ttl: Duration, durable: Arc<dyn DurableCache>) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
            )),
            pending: Mutex::new(HashMap::new()),
            durable,
            ttl,
            capacity,
        }
    }

    /// Fresh value from memory or the durable tier, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        {
            let mut entries = lock(&self.entries);
            let cached = entries
                .get(key)
                .map(|entry| (entry.expires_at > Instant::now(), entry.value.clone()));
            match cached {
                Some((true, value)) => return Some(value),
                Some((false, _)) => {
                    entries.pop(key);
                }
                None => {}
            }
        }

        let value = self.get_durable(key)?;
        lock(&self.entries).put(
            key.clone(),
            CacheEntry {
                expires_at: Instant::now() + self.ttl,
                value: value.clone(),
            },
        );
        Some(value)
    }

    pub fn put(&self, key: K, value: V) {
        let envelope = DurableEntry {
            expires_at: unix_now() + self.ttl.as_secs(),
            value: &value,
        };
        match serde_json::to_string(&envelope) {
            Ok(json) => self.durable.set(&key.to_file_key(), &json),
            Err(e) => tracing::warn!(error = %e, "cache value not serializable"),
        }

        lock(&self.entries).put(
            key,
            CacheEntry {
                expires_at: Instant::now() + self.ttl,
                value,
            },
        );
    }

    /// Return the cached value or run `fetch` once for all concurrent callers
    /// asking for the same key. Failures are not cached.
    pub async fn get_or_fetch<F, Fut>(&self, key: K, fetch: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(value) = self.get(&key) {
            tracing::debug!(key = %key.to_file_key(), "cache hit");
            return Ok(value);
        }

        let cell = {
            let mut pending = lock(&self.pending);
            pending
                .entry(key.clone())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        let fetch_key = key.clone();
        let result = cell
            .get_or_try_init(move || async move {
                tracing::debug!(key = %fetch_key.to_file_key(), "cache miss");
                let value = fetch().await?;
                self.put(fetch_key, value.clone());
                Ok::<V, SleeperError>(value)
            })
            .await
            .cloned();

        let mut pending = lock(&self.pending);
        if pending
            .get(&key)
            .is_some_and(|current| Arc::ptr_eq(current, &cell))
        {
            pending.remove(&key);
        }

        result
    }

    /// Drop every in-memory entry and the durable tier's contents.
    pub fn clear(&self) {
        lock(&self.entries).clear();
        self.durable.clear();
    }

    /// (entries in memory, capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        (lock(&self.entries).len(), self.capacity)
    }

    fn get_durable(&self, key: &K) -> Option<V> {
        let raw = self.durable.get(&key.to_file_key())?;
        let entry: DurableEntry<V> = serde_json::from_str(&raw).ok()?;
        (entry.expires_at > unix_now()).then_some(entry.value)
    }
}
