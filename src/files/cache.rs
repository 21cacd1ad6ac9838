use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::sort::sort_files;
use crate::api::DirectoryApi;
use crate::error::to_human_message;
use crate::events::ListingEvent;
use crate::models::FileObject;

/// Identifies one listing: a directory on one server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub server_uuid: String,
    pub path: String,
}

impl CacheKey {
    pub fn new(server_uuid: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            server_uuid: server_uuid.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:files:{}", self.server_uuid, self.path)
    }
}

#[derive(Debug)]
enum Slot {
    Pending,
    Loaded(Arc<Vec<FileObject>>),
    Failed(String),
}

/// What a listing looks like right now.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<'a> {
    Pending,
    Error(&'a str),
    Ready(&'a [FileObject]),
}

/// Directory listings keyed by (server, path), at most one request in flight per key.
///
/// Retrievals run on spawned tasks and report back through a channel; call
/// [`ListingCache::process_events`] from the UI loop to apply them. Listings
/// are sorted on the retrieval task and stored in display order.
pub struct ListingCache {
    api: Arc<dyn DirectoryApi>,
    slots: HashMap<CacheKey, Slot>,
    /// In-flight keys whose result is already out of date
    stale: HashSet<CacheKey>,
    tx: mpsc::UnboundedSender<ListingEvent>,
    rx: mpsc::UnboundedReceiver<ListingEvent>,
}

impl fmt::Debug for ListingCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingCache")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

impl ListingCache {
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            slots: HashMap::new(),
            stale: HashSet::new(),
            tx,
            rx,
        }
    }

    /// Start a retrieval for `key` unless one is cached or already in flight.
    /// Returns whether a request was issued.
    pub fn request(&mut self, key: &CacheKey) -> bool {
        if self.slots.contains_key(key) {
            return false;
        }
        self.spawn_fetch(key.clone());
        true
    }

    /// Drop the cached result for `key` and fetch it again.
    /// A key that is still in flight is left alone.
    pub fn revalidate(&mut self, key: &CacheKey) -> bool {
        if matches!(self.slots.get(key), Some(Slot::Pending)) {
            tracing::debug!("{} already in flight, not revalidating", key);
            return false;
        }
        self.spawn_fetch(key.clone());
        true
    }

    /// Mark `key` out of date after a change on the server. A key in flight
    /// is fetched again once its current result lands, since that request
    /// may predate the change. Returns whether a request was issued now.
    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        if self.is_in_flight(key) {
            tracing::debug!("{} in flight, refetching when it lands", key);
            self.stale.insert(key.clone());
            return false;
        }
        self.spawn_fetch(key.clone());
        true
    }

    pub fn state(&self, key: &CacheKey) -> LoadState<'_> {
        match self.slots.get(key) {
            None | Some(Slot::Pending) => LoadState::Pending,
            Some(Slot::Failed(message)) => LoadState::Error(message),
            Some(Slot::Loaded(files)) => LoadState::Ready(files),
        }
    }

    pub fn is_in_flight(&self, key: &CacheKey) -> bool {
        matches!(self.slots.get(key), Some(Slot::Pending))
    }

    /// Apply every finished retrieval without blocking. Returns how many were applied.
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next retrieval to finish and apply it.
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<CacheKey> {
        let event = self.rx.recv().await?;
        let ListingEvent::Loaded { key, .. } = &event;
        let key = key.clone();
        self.apply(event);
        Some(key)
    }

    fn spawn_fetch(&mut self, key: CacheKey) {
        tracing::info!("Loading {}", key);
        self.slots.insert(key.clone(), Slot::Pending);

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api
                .load_directory(&key.server_uuid, &key.path)
                .await
                .map(|mut files| {
                    sort_files(&mut files);
                    Arc::new(files)
                })
                .map_err(|e| {
                    tracing::error!("Failed to load {}: {}", key, e);
                    to_human_message(&e)
                });
            if tx.send(ListingEvent::Loaded { key, result }).is_err() {
                tracing::debug!("Listing cache dropped before retrieval finished");
            }
        });
    }

    fn apply(&mut self, event: ListingEvent) {
        let ListingEvent::Loaded { key, result } = event;
        if !self.is_in_flight(&key) {
            tracing::warn!("Ignoring unexpected result for {}", key);
            return;
        }
        if self.stale.remove(&key) {
            tracing::debug!("Discarding outdated result for {}", key);
            self.spawn_fetch(key);
            return;
        }

        let slot = match result {
            Ok(files) => {
                tracing::info!("Loaded {} entries for {}", files.len(), key);
                Slot::Loaded(files)
            }
            Err(message) => Slot::Failed(message),
        };
        self.slots.insert(key, slot);
    }
}
