use std::sync::Arc;

use super::cache::{CacheKey, ListingCache, LoadState};
use crate::api::DirectoryApi;
use crate::helpers::clean_directory_path;
use crate::models::{FileObject, ServerIdentity};
use crate::permissions::{Permissions, FILE_CREATE};
use crate::state::DirectoryStore;

/// Listings longer than this are cut off after sorting.
pub const MAX_DISPLAYED_FILES: usize = 250;

/// What the listing area should show.
#[derive(Debug, PartialEq)]
pub enum ListingBody<'a> {
    Loading,
    Failed { message: &'a str },
    Empty,
    Files {
        rows: &'a [FileObject],
        truncated: bool,
    },
}

#[derive(Debug, PartialEq)]
pub struct ListingViewModel<'a> {
    pub directory: &'a str,
    pub body: ListingBody<'a>,
    /// New-directory and new-file actions are offered
    pub can_create: bool,
}

/// Cap a loaded listing, already in display order.
pub fn build_listing(files: &[FileObject]) -> ListingBody<'_> {
    if files.is_empty() {
        return ListingBody::Empty;
    }

    ListingBody::Files {
        rows: &files[..files.len().min(MAX_DISPLAYED_FILES)],
        truncated: files.len() > MAX_DISPLAYED_FILES,
    }
}

/// The file manager for one server: tracks the current location, loads its
/// listing through the cache, and publishes the current directory.
#[derive(Debug)]
pub struct FileManagerView {
    server: ServerIdentity,
    permissions: Permissions,
    directory: String,
    published: Option<String>,
    store: DirectoryStore,
    cache: ListingCache,
}

impl FileManagerView {
    pub fn new(
        server: ServerIdentity,
        permissions: Permissions,
        api: Arc<dyn DirectoryApi>,
        fragment: &str,
    ) -> Self {
        let mut view = Self {
            server,
            permissions,
            directory: clean_directory_path(fragment),
            published: None,
            store: DirectoryStore::new(),
            cache: ListingCache::new(api),
        };
        view.sync_directory();
        view
    }

    pub fn server(&self) -> &ServerIdentity {
        &self.server
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn directory_store(&self) -> &DirectoryStore {
        &self.store
    }

    pub fn key(&self) -> CacheKey {
        CacheKey::new(&self.server.uuid, &self.directory)
    }

    /// Move to a new location fragment.
    pub fn navigate(&mut self, fragment: &str) {
        let directory = clean_directory_path(fragment);
        if directory != self.directory {
            tracing::info!("Navigating from {} to {}", self.directory, directory);
            self.directory = directory;
        }
        self.sync_directory();
    }

    /// Publish the current directory, once per change.
    fn sync_directory(&mut self) {
        if self.published.as_deref() == Some(self.directory.as_str()) {
            return;
        }
        self.store.set_directory(&self.directory);
        self.published = Some(self.directory.clone());
    }

    /// Make sure the current listing is loaded or loading.
    pub fn load(&mut self) -> LoadState<'_> {
        let key = self.key();
        self.cache.request(&key);
        self.cache.state(&key)
    }

    /// Re-issue the request for the current listing.
    pub fn retry(&mut self) -> bool {
        let key = self.key();
        tracing::info!("Retrying {}", key);
        self.cache.revalidate(&key)
    }

    /// Refetch `key` after something on the server changed.
    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        self.cache.invalidate(key)
    }

    /// Apply finished retrievals. Returns true if anything changed.
    pub fn process_events(&mut self) -> bool {
        self.cache.process_events() > 0
    }

    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<CacheKey> {
        self.cache.next_event().await
    }

    pub fn can_create(&self) -> bool {
        self.permissions.can(FILE_CREATE)
    }

    pub fn view_model(&self) -> ListingViewModel<'_> {
        let body = match self.cache.state(&self.key()) {
            LoadState::Pending => ListingBody::Loading,
            LoadState::Error(message) => ListingBody::Failed { message },
            LoadState::Ready(files) => build_listing(files),
        };

        ListingViewModel {
            directory: &self.directory,
            body,
            can_create: self.can_create(),
        }
    }

    /// Entry at `index` of the rendered (sorted, capped) listing.
    pub fn row(&self, index: usize) -> Option<&FileObject> {
        match self.view_model().body {
            ListingBody::Files { rows, .. } => rows.get(index),
            _ => None,
        }
    }

    pub fn row_count(&self) -> usize {
        match self.view_model().body {
            ListingBody::Files { rows, .. } => rows.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeDirectoryApi;

    fn server() -> ServerIdentity {
        ServerIdentity {
            id: "1a7ce997".to_string(),
            uuid: "1a7ce997-259b-452e-8b4e-cecc464142ca".to_string(),
            name: "Survival".to_string(),
        }
    }

    fn many_files(count: usize) -> Vec<FileObject> {
        (0..count)
            .map(|i| FileObject::new(format!("file-{:03}.txt", i), i % 3 != 0))
            .collect()
    }

    fn view(api: Arc<FakeDirectoryApi>, fragment: &str) -> FileManagerView {
        FileManagerView::new(server(), Permissions::owner(), api, fragment)
    }

    #[tokio::test]
    async fn test_pending_until_loaded() {
        let api = Arc::new(FakeDirectoryApi::gated().with_listing("/", many_files(3)));
        let mut view = view(api.clone(), "");

        assert_eq!(view.load(), LoadState::Pending);
        assert_eq!(view.view_model().body, ListingBody::Loading);

        api.release();
        view.next_event().await;
        assert!(matches!(view.view_model().body, ListingBody::Files { .. }));
    }

    #[tokio::test]
    async fn test_large_listing_is_truncated_after_sorting() {
        let files = many_files(300);
        let directories = files.iter().filter(|file| !file.is_file).count();
        let api = Arc::new(FakeDirectoryApi::new().with_listing("/", files));
        let mut view = view(api, "/");

        view.load();
        view.next_event().await;

        match view.view_model().body {
            ListingBody::Files { rows, truncated } => {
                assert!(truncated);
                assert_eq!(rows.len(), MAX_DISPLAYED_FILES);
                // Every directory survives the cut because they sort first
                assert_eq!(rows.iter().filter(|file| !file.is_file).count(), directories);
                assert_eq!(rows[0].name, "file-000.txt");
            }
            other => panic!("expected files, got {:?}", other),
        }
        assert_eq!(view.row_count(), MAX_DISPLAYED_FILES);
    }

    #[tokio::test]
    async fn test_rows_borrow_the_cached_listing() {
        let api = Arc::new(FakeDirectoryApi::new().with_listing("/", many_files(10_000)));
        let mut view = view(api, "/");

        view.load();
        view.next_event().await;

        let cached = match view.cache.state(&view.key()) {
            LoadState::Ready(files) => files.as_ptr(),
            other => panic!("expected ready listing, got {:?}", other),
        };
        // Rendering reads the stored order, it never sorts again
        match view.view_model().body {
            ListingBody::Files { rows, .. } => assert!(std::ptr::eq(rows.as_ptr(), cached)),
            other => panic!("expected files, got {:?}", other),
        }
        assert!(std::ptr::eq(view.row(0).unwrap(), cached));
    }

    #[test]
    fn test_listing_at_limit_is_not_truncated() {
        let files = many_files(MAX_DISPLAYED_FILES);
        match build_listing(&files) {
            ListingBody::Files { rows, truncated } => {
                assert!(!truncated);
                assert_eq!(rows.len(), MAX_DISPLAYED_FILES);
            }
            other => panic!("expected files, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let api = Arc::new(FakeDirectoryApi::new().with_listing("/empty", Vec::new()));
        let mut view = view(api, "#/empty");

        view.load();
        view.next_event().await;

        assert_eq!(view.view_model().body, ListingBody::Empty);
        assert_eq!(view.row_count(), 0);
        assert!(view.row(0).is_none());
    }

    #[tokio::test]
    async fn test_failure_shows_message_and_retry_refetches() {
        let api = Arc::new(FakeDirectoryApi::new().with_failure("/gone", 404, "not found"));
        let mut view = view(api.clone(), "/gone");

        view.load();
        view.next_event().await;
        assert_eq!(
            view.view_model().body,
            ListingBody::Failed {
                message: "not found"
            }
        );

        assert!(view.retry());
        assert_eq!(view.view_model().body, ListingBody::Loading);
        view.next_event().await;

        let key = view.key();
        assert_eq!(
            api.calls(),
            vec![
                (key.server_uuid.clone(), "/gone".to_string()),
                (key.server_uuid.clone(), "/gone".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_navigation_publishes_once_and_loads_new_key() {
        let api = Arc::new(
            FakeDirectoryApi::new()
                .with_listing("/a", many_files(2))
                .with_listing("/b", many_files(5)),
        );
        let mut view = view(api.clone(), "/a");
        let mut rx = view.directory_store().subscribe();
        assert_eq!(*rx.borrow_and_update(), "/a");

        view.load();
        view.next_event().await;
        let a_key = view.key();

        view.navigate("/b");
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "/b");

        // Re-rendering at the same location publishes nothing new
        view.navigate("/b");
        view.navigate("#/b/");
        assert!(!rx.has_changed().unwrap());

        assert_eq!(view.load(), LoadState::Pending);
        view.next_event().await;
        assert_ne!(view.key(), a_key);
        assert_eq!(view.row_count(), 5);
        assert_eq!(api.call_count(), 2);

        // Going back to /a is served from cache
        view.navigate("/a");
        assert!(matches!(view.load(), LoadState::Ready(_)));
        assert_eq!(api.call_count(), 2);
    }

    #[test]
    fn test_create_actions_gated_by_permission() {
        let api: Arc<dyn DirectoryApi> = Arc::new(FakeDirectoryApi::new());
        let denied = FileManagerView::new(
            server(),
            Permissions::new(["file.read"]),
            Arc::clone(&api),
            "/",
        );
        assert!(!denied.view_model().can_create);

        let allowed = FileManagerView::new(server(), Permissions::new(["file.*"]), api, "/");
        assert!(allowed.view_model().can_create);
    }
}
