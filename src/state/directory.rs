use tokio::sync::watch;

/// Owner of the "current directory" shared across views.
///
/// The file manager view is the only writer; everything else holds a
/// receiver from [`DirectoryStore::subscribe`].
#[derive(Debug)]
pub struct DirectoryStore {
    tx: watch::Sender<String>,
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel("/".to_string());
        Self { tx }
    }

    /// Publish a new current directory. Returns false when the value is unchanged.
    pub fn set_directory(&self, path: &str) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if current == path {
                false
            } else {
                *current = path.to_string();
                true
            }
        });
        if changed {
            tracing::debug!("Current directory set to {}", path);
        }
        changed
    }

    #[cfg(test)]
    pub fn current(&self) -> String {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribers_observe_changes() {
        let store = DirectoryStore::new();
        let mut rx = store.subscribe();
        assert_eq!(*rx.borrow(), "/");

        assert!(store.set_directory("/plugins"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "/plugins");
        assert_eq!(store.current(), "/plugins");
    }

    #[test]
    fn test_same_value_is_not_republished() {
        let store = DirectoryStore::new();
        let mut rx = store.subscribe();
        assert!(store.set_directory("/world"));
        rx.borrow_and_update();

        assert!(!store.set_directory("/world"));
        assert!(!rx.has_changed().unwrap());
    }
}
