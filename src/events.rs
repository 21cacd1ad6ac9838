use std::sync::Arc;

use crate::files::CacheKey;
use crate::models::FileObject;

/// A directory retrieval finished.
#[derive(Debug, Clone)]
pub enum ListingEvent {
    Loaded {
        key: CacheKey,
        result: Result<Arc<Vec<FileObject>>, String>,
    },
}

/// Outcome of a create-folder or create-file action.
#[derive(Debug, Clone)]
pub enum ActionEvent {
    Created { key: CacheKey, path: String },
    Failed(String),
}
