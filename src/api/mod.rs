//! Panel client API: the seam between the file manager and the network

mod client;
#[cfg(test)]
pub mod fake;
mod types;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::FileObject;

pub use client::PanelClient;

/// Remote filesystem operations the file manager depends on.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// List one directory. Order of the returned entries is unspecified.
    async fn load_directory(
        &self,
        server_uuid: &str,
        directory: &str,
    ) -> Result<Vec<FileObject>, ApiError>;

    async fn create_folder(&self, server_uuid: &str, root: &str, name: &str)
        -> Result<(), ApiError>;

    /// Create an empty file at `path`.
    async fn create_file(&self, server_uuid: &str, path: &str) -> Result<(), ApiError>;
}
