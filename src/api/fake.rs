//! In-memory [`DirectoryApi`] used by tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use super::DirectoryApi;
use crate::error::ApiError;
use crate::models::FileObject;

#[derive(Debug, Clone)]
enum Response {
    Listing(Vec<FileObject>),
    Failure { status: u16, detail: String },
}

#[derive(Debug, Default)]
pub struct FakeDirectoryApi {
    responses: Mutex<HashMap<String, Response>>,
    calls: Mutex<Vec<(String, String)>>,
    created: Mutex<Vec<String>>,
    call_count: AtomicUsize,
    gate: Option<Arc<Semaphore>>,
}

impl FakeDirectoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listings block until [`FakeDirectoryApi::release`] is called.
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::default()
        }
    }

    pub fn with_listing(self, directory: &str, files: Vec<FileObject>) -> Self {
        self.set_listing(directory, files);
        self
    }

    pub fn with_failure(self, directory: &str, status: u16, detail: &str) -> Self {
        self.responses.lock().unwrap().insert(
            directory.to_string(),
            Response::Failure {
                status,
                detail: detail.to_string(),
            },
        );
        self
    }

    pub fn set_listing(&self, directory: &str, files: Vec<FileObject>) {
        self.responses
            .lock()
            .unwrap()
            .insert(directory.to_string(), Response::Listing(files));
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(Semaphore::MAX_PERMITS / 2);
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectoryApi for FakeDirectoryApi {
    async fn load_directory(
        &self,
        server_uuid: &str,
        directory: &str,
    ) -> Result<Vec<FileObject>, ApiError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls
            .lock()
            .unwrap()
            .push((server_uuid.to_string(), directory.to_string()));

        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await.expect("gate closed");
        }

        let response = self.responses.lock().unwrap().get(directory).cloned();
        match response {
            Some(Response::Listing(files)) => Ok(files),
            Some(Response::Failure { status, detail }) => Err(ApiError::Http {
                status,
                detail: Some(detail),
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn create_folder(
        &self,
        _server_uuid: &str,
        root: &str,
        name: &str,
    ) -> Result<(), ApiError> {
        self.created
            .lock()
            .unwrap()
            .push(crate::helpers::join_path(root, name));
        Ok(())
    }

    async fn create_file(&self, _server_uuid: &str, path: &str) -> Result<(), ApiError> {
        self.created.lock().unwrap().push(path.to_string());
        Ok(())
    }
}
