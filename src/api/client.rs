use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::types::{FileAttributes, ListResponse, ServerResponse};
use super::DirectoryApi;
use crate::config::AppConfig;
use crate::error::{ApiError, PanelErrorBody};
use crate::models::{FileObject, ServerIdentity};
use crate::permissions::Permissions;

const PANEL_ACCEPT: &str = "Application/vnd.pterodactyl.v1+json";

/// HTTP client for the panel's client API.
#[derive(Debug, Clone)]
pub struct PanelClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PanelClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        if config.panel_url.is_empty() || config.api_key.is_empty() {
            return Err(ApiError::Config(
                "panel_url and api_key are required".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(PANEL_ACCEPT));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.panel_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/client{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.bearer_auth(&self.api_key).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Panel responded with HTTP {}", status);
        Err(ApiError::Http {
            status: status.as_u16(),
            detail: PanelErrorBody::first_detail(&body),
        })
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(request).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Resolve a server identifier into its identity and the caller's permissions.
    pub async fn get_server(&self, id: &str) -> Result<(ServerIdentity, Permissions), ApiError> {
        let request = self.client.get(self.url(&format!("/servers/{}", id)));
        let response: ServerResponse = self.json(request).await?;
        Ok(response.into_parts())
    }
}

#[async_trait]
impl DirectoryApi for PanelClient {
    async fn load_directory(
        &self,
        server_uuid: &str,
        directory: &str,
    ) -> Result<Vec<FileObject>, ApiError> {
        tracing::debug!("Listing {} on {}", directory, server_uuid);
        let request = self
            .client
            .get(self.url(&format!("/servers/{}/files/list", server_uuid)))
            .query(&[("directory", directory)]);

        let listing: ListResponse<FileAttributes> = self.json(request).await?;
        Ok(listing
            .data
            .into_iter()
            .map(|item| item.attributes.into())
            .collect())
    }

    async fn create_folder(
        &self,
        server_uuid: &str,
        root: &str,
        name: &str,
    ) -> Result<(), ApiError> {
        tracing::info!("Creating folder {} in {} on {}", name, root, server_uuid);
        let request = self
            .client
            .post(self.url(&format!("/servers/{}/files/create-folder", server_uuid)))
            .json(&serde_json::json!({ "root": root, "name": name }));
        self.send(request).await?;
        Ok(())
    }

    async fn create_file(&self, server_uuid: &str, path: &str) -> Result<(), ApiError> {
        tracing::info!("Creating file {} on {}", path, server_uuid);
        let request = self
            .client
            .post(self.url(&format!("/servers/{}/files/write", server_uuid)))
            .query(&[("file", path)])
            .header(CONTENT_TYPE, "text/plain")
            .body(String::new());
        self.send(request).await?;
        Ok(())
    }
}
