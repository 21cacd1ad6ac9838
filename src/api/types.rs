use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{FileObject, ServerIdentity};
use crate::permissions::Permissions;

#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<Item<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Item<T> {
    pub attributes: T,
}

#[derive(Debug, Deserialize)]
pub struct FileAttributes {
    pub name: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub size: u64,
    pub is_file: bool,
    #[serde(default)]
    pub is_symlink: bool,
    #[serde(default)]
    pub mimetype: String,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<FileAttributes> for FileObject {
    fn from(raw: FileAttributes) -> Self {
        Self {
            mode: raw.mode,
            size: raw.size,
            is_symlink: raw.is_symlink,
            mimetype: raw.mimetype,
            modified_at: raw.modified_at,
            ..FileObject::new(raw.name, raw.is_file)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerResponse {
    pub attributes: ServerAttributes,
    #[serde(default)]
    pub meta: ServerMeta,
}

#[derive(Debug, Deserialize)]
pub struct ServerAttributes {
    pub identifier: String,
    pub uuid: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServerMeta {
    #[serde(default)]
    pub is_server_owner: bool,
    #[serde(default)]
    pub user_permissions: Vec<String>,
}

impl ServerResponse {
    pub fn into_parts(self) -> (ServerIdentity, Permissions) {
        let permissions = if self.meta.is_server_owner {
            Permissions::owner()
        } else {
            Permissions::new(self.meta.user_permissions)
        };
        let server = ServerIdentity {
            id: self.attributes.identifier,
            uuid: self.attributes.uuid,
            name: self.attributes.name,
        };
        (server, permissions)
    }
}
