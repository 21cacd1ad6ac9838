use chrono::{DateTime, Utc};

/// One entry of a remote directory listing.
#[derive(Debug, Clone, PartialEq)]
pub struct FileObject {
    /// Display key, generated per listing
    pub uuid: String,
    pub name: String,
    pub mode: String,
    pub size: u64,
    pub is_file: bool,
    pub is_symlink: bool,
    pub mimetype: String,
    pub modified_at: Option<DateTime<Utc>>,
}

impl FileObject {
    pub fn new(name: impl Into<String>, is_file: bool) -> Self {
        Self {
            uuid: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            mode: String::new(),
            size: 0,
            is_file,
            is_symlink: false,
            mimetype: String::new(),
            modified_at: None,
        }
    }

    pub fn is_directory(&self) -> bool {
        !self.is_file
    }
}

/// The server whose filesystem is being browsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerIdentity {
    /// Short identifier used in panel routes
    pub id: String,
    pub uuid: String,
    pub name: String,
}
