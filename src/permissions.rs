use std::collections::HashSet;

pub const FILE_CREATE: &str = "file.create";

/// Actions the current user may perform on the server.
///
/// Grants follow the panel's grammar: `*` allows everything, `file.*`
/// allows every `file.` action, anything else must match exactly.
#[derive(Debug, Clone, Default)]
pub struct Permissions {
    granted: HashSet<String>,
}

impl Permissions {
    pub fn new<I, S>(granted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: granted.into_iter().map(Into::into).collect(),
        }
    }

    pub fn owner() -> Self {
        Self::new(["*"])
    }

    pub fn can(&self, action: &str) -> bool {
        if self.granted.contains("*") || self.granted.contains(action) {
            return true;
        }

        self.granted.iter().any(|grant| {
            grant
                .strip_suffix(".*")
                .is_some_and(|prefix| action.starts_with(&format!("{}.", prefix)))
        })
    }
}
