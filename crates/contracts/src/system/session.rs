use serde::{Deserialize, Serialize};

/// Shape of the `user` blob kept in browser storage by the login page.
/// Only `position` is used; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(default)]
    pub position: Option<String>,
}

/// Who is operating the front end. Gates display affordances only;
/// the backend does its own authorization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
    pub position: Option<String>,
}

impl Session {
    /// Build from the raw storage values. A malformed `user` blob yields
    /// a session without a position rather than an error.
    pub fn from_storage(username: Option<String>, user_json: Option<&str>) -> Self {
        let username = username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        let position = user_json
            .and_then(|raw| serde_json::from_str::<StoredUser>(raw).ok())
            .and_then(|u| u.position)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Self { username, position }
    }

    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("Gość")
    }

    /// Whether the position is one of `editor_positions` (case-insensitive)
    pub fn can_edit(&self, editor_positions: &[String]) -> bool {
        match &self.position {
            Some(position) => editor_positions
                .iter()
                .any(|p| p.trim().to_lowercase() == position.to_lowercase()),
            None => false,
        }
    }
}
