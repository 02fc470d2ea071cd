//! Identity Value Object
//!
//! The payload returned by the "who am I" endpoint. The gate treats it as
//! opaque: only `id` is required, known profile fields are surfaced, and
//! everything else is preserved untouched for observers.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of the session owner
///
/// Django user ids are integers; string ids (UUIDs, slugs) are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(untagged)]
pub enum IdentityId {
    #[display("{_0}")]
    Number(i64),
    #[display("{_0}")]
    Text(String),
}

impl From<i64> for IdentityId {
    fn from(id: i64) -> Self {
        IdentityId::Number(id)
    }
}

impl From<&str> for IdentityId {
    fn from(id: &str) -> Self {
        IdentityId::Text(id.to_string())
    }
}

impl From<String> for IdentityId {
    fn from(id: String) -> Self {
        IdentityId::Text(id)
    }
}

/// Identity of the current session owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Remaining fields of the payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    pub fn new(id: impl Into<IdentityId>) -> Self {
        Self {
            id: id.into(),
            username: None,
            email: None,
            extra: Map::new(),
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Name suitable for display: username when present, id otherwise
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(username) => username.clone(),
            None => self.id.to_string(),
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
