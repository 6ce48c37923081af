//! Core data models for chatlore
//!
//! These mirror the shape of a messenger export fragment. Every message
//! field is optional: exports routinely omit fields depending on the
//! message kind, and a missing field only excludes the message from the
//! computations that need it.

use serde::{Deserialize, Serialize};

/// Type tag carried by ordinary text messages
pub const GENERIC_MESSAGE: &str = "Generic";

/// Type tag carried by leave/removal events
pub const UNSUBSCRIBE_MESSAGE: &str = "Unsubscribe";

/// A name reference as it appears in `participants` and `users` lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub name: String,
}

/// One message record from an export fragment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub timestamp_ms: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub users: Option<Vec<UserRef>>,
}

impl RawMessage {
    /// Message body, if present and non-empty
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.as_deref() == Some(kind)
    }

    /// First entry of the `users` list (the subject of unsubscribe events)
    pub fn first_user(&self) -> Option<&str> {
        self.users
            .as_ref()
            .and_then(|users| users.first())
            .map(|u| u.name.as_str())
    }
}

/// One export file: `{ "participants": [...], "messages": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportFragment {
    #[serde(default)]
    pub participants: Vec<UserRef>,
    #[serde(default)]
    pub messages: Vec<RawMessage>,
}
