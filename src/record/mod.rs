use serde::{Deserialize, Serialize};


/// EventRecord represents one user/feed pair exchanged with the Events API.
///
/// A record is created by the client on submission; the server is the system
/// of record afterwards. Both fields are free-form strings - constraints, if
/// any, are server-side. Deserialization ignores extra fields the server may
/// attach to stored records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Owner of the feed entry
    pub user: String,

    /// Feed text
    pub feed: String,
}

/// Filter for feed retrieval.
///
/// An empty user is valid; the server defines its meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventQuery {
    pub user: String,
}

impl EventQuery {
    pub fn for_user(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }
}
