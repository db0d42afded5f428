//! HTTP client for the Events API.
//!
//! Wraps the two operations of the remote `Events` collection: submitting a
//! single `{user, feed}` record and listing the feed entries for a user.
//! Each operation is one stateless request/response exchange; failures come
//! back as typed [`ClientError`] outcomes rather than log lines.

mod error;

pub use error::ClientError;

use crate::config::ClientConfig;
use crate::record::{EventQuery, EventRecord};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const USER_AGENT: &str = "events-client/0.1";

/// Feed entry as the server returns it.
///
/// `user` may be omitted in responses; the client fills it from the query.
#[derive(Deserialize)]
struct FeedEntry {
    #[serde(default)]
    user: Option<String>,
    feed: String,
}

/// Response shapes accepted from `GET /Events`.
///
/// Servers answer with a bare entry array, a single entry, or the whole
/// backing document keyed by `feeds`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FeedResponse {
    Entries(Vec<FeedEntry>),
    Document { feeds: Vec<FeedEntry> },
    Single(FeedEntry),
}

impl FeedResponse {
    fn into_records(self, query: &EventQuery) -> Vec<EventRecord> {
        let entries = match self {
            FeedResponse::Entries(entries) => entries,
            FeedResponse::Document { feeds } => feeds,
            FeedResponse::Single(entry) => vec![entry],
        };

        entries
            .into_iter()
            .map(|entry| EventRecord {
                user: entry.user.unwrap_or_else(|| query.user.clone()),
                feed: entry.feed,
            })
            .collect()
    }
}

/// HTTP client for the Events API.
///
/// Holds one `reqwest::Client` carrying the configured request timeout.
/// Calls share no other state, so concurrent use is safe. Both operations
/// are cancel-safe: dropping the returned future aborts the in-flight
/// request.
pub struct EventsClient {
    base_url: String,
    http_client: Client,
}

impl EventsClient {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            base_url: config.base_url.clone(),
            http_client,
        }
    }

    /// Create a client with a custom base URL and default configuration
    /// (for testing with a mock server).
    pub fn with_base_url(base_url: String) -> Self {
        Self::new(&ClientConfig {
            base_url,
            ..ClientConfig::default()
        })
    }

    /// Submit one event to the collection endpoint.
    ///
    /// Serializes `{user, feed}` as the JSON body and POSTs it in a single
    /// round trip - no retry. Returns the HTTP status on success so the
    /// caller can decide whether and how to notify the user.
    pub async fn create_event(&self, user: &str, feed: &str) -> Result<StatusCode, ClientError> {
        let url = format!("{}/Events", self.base_url);
        let record = EventRecord {
            user: user.to_string(),
            feed: feed.to_string(),
        };

        debug!(user = %user, "Submitting event");

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json; charset=utf-8")
            .json(&record)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(ClientError::Server { status, body });
        }

        info!(user = %user, status = %status, "Event submitted");
        Ok(status)
    }

    /// List the feed entries belonging to a user.
    ///
    /// An empty `user` is valid; the server defines its meaning. Entries
    /// the server returns without a `user` field take the queried user.
    pub async fn list_events(&self, user: &str) -> Result<Vec<EventRecord>, ClientError> {
        let query = EventQuery::for_user(user);
        let url = format!(
            "{}/Events?user={}",
            self.base_url,
            urlencoding::encode(&query.user)
        );

        debug!(user = %query.user, "Fetching feed entries");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(ClientError::Server { status, body });
        }

        let parsed: FeedResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        let records = parsed.into_records(&query);
        info!(user = %query.user, count = records.len(), "Fetched feed entries");
        Ok(records)
    }
}
