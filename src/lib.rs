//! Events API client - typed access to a feed service's `Events` resource.
//!
//! Wraps the two operations of the remote collection: submitting a single
//! `{user, feed}` record (`POST /Events`) and listing the feed entries that
//! belong to a user (`GET /Events?user=...`). The client only returns data
//! and typed errors; callers own presentation and user notification.
//!
//! # Example
//!
//! ```no_run
//! use events_client::{ClientConfig, EventsClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EventsClient::new(&ClientConfig::from_env()?);
//!
//! client.create_event("alice", "hello world").await?;
//! for record in client.list_events("alice").await? {
//!     println!("{}", record.feed);
//! }
//! # Ok(())
//! # }
//! ```

// Event record model
pub mod record;

// HTTP client for the Events API
pub mod client;

// Client configuration
pub mod config;

// Re-export public types
pub use client::{ClientError, EventsClient};
pub use config::{load_config, ClientConfig};
pub use record::{EventQuery, EventRecord};
