//! # relation-client
//!
//! A typed async client for the Re:lation customer support REST API.
//!
//! ## Features
//!
//! - **Resource façades**: customers, tickets, chats, mails, labels and the
//!   rest of the API, each a thin typed layer over one endpoint family
//! - **Lenient mapping**: missing or malformed optional fields never fail a
//!   response; unknown keys are kept in each record's `extra` map
//! - **Retry**: connection failures, HTTP 429 (honouring `Retry-After`) and
//!   HTTP 503 are retried within one shared budget
//! - **Security**: the access token is never logged and is redacted from
//!   error bodies
//!
//! ## Architecture
//!
//! - [`config`] - Configuration, in code or from environment variables
//! - [`error`] - Error kinds keyed on HTTP status
//! - [`transport`] - Authenticated HTTP calls with retry
//! - [`mapper`] - JSON to typed record mapping and timestamp parsing
//! - [`models`] - Response records and request enums
//! - [`resources`] - One façade per entity family
//! - [`client`] - [`RelationClient`], which hands out the façades
//!
//! ## Configuration
//!
//! Required:
//! - `RELATION_ACCESS_TOKEN`: API access token
//! - `RELATION_SUBDOMAIN`: tenant subdomain (`{subdomain}.relationapp.jp`)
//!
//! Optional:
//! - `RELATION_API_VERSION`, `RELATION_TIMEOUT_SECS`,
//!   `RELATION_MAX_RETRIES`, `RELATION_RETRY_DELAY_SECS`,
//!   `RELATION_ENDPOINT`
//! - `RUST_LOG`: Log level (e.g., `relation_client=debug`)
//!
//! ## Example
//!
//! ```ignore
//! use relation_client::models::TicketStatus;
//! use relation_client::resources::{TicketSearch, TicketUpdate};
//! use relation_client::{Config, RelationClient};
//!
//! async fn example() -> Result<(), relation_client::RelationError> {
//!     let client = RelationClient::new(&Config::from_env()?)?;
//!
//!     let open = client
//!         .tickets()
//!         .search(1, &TicketSearch::new().with_status(TicketStatus::Open))
//!         .await?;
//!
//!     for ticket in &open {
//!         if let Some(id) = ticket.ticket_id {
//!             let update = TicketUpdate::new().with_assignee("suzuki");
//!             client.tickets().update(1, id, &update).await?;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod mapper;
pub mod models;
pub mod resources;
pub mod transport;

pub use client::RelationClient;
pub use config::Config;
pub use error::{ErrorKind, RelationError};
