//! The Re:lation API client.
//!
//! `RelationClient` owns one [`Transport`] and hands out borrowed
//! resource façades. It holds no mutable state, so one client can be
//! shared (or cloned) across tasks.

use crate::config::Config;
use crate::error::RelationError;
use crate::models::MessageBox;
use crate::resources::{
    Attachments, Badges, CaseCategories, Chats, CustomerGroups, Customers, Labels, MailAccounts,
    Mails, MessageBoxes, PendingReasons, Templates, Tickets, Users,
};
use crate::transport::Transport;

/// Client for the Re:lation REST API.
///
/// # Example
///
/// ```ignore
/// let config = Config::new(token, "acme");
/// let client = RelationClient::new(&config)?;
///
/// for mb in client.message_boxes().list().await? {
///     println!("{}: {}", mb.message_box_id.unwrap_or_default(), mb.display_name());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RelationClient {
    transport: Transport,
}

impl RelationClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::Config` if the configuration is invalid, or
    /// `RelationError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, RelationError> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Creates a client from `RELATION_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`] and [`RelationClient::new`].
    pub fn from_env() -> Result<Self, RelationError> {
        Self::new(&Config::from_env()?)
    }

    /// Returns the underlying transport, for endpoints without a façade.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Customer operations.
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(&self.transport)
    }

    /// Customer group (address book) operations.
    pub fn customer_groups(&self) -> CustomerGroups<'_> {
        CustomerGroups::new(&self.transport)
    }

    /// Ticket operations.
    pub fn tickets(&self) -> Tickets<'_> {
        Tickets::new(&self.transport)
    }

    /// Chat channel operations.
    pub fn chats(&self) -> Chats<'_> {
        Chats::new(&self.transport)
    }

    /// Message box operations.
    pub fn message_boxes(&self) -> MessageBoxes<'_> {
        MessageBoxes::new(&self.transport)
    }

    /// Pending reason operations.
    pub fn pending_reasons(&self) -> PendingReasons<'_> {
        PendingReasons::new(&self.transport)
    }

    /// User operations.
    pub fn users(&self) -> Users<'_> {
        Users::new(&self.transport)
    }

    /// Case category operations.
    pub fn case_categories(&self) -> CaseCategories<'_> {
        CaseCategories::new(&self.transport)
    }

    /// Label operations.
    pub fn labels(&self) -> Labels<'_> {
        Labels::new(&self.transport)
    }

    /// Badge operations.
    pub fn badges(&self) -> Badges<'_> {
        Badges::new(&self.transport)
    }

    /// Mail account operations.
    pub fn mail_accounts(&self) -> MailAccounts<'_> {
        MailAccounts::new(&self.transport)
    }

    /// Mail send, reply and draft operations.
    pub fn mails(&self) -> Mails<'_> {
        Mails::new(&self.transport)
    }

    /// Template operations.
    pub fn templates(&self) -> Templates<'_> {
        Templates::new(&self.transport)
    }

    /// Attachment operations.
    pub fn attachments(&self) -> Attachments<'_> {
        Attachments::new(&self.transport)
    }

    /// Tests connectivity and credentials by listing message boxes.
    ///
    /// # Returns
    ///
    /// The message boxes visible to the token.
    ///
    /// # Errors
    ///
    /// Returns the underlying error unchanged; an authentication failure
    /// is logged with a hint about the token.
    pub async fn test_connection(&self) -> Result<Vec<MessageBox>, RelationError> {
        tracing::debug!(base_url = %self.transport.base_url(), "Testing connection to Re:lation");

        match self.message_boxes().list().await {
            Ok(boxes) => {
                tracing::info!(message_boxes = boxes.len(), "Connection test successful");
                Ok(boxes)
            }
            Err(e @ RelationError::Authentication(_)) => {
                tracing::warn!("Authentication failed - verify RELATION_ACCESS_TOKEN is correct");
                Err(e)
            }
            Err(e @ RelationError::ResourceNotFound(_)) => {
                tracing::warn!(
                    "API endpoint not found - verify RELATION_SUBDOMAIN and RELATION_API_VERSION"
                );
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
