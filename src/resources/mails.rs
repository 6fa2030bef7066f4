//! Outbound mail operations, scoped to a message box.

use serde::Serialize;
use serde_json::Value;

use crate::error::RelationError;
use crate::mapper::map_record;
use crate::models::{MessageCreated, TicketStatus};
use crate::transport::Transport;

/// A mail to send, reply with, or save as a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMail {
    /// Ticket status after sending (default open).
    pub status_cd: TicketStatus,
    /// Sending account, see `mail_accounts().list`.
    pub mail_account_id: u64,
    /// Recipients.
    pub to: String,
    /// Subject.
    pub subject: String,
    /// Body.
    pub body: String,
    /// Whether `body` is HTML.
    pub is_html: bool,
    /// Carbon-copy recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    /// Blind carbon-copy recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
    /// Reply-To address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    /// Pending reason to set on the ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_reason_id: Option<u64>,
    /// Attachment descriptors, passed through as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Value>>,
}

impl OutgoingMail {
    /// Creates a plain-text mail that leaves the ticket open.
    pub fn new(
        mail_account_id: u64,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            status_cd: TicketStatus::Open,
            mail_account_id,
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            is_html: false,
            cc: None,
            bcc: None,
            reply_to: None,
            pending_reason_id: None,
            attachments: None,
        }
    }

    /// Sets the ticket status after sending.
    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status_cd = status;
        self
    }

    /// Sets carbon-copy recipients.
    pub fn with_cc(mut self, cc: impl Into<String>) -> Self {
        self.cc = Some(cc.into());
        self
    }

    /// Sets blind carbon-copy recipients.
    pub fn with_bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc = Some(bcc.into());
        self
    }

    /// Sets the Reply-To address.
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Attaches files. An empty list leaves the field unset.
    pub fn with_attachments(mut self, attachments: Vec<Value>) -> Self {
        self.attachments = (!attachments.is_empty()).then_some(attachments);
        self
    }

    /// Marks the body as HTML.
    pub fn with_html(mut self) -> Self {
        self.is_html = true;
        self
    }

    /// Puts the ticket on hold with a pending reason.
    pub fn with_pending_reason(mut self, pending_reason_id: u64) -> Self {
        self.pending_reason_id = Some(pending_reason_id);
        self
    }
}

#[derive(Serialize)]
struct MailBody<'m> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message_id: Option<u64>,
    #[serde(flatten)]
    mail: &'m OutgoingMail,
}

/// Mail operations.
#[derive(Debug, Clone, Copy)]
pub struct Mails<'a> {
    transport: &'a Transport,
}

impl<'a> Mails<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Sends a new mail, creating a ticket.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn send(
        &self,
        message_box_id: u64,
        mail: &OutgoingMail,
    ) -> Result<MessageCreated, RelationError> {
        let path = format!("{}/mails", message_box_id);
        let body = MailBody {
            message_id: None,
            mail,
        };
        map_record(self.transport.post(&path, &body).await?)
    }

    /// Replies to a message.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn reply(
        &self,
        message_box_id: u64,
        message_id: u64,
        mail: &OutgoingMail,
    ) -> Result<MessageCreated, RelationError> {
        let path = format!("{}/mails/reply", message_box_id);
        let body = MailBody {
            message_id: Some(message_id),
            mail,
        };
        map_record(self.transport.post(&path, &body).await?)
    }

    /// Saves a draft, optionally as a reply to a message.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn draft(
        &self,
        message_box_id: u64,
        reply_to_message_id: Option<u64>,
        mail: &OutgoingMail,
    ) -> Result<MessageCreated, RelationError> {
        let path = format!("{}/mails/draft", message_box_id);
        let body = MailBody {
            message_id: reply_to_message_id,
            mail,
        };
        map_record(self.transport.post(&path, &body).await?)
    }
}
