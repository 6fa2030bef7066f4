//! Ticket models for the Re:lation API.
//!
//! A ticket groups the messages exchanged with one customer about one
//! inquiry. Messages carry their own comments and attachments.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::codes::{CommentType, MessageAction, MessageMethod, TicketColor, TicketStatus};
use crate::mapper::de;

/// A ticket with its messages.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID within the message box.
    #[serde(default, deserialize_with = "de::lenient")]
    pub ticket_id: Option<u64>,

    /// Mention name of the assignee.
    #[serde(default, deserialize_with = "de::lenient")]
    pub assignee: Option<String>,

    /// Current status.
    #[serde(default, deserialize_with = "de::lenient")]
    pub status_cd: Option<TicketStatus>,

    /// Color tag.
    #[serde(default, deserialize_with = "de::lenient")]
    pub color_cd: Option<TicketColor>,

    /// Subject line.
    #[serde(default, deserialize_with = "de::lenient")]
    pub title: Option<String>,

    /// Creation time.
    #[serde(default, deserialize_with = "de::timestamp")]
    pub created_at: Option<DateTime<FixedOffset>>,

    /// Last modification time.
    #[serde(default, deserialize_with = "de::timestamp")]
    pub last_updated_at: Option<DateTime<FixedOffset>>,

    /// Messages in the order the server returned them.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub messages: Vec<Message>,

    /// Case categories assigned to the ticket.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub case_category_ids: Vec<u64>,

    /// Labels assigned to the ticket.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub label_ids: Vec<u64>,

    /// Pending reason, when the ticket is on hold.
    #[serde(default, deserialize_with = "de::lenient")]
    pub pending_reason_id: Option<u64>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Ticket {
    /// Returns the title or a placeholder.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(no title)")
    }

    /// Returns the most recently listed message, if any.
    pub fn latest_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// One inbound or outbound communication within a ticket.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Message {
    /// Unique message ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub message_id: Option<u64>,

    /// Sender.
    #[serde(default, deserialize_with = "de::lenient")]
    pub from: Option<String>,

    /// Recipients.
    #[serde(default, deserialize_with = "de::lenient")]
    pub to: Option<String>,

    /// Carbon-copy recipients.
    #[serde(default, deserialize_with = "de::lenient")]
    pub cc: Option<String>,

    /// Blind carbon-copy recipients.
    #[serde(default, deserialize_with = "de::lenient")]
    pub bcc: Option<String>,

    /// Reply-to address.
    #[serde(default, deserialize_with = "de::lenient")]
    pub reply_to: Option<String>,

    /// Send time.
    #[serde(default, deserialize_with = "de::timestamp")]
    pub sent_at: Option<DateTime<FixedOffset>>,

    /// Creation time.
    #[serde(default, deserialize_with = "de::timestamp")]
    pub created_at: Option<DateTime<FixedOffset>>,

    /// Last modification time.
    #[serde(default, deserialize_with = "de::timestamp")]
    pub last_updated_at: Option<DateTime<FixedOffset>>,

    /// Subject.
    #[serde(default, deserialize_with = "de::lenient")]
    pub title: Option<String>,

    /// Body text or HTML, see `is_html`.
    #[serde(default, deserialize_with = "de::lenient")]
    pub body: Option<String>,

    /// Whether `body` is HTML.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub is_html: bool,

    /// Channel.
    #[serde(default, deserialize_with = "de::lenient")]
    pub method_cd: Option<MessageMethod>,

    /// Action.
    #[serde(default, deserialize_with = "de::lenient")]
    pub action_cd: Option<MessageAction>,

    /// Internal comments in server order.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub comments: Vec<Comment>,

    /// Attached files.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub attachments: Vec<Attachment>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An internal comment on a message.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Comment {
    /// Mention name of the commenter.
    #[serde(default, deserialize_with = "de::lenient")]
    pub commenter: Option<String>,

    /// Kind of comment.
    #[serde(default, deserialize_with = "de::lenient")]
    pub comment_type: Option<CommentType>,

    /// Comment text.
    #[serde(default, deserialize_with = "de::lenient")]
    pub comment: Option<String>,

    /// Comment time.
    #[serde(default, deserialize_with = "de::timestamp")]
    pub commented_at: Option<DateTime<FixedOffset>>,
}

/// A file attached to a message.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Attachment {
    /// Unique attachment ID; pass it to `attachments().get_download_url`.
    #[serde(default, deserialize_with = "de::lenient")]
    pub attachment_id: Option<u64>,

    /// Original file name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub file_name: Option<String>,
}

/// A time-limited download link for an attachment.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AttachmentDownload {
    /// Signed download URL.
    #[serde(default, deserialize_with = "de::lenient")]
    pub url: Option<String>,

    /// Original file name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub file_name: Option<String>,

    /// Seconds until `url` expires.
    #[serde(default, deserialize_with = "de::lenient")]
    pub expires_in_sec: Option<u64>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
