//! Message box models for the Re:lation API.
//!
//! A message box is an inbox. Pending reasons, case categories, labels,
//! mail accounts and templates are all defined per message box.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::codes::SnoozeTerm;
use crate::mapper::de;

/// An inbox.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MessageBox {
    /// Unique message box ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub message_box_id: Option<u64>,

    /// Display name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,

    /// Display color.
    #[serde(default, deserialize_with = "de::lenient")]
    pub color: Option<String>,

    /// Address book linked to this inbox.
    #[serde(default, deserialize_with = "de::lenient")]
    pub customer_group_id: Option<u64>,

    /// Last modification time.
    #[serde(default, deserialize_with = "de::timestamp")]
    pub last_updated_at: Option<DateTime<FixedOffset>>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MessageBox {
    /// Returns the name or a placeholder.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}

/// A reason a ticket is on hold.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PendingReason {
    /// Unique pending reason ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub pending_reason_id: Option<u64>,

    /// Display name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,

    /// Whether choosing this reason snoozes the ticket.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub is_snoozed: bool,

    /// How long the ticket is snoozed for.
    #[serde(default, deserialize_with = "de::lenient")]
    pub snooze_term: Option<SnoozeTerm>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A ticket classification, possibly nested under a parent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CaseCategory {
    /// Unique case category ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub case_category_id: Option<u64>,

    /// Display name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,

    /// Parent category, if nested.
    #[serde(default, deserialize_with = "de::lenient")]
    pub parent_id: Option<u64>,

    /// Archived categories can no longer be assigned.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub archived: bool,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A ticket label, possibly nested under a parent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Label {
    /// Unique label ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub label_id: Option<u64>,

    /// Display name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,

    /// Display color.
    #[serde(default, deserialize_with = "de::lenient")]
    pub color: Option<String>,

    /// Parent label, if nested.
    #[serde(default, deserialize_with = "de::lenient")]
    pub parent_id: Option<u64>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An outbound mail account.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MailAccount {
    /// Unique mail account ID; required when sending mail.
    #[serde(default, deserialize_with = "de::lenient")]
    pub mail_account_id: Option<u64>,

    /// Display name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,

    /// Sender address.
    #[serde(default, deserialize_with = "de::lenient")]
    pub email: Option<String>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A reply template.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Template {
    /// Unique template ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub template_id: Option<u64>,

    /// Category the template is filed under.
    #[serde(default, deserialize_with = "de::lenient")]
    pub template_category_name: Option<String>,

    /// Display name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub template_name: Option<String>,

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

    /// Subject.
    #[serde(default, deserialize_with = "de::lenient")]
    pub title: Option<String>,

    /// HTML body.
    #[serde(default, deserialize_with = "de::lenient")]
    pub html_body: Option<String>,

    /// Plain-text body.
    #[serde(default, deserialize_with = "de::lenient")]
    pub text_body: Option<String>,

    /// Case categories applied when the template is used.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub case_category_ids: Vec<u64>,

    /// Labels applied when the template is used.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub label_ids: Vec<u64>,

    /// Attached questionnaire.
    #[serde(default, deserialize_with = "de::lenient")]
    pub questionnaire_name: Option<String>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
