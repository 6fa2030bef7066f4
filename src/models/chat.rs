//! Chat channel models for the Re:lation API.
//!
//! Chat messages come from four channels (ChatPlus, Yahoo!, R-Messe and
//! LINE). Each channel record carries channel-specific metadata and a list
//! of its own conversation type. All conversation types share the fields
//! in [`ConversationBase`], embedded by value.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::codes::{ConversationType, MessageAction};
use crate::mapper::de;

/// Fields shared by every chat conversation entry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ConversationBase {
    /// Whether the entry was received, sent, or closed the conversation.
    #[serde(default, deserialize_with = "de::lenient")]
    pub action_cd: Option<MessageAction>,

    /// Display name of the speaker.
    #[serde(default, deserialize_with = "de::lenient")]
    pub speaker_name: Option<String>,

    /// Mention name of the operator who sent it, for outbound entries.
    #[serde(default, deserialize_with = "de::lenient")]
    pub sent_by: Option<String>,

    /// Send time.
    #[serde(default, deserialize_with = "de::timestamp")]
    pub sent_at: Option<DateTime<FixedOffset>>,

    /// Content kind.
    #[serde(default, deserialize_with = "de::lenient")]
    pub conversation_type: Option<ConversationType>,

    /// Text content.
    #[serde(default, deserialize_with = "de::lenient")]
    pub note: Option<String>,

    /// File name, for file-like content.
    #[serde(default, deserialize_with = "de::lenient")]
    pub file_name: Option<String>,

    /// Whether the entry was sent automatically.
    #[serde(default, deserialize_with = "de::lenient")]
    pub auto_send: Option<bool>,
}

/// A ChatPlus conversation entry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ChatPlusConversation {
    /// Entry ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub chatplus_conversation_id: Option<u64>,

    /// Shared conversation fields.
    #[serde(flatten)]
    pub base: ConversationBase,
}

/// A Yahoo! shopping inquiry conversation entry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct YahooConversation {
    /// Entry ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub yahoo_conversation_id: Option<u64>,

    /// Shared conversation fields.
    #[serde(flatten)]
    pub base: ConversationBase,
}

/// An R-Messe (Rakuten) conversation entry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RMesseConversation {
    /// Entry ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub r_messe_conversation_id: Option<u64>,

    /// Shared conversation fields.
    #[serde(flatten)]
    pub base: ConversationBase,
}

/// A LINE conversation entry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LineConversation {
    /// Entry ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub line_conversation_id: Option<u64>,

    /// Shared conversation fields.
    #[serde(flatten)]
    pub base: ConversationBase,
}

/// A conversation entry from any channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversationVariant {
    /// ChatPlus.
    ChatPlus(ChatPlusConversation),
    /// Yahoo!.
    Yahoo(YahooConversation),
    /// R-Messe.
    RMesse(RMesseConversation),
    /// LINE.
    Line(LineConversation),
}

impl ConversationVariant {
    /// Returns the fields shared by every channel.
    pub fn base(&self) -> &ConversationBase {
        match self {
            ConversationVariant::ChatPlus(c) => &c.base,
            ConversationVariant::Yahoo(c) => &c.base,
            ConversationVariant::RMesse(c) => &c.base,
            ConversationVariant::Line(c) => &c.base,
        }
    }

    /// Returns the channel-specific entry ID.
    pub fn conversation_id(&self) -> Option<u64> {
        match self {
            ConversationVariant::ChatPlus(c) => c.chatplus_conversation_id,
            ConversationVariant::Yahoo(c) => c.yahoo_conversation_id,
            ConversationVariant::RMesse(c) => c.r_messe_conversation_id,
            ConversationVariant::Line(c) => c.line_conversation_id,
        }
    }
}

/// A ChatPlus chat.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ChatPlus {
    /// Visitor account.
    #[serde(default, deserialize_with = "de::lenient")]
    pub account: Option<String>,

    /// ChatPlus account key.
    #[serde(default, deserialize_with = "de::lenient")]
    pub account_key: Option<String>,

    /// Visitor email.
    #[serde(default, deserialize_with = "de::lenient")]
    pub email: Option<String>,

    /// Visitor company.
    #[serde(default, deserialize_with = "de::lenient")]
    pub company_name: Option<String>,

    /// Site the chat started on.
    #[serde(default, deserialize_with = "de::lenient")]
    pub site: Option<String>,

    /// Entries in server order.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub conversations: Vec<ChatPlusConversation>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A Yahoo! shopping inquiry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Yahoo {
    /// Buyer account.
    #[serde(default, deserialize_with = "de::lenient")]
    pub account: Option<String>,

    /// Store account.
    #[serde(default, deserialize_with = "de::lenient")]
    pub store_account: Option<String>,

    /// Buyer email.
    #[serde(default, deserialize_with = "de::lenient")]
    pub email: Option<String>,

    /// Inquiry status.
    #[serde(default, deserialize_with = "de::lenient")]
    pub inquiry_status: Option<String>,

    /// Inquiry kind.
    #[serde(default, deserialize_with = "de::lenient")]
    pub inquiry_kind: Option<String>,

    /// Inquiry category.
    #[serde(default, deserialize_with = "de::lenient")]
    pub inquiry_category: Option<String>,

    /// Related order.
    #[serde(default, deserialize_with = "de::lenient")]
    pub order_id: Option<String>,

    /// Link to the order.
    #[serde(default, deserialize_with = "de::lenient")]
    pub order_url: Option<String>,

    /// Related item.
    #[serde(default, deserialize_with = "de::lenient")]
    pub item_number: Option<String>,

    /// Link to the item.
    #[serde(default, deserialize_with = "de::lenient")]
    pub item_url: Option<String>,

    /// Entries in server order.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub conversations: Vec<YahooConversation>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An R-Messe (Rakuten) inquiry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RMesse {
    /// Buyer account.
    #[serde(default, deserialize_with = "de::lenient")]
    pub account: Option<String>,

    /// Buyer email.
    #[serde(default, deserialize_with = "de::lenient")]
    pub email: Option<String>,

    /// Inquiry status.
    #[serde(default, deserialize_with = "de::lenient")]
    pub inquiry_status: Option<String>,

    /// Inquiry category.
    #[serde(default, deserialize_with = "de::lenient")]
    pub inquiry_category: Option<String>,

    /// Inquiry type.
    #[serde(default, deserialize_with = "de::lenient")]
    pub inquiry_type: Option<String>,

    /// Inquiry number.
    #[serde(default, deserialize_with = "de::lenient")]
    pub inquiry_number: Option<String>,

    /// Link to the inquiry.
    #[serde(default, deserialize_with = "de::lenient")]
    pub inquiry_url: Option<String>,

    /// Related order.
    #[serde(default, deserialize_with = "de::lenient")]
    pub order_number: Option<String>,

    /// Related item.
    #[serde(default, deserialize_with = "de::lenient")]
    pub item_number: Option<String>,

    /// Item name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub item_name: Option<String>,

    /// Link to the item.
    #[serde(default, deserialize_with = "de::lenient")]
    pub item_url: Option<String>,

    /// Entries in server order.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub conversations: Vec<RMesseConversation>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A LINE chat.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Line {
    /// LINE user account.
    #[serde(default, deserialize_with = "de::lenient")]
    pub account: Option<String>,

    /// LINE channel.
    #[serde(default, deserialize_with = "de::lenient")]
    pub channel_id: Option<String>,

    /// Group name, for group chats.
    #[serde(default, deserialize_with = "de::lenient")]
    pub group_name: Option<String>,

    /// Entries in server order.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub conversations: Vec<LineConversation>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A chat from any channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Chat {
    /// ChatPlus.
    ChatPlus(ChatPlus),
    /// Yahoo!.
    Yahoo(Yahoo),
    /// R-Messe.
    RMesse(RMesse),
    /// LINE.
    Line(Line),
}

impl Chat {
    /// Returns every conversation entry, wrapped uniformly, in server order.
    pub fn conversations(&self) -> Vec<ConversationVariant> {
        match self {
            Chat::ChatPlus(chat) => chat
                .conversations
                .iter()
                .cloned()
                .map(ConversationVariant::ChatPlus)
                .collect(),
            Chat::Yahoo(chat) => chat
                .conversations
                .iter()
                .cloned()
                .map(ConversationVariant::Yahoo)
                .collect(),
            Chat::RMesse(chat) => chat
                .conversations
                .iter()
                .cloned()
                .map(ConversationVariant::RMesse)
                .collect(),
            Chat::Line(chat) => chat
                .conversations
                .iter()
                .cloned()
                .map(ConversationVariant::Line)
                .collect(),
        }
    }
}
