//! String-coded enumerations used by the Re:lation API.
//!
//! Every enum serializes to the snake_case code the API uses. Codes the
//! crate does not know yet deserialize to `Unknown` rather than failing.

use serde::{Deserialize, Serialize};

/// Ticket status (`status_cd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Not yet handled.
    Open,
    /// Pending.
    Ongoing,
    /// Resolved.
    Closed,
    /// Needs no response.
    Unwanted,
    /// Deleted.
    Trash,
    /// Spam.
    Spam,
    /// A code this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// Ticket color tag (`color_cd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketColor {
    /// `red`.
    Red,
    /// `orange`.
    Orange,
    /// `yellow`.
    Yellow,
    /// `blue`.
    Blue,
    /// `pink`.
    Pink,
    /// A code this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// Channel a message came through (`method_cd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageMethod {
    /// `mail`.
    Mail,
    /// `tweet`.
    Tweet,
    /// `twitter_dm`.
    TwitterDm,
    /// `record`.
    Record,
    /// `line`.
    Line,
    /// `chatplus`.
    Chatplus,
    /// `r_messe`.
    RMesse,
    /// `yahoo`.
    Yahoo,
    /// `sms`.
    Sms,
    /// `call`.
    Call,
    /// A code this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// What happened to a message (`action_cd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageAction {
    /// `received`.
    Received,
    /// `sent`.
    Sent,
    /// `draft`.
    Draft,
    /// Waiting for approval.
    Requested,
    /// `approved`.
    Approved,
    /// `rejected`.
    Rejected,
    /// `sending`.
    Sending,
    /// `scheduled`.
    Scheduled,
    /// `send_error`.
    SendError,
    /// `conversation`.
    Conversation,
    /// `end_conversation`.
    EndConversation,
    /// A code this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// Kind of comment attached to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentType {
    /// `comment`.
    Comment,
    /// Approval request.
    Request,
    /// `approve`.
    Approve,
    /// `reject`.
    Reject,
    /// `pullback`.
    Pullback,
    /// `assign`.
    Assign,
    /// `snooze`.
    Snooze,
    /// `canceled_snooze`.
    CanceledSnooze,
    /// A code this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// Content kind of a chat conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationType {
    /// `text`.
    Text,
    /// `file`.
    File,
    /// `image`.
    Image,
    /// `video`.
    Video,
    /// `audio`.
    Audio,
    /// `location`.
    Location,
    /// `sticker`.
    Sticker,
    /// `chatplus_textform`.
    ChatplusTextform,
    /// `chatplus_carousel`.
    ChatplusCarousel,
    /// `chatplus_chatbot`.
    ChatplusChatbot,
    /// `chatplus_imagemap`.
    ChatplusImagemap,
    /// A code this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// Predefined snooze durations for pending reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnoozeTerm {
    /// `no_term`.
    NoTerm,
    /// `today`.
    Today,
    /// `tomorrow`.
    Tomorrow,
    /// `weekend`.
    Weekend,
    /// `next_monday`.
    NextMonday,
    /// `next_week`.
    NextWeek,
    /// `next_month`.
    NextMonth,
    /// `after_month`.
    AfterMonth,
    /// A code this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// `available`.
    Available,
    /// Invited, email not yet confirmed.
    Confirming,
    /// `locked`.
    Locked,
    /// `deleted`.
    Deleted,
    /// A code this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// Icon shown for a manually entered record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordIcon {
    /// `received_phone`.
    #[default]
    ReceivedPhone,
    /// `called_phone`.
    CalledPhone,
    /// `meeting`.
    Meeting,
    /// `sales`.
    Sales,
    /// `postal`.
    Postal,
    /// `note`.
    Note,
    /// A code this crate does not recognize.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_codes_serialize_snake_case() {
        assert_eq!(serde_json::to_value(MessageMethod::RMesse).unwrap(), json!("r_messe"));
        assert_eq!(serde_json::to_value(MessageMethod::TwitterDm).unwrap(), json!("twitter_dm"));
        assert_eq!(
            serde_json::to_value(ConversationType::ChatplusTextform).unwrap(),
            json!("chatplus_textform")
        );
        assert_eq!(serde_json::to_value(SnoozeTerm::NextMonday).unwrap(), json!("next_monday"));
        assert_eq!(serde_json::to_value(RecordIcon::default()).unwrap(), json!("received_phone"));
    }

    #[test]
    fn test_unknown_code_does_not_fail() {
        let status: TicketStatus = serde_json::from_value(json!("archived")).unwrap();
        assert_eq!(status, TicketStatus::Unknown);
        let action: MessageAction = serde_json::from_value(json!("send_error")).unwrap();
        assert_eq!(action, MessageAction::SendError);
    }
}
