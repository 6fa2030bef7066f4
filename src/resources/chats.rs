//! Chat channel operations.
//!
//! A chat message's conversation log is fetched per channel and returned
//! as that channel's own record type.

use crate::error::{ApiFailure, RelationError};
use crate::mapper::map_record;
use crate::models::{Chat, ChatPlus, Line, MessageMethod, RMesse, Yahoo};
use crate::transport::Transport;

/// Chat operations.
#[derive(Debug, Clone, Copy)]
pub struct Chats<'a> {
    transport: &'a Transport,
}

impl<'a> Chats<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    fn path(message_box_id: u64, ticket_id: u64, message_id: u64, channel: &str) -> String {
        format!(
            "{}/tickets/{}/messages/{}/{}",
            message_box_id, ticket_id, message_id, channel
        )
    }

    /// Gets a ChatPlus conversation log.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn get_chatplus(
        &self,
        message_box_id: u64,
        ticket_id: u64,
        message_id: u64,
    ) -> Result<ChatPlus, RelationError> {
        let path = Self::path(message_box_id, ticket_id, message_id, "chatplus");
        map_record(self.transport.get(&path, None).await?)
    }

    /// Gets a Yahoo! inquiry log.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn get_yahoo(
        &self,
        message_box_id: u64,
        ticket_id: u64,
        message_id: u64,
    ) -> Result<Yahoo, RelationError> {
        let path = Self::path(message_box_id, ticket_id, message_id, "yahoo");
        map_record(self.transport.get(&path, None).await?)
    }

    /// Gets an R-Messe inquiry log.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn get_r_messe(
        &self,
        message_box_id: u64,
        ticket_id: u64,
        message_id: u64,
    ) -> Result<RMesse, RelationError> {
        let path = Self::path(message_box_id, ticket_id, message_id, "r_messe");
        map_record(self.transport.get(&path, None).await?)
    }

    /// Gets a LINE conversation log.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn get_line(
        &self,
        message_box_id: u64,
        ticket_id: u64,
        message_id: u64,
    ) -> Result<Line, RelationError> {
        let path = Self::path(message_box_id, ticket_id, message_id, "line");
        map_record(self.transport.get(&path, None).await?)
    }

    /// Gets the conversation log for a message of any chat channel,
    /// choosing the endpoint from the message's `method_cd`.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::InvalidRequest` without sending anything if
    /// `method` is not a chat channel, otherwise the mapped API error if
    /// the request fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// if let Some(method) = message.method_cd {
    ///     let chat = client.chats().get_conversations(1, 42, 7, method).await?;
    ///     for entry in chat.conversations() {
    ///         println!("{:?}", entry.base().note);
    ///     }
    /// }
    /// ```
    pub async fn get_conversations(
        &self,
        message_box_id: u64,
        ticket_id: u64,
        message_id: u64,
        method: MessageMethod,
    ) -> Result<Chat, RelationError> {
        let chat = match method {
            MessageMethod::Chatplus => {
                Chat::ChatPlus(self.get_chatplus(message_box_id, ticket_id, message_id).await?)
            }
            MessageMethod::Yahoo => {
                Chat::Yahoo(self.get_yahoo(message_box_id, ticket_id, message_id).await?)
            }
            MessageMethod::RMesse => {
                Chat::RMesse(self.get_r_messe(message_box_id, ticket_id, message_id).await?)
            }
            MessageMethod::Line => {
                Chat::Line(self.get_line(message_box_id, ticket_id, message_id).await?)
            }
            other => {
                return Err(RelationError::InvalidRequest(ApiFailure::new(format!(
                    "message method {:?} has no chat conversation log",
                    other
                ))))
            }
        };
        Ok(chat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_path() {
        assert_eq!(
            Chats::path(1, 42, 7, "r_messe"),
            "1/tickets/42/messages/7/r_messe"
        );
    }
}
