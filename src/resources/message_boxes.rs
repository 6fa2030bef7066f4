//! Message box (inbox) operations.

use crate::error::RelationError;
use crate::mapper::{map_list, map_record};
use crate::models::MessageBox;
use crate::transport::Transport;

/// Message box operations.
#[derive(Debug, Clone, Copy)]
pub struct MessageBoxes<'a> {
    transport: &'a Transport,
}

impl<'a> MessageBoxes<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists the message boxes visible to the token.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn list(&self) -> Result<Vec<MessageBox>, RelationError> {
        map_list(self.transport.get("message_boxes", None).await?)
    }

    /// Gets one message box.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::ResourceNotFound` if the message box doesn't exist.
    pub async fn get(&self, message_box_id: u64) -> Result<MessageBox, RelationError> {
        let path = format!("message_boxes/{}", message_box_id);
        map_record(self.transport.get(&path, None).await?)
    }
}
