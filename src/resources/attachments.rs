//! Attachment operations.

use crate::error::RelationError;
use crate::mapper::map_record;
use crate::models::AttachmentDownload;
use crate::transport::Transport;

/// Attachment operations.
#[derive(Debug, Clone, Copy)]
pub struct Attachments<'a> {
    transport: &'a Transport,
}

impl<'a> Attachments<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Gets a time-limited download URL for an attachment.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::ResourceNotFound` if the attachment doesn't exist.
    pub async fn get_download_url(
        &self,
        message_box_id: u64,
        attachment_id: u64,
    ) -> Result<AttachmentDownload, RelationError> {
        let path = format!("{}/messages/attachments/{}", message_box_id, attachment_id);
        map_record(self.transport.get(&path, None).await?)
    }
}
