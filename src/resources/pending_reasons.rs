//! Pending reason operations.

use crate::error::RelationError;
use crate::mapper::map_list;
use crate::models::PendingReason;
use crate::transport::Transport;

/// Pending reason operations.
#[derive(Debug, Clone, Copy)]
pub struct PendingReasons<'a> {
    transport: &'a Transport,
}

impl<'a> PendingReasons<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists the pending reasons defined for a message box.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn list(&self, message_box_id: u64) -> Result<Vec<PendingReason>, RelationError> {
        let path = format!("{}/pending_reasons", message_box_id);
        map_list(self.transport.get(&path, None).await?)
    }
}
