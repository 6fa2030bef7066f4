//! Mail account operations.

use super::Page;
use crate::error::RelationError;
use crate::mapper::map_list;
use crate::models::MailAccount;
use crate::transport::Transport;

/// Mail account operations.
#[derive(Debug, Clone, Copy)]
pub struct MailAccounts<'a> {
    transport: &'a Transport,
}

impl<'a> MailAccounts<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists the sending accounts of a message box.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn list(
        &self,
        message_box_id: u64,
        page: Page,
    ) -> Result<Vec<MailAccount>, RelationError> {
        let path = format!("{}/mail_accounts", message_box_id);
        map_list(self.transport.get(&path, Some(&page.to_query())).await?)
    }
}
