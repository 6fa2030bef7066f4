//! User operations.

use super::Page;
use crate::error::RelationError;
use crate::mapper::map_list;
use crate::models::User;
use crate::transport::Transport;

/// User operations.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    transport: &'a Transport,
}

impl<'a> Users<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists users (server default 30 per page, max 100).
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn list(&self, page: Page) -> Result<Vec<User>, RelationError> {
        map_list(self.transport.get("users", Some(&page.to_query())).await?)
    }
}
