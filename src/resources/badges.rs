//! Badge operations, scoped to a customer group.

use super::Page;
use crate::error::RelationError;
use crate::mapper::map_list;
use crate::models::Badge;
use crate::transport::Transport;

/// Badge operations.
#[derive(Debug, Clone, Copy)]
pub struct Badges<'a> {
    transport: &'a Transport,
}

impl<'a> Badges<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists the badges defined for an address book.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn list(&self, customer_group_id: u64, page: Page) -> Result<Vec<Badge>, RelationError> {
        let path = format!("customer_groups/{}/badges", customer_group_id);
        map_list(self.transport.get(&path, Some(&page.to_query())).await?)
    }
}
