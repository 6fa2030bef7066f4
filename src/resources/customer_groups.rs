//! Customer group (address book) operations.

use crate::error::RelationError;
use crate::mapper::map_list;
use crate::models::CustomerGroup;
use crate::transport::Transport;

/// Customer group operations.
#[derive(Debug, Clone, Copy)]
pub struct CustomerGroups<'a> {
    transport: &'a Transport,
}

impl<'a> CustomerGroups<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists every address book in the tenant.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn list(&self) -> Result<Vec<CustomerGroup>, RelationError> {
        map_list(self.transport.get("customer_groups", None).await?)
    }
}
