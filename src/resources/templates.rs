//! Reply template operations, scoped to a message box.

use serde::Serialize;

use super::Page;
use crate::error::RelationError;
use crate::mapper::map_list;
use crate::models::Template;
use crate::transport::Transport;

#[derive(Serialize)]
struct TemplateSearchBody<'s> {
    #[serde(skip_serializing_if = "Option::is_none")]
    template_category_name: Option<&'s str>,
}

/// Template operations.
#[derive(Debug, Clone, Copy)]
pub struct Templates<'a> {
    transport: &'a Transport,
}

impl<'a> Templates<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists templates (server default 10 per page, max 30).
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn list(&self, message_box_id: u64, page: Page) -> Result<Vec<Template>, RelationError> {
        let path = format!("{}/templates", message_box_id);
        map_list(self.transport.get(&path, Some(&page.to_query())).await?)
    }

    /// Searches templates, optionally by category name.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn search(
        &self,
        message_box_id: u64,
        template_category_name: Option<&str>,
    ) -> Result<Vec<Template>, RelationError> {
        let path = format!("{}/templates/search", message_box_id);
        let body = TemplateSearchBody {
            template_category_name: template_category_name.filter(|name| !name.is_empty()),
        };
        map_list(self.transport.post(&path, &body).await?)
    }
}
