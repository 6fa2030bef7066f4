//! Case category operations, scoped to a message box.

use serde::Serialize;

use super::Page;
use crate::error::RelationError;
use crate::mapper::{map_list, map_record};
use crate::models::{CaseCategory, CaseCategoryCreated, Patch};
use crate::transport::Transport;

/// Body for [`CaseCategories::create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCaseCategory {
    /// Display name.
    pub name: String,
    /// Parent category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
}

impl NewCaseCategory {
    /// Creates a top-level category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
        }
    }

    /// Nests the category under a parent.
    pub fn with_parent(mut self, parent_id: u64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Body for [`CaseCategories::update`].
///
/// Archiving a category also archives its descendants. A category under an
/// archived parent cannot be restored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaseCategoryUpdate {
    /// Display name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    /// Parent category; `Patch::Null` moves it to the top level.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub parent_id: Patch<u64>,
    /// Archive flag.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub archived: Patch<bool>,
}

/// Case category operations.
#[derive(Debug, Clone, Copy)]
pub struct CaseCategories<'a> {
    transport: &'a Transport,
}

impl<'a> CaseCategories<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists the case categories of a message box.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn list(
        &self,
        message_box_id: u64,
        page: Page,
    ) -> Result<Vec<CaseCategory>, RelationError> {
        let path = format!("{}/case_categories", message_box_id);
        map_list(self.transport.get(&path, Some(&page.to_query())).await?)
    }

    /// Creates a case category.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn create(
        &self,
        message_box_id: u64,
        category: &NewCaseCategory,
    ) -> Result<CaseCategoryCreated, RelationError> {
        let path = format!("{}/case_categories", message_box_id);
        map_record(self.transport.post(&path, category).await?)
    }

    /// Updates a case category.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn update(
        &self,
        message_box_id: u64,
        case_category_id: u64,
        update: &CaseCategoryUpdate,
    ) -> Result<(), RelationError> {
        let path = format!("{}/case_categories/{}", message_box_id, case_category_id);
        self.transport.put(&path, update).await?;
        Ok(())
    }
}
