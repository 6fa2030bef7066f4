//! Label operations, scoped to a message box.

use serde::Serialize;

use super::Page;
use crate::error::RelationError;
use crate::mapper::{map_list, map_record};
use crate::models::{Label, LabelCreated, Patch};
use crate::transport::Transport;

/// Body for [`Labels::create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewLabel {
    /// Display name.
    pub name: String,
    /// Display color.
    pub color: String,
    /// Parent label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
}

impl NewLabel {
    /// Creates a top-level label.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            parent_id: None,
        }
    }

    /// Nests the label under a parent.
    pub fn with_parent(mut self, parent_id: u64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Body for [`Labels::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelUpdate {
    /// Display name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    /// Display color.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub color: Patch<String>,
    /// Parent label; `Patch::Null` moves it to the top level.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub parent_id: Patch<u64>,
}

/// Label operations.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    transport: &'a Transport,
}

impl<'a> Labels<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists the labels of a message box.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn list(&self, message_box_id: u64, page: Page) -> Result<Vec<Label>, RelationError> {
        let path = format!("{}/labels", message_box_id);
        map_list(self.transport.get(&path, Some(&page.to_query())).await?)
    }

    /// Creates a label.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn create(
        &self,
        message_box_id: u64,
        label: &NewLabel,
    ) -> Result<LabelCreated, RelationError> {
        let path = format!("{}/labels", message_box_id);
        map_record(self.transport.post(&path, label).await?)
    }

    /// Updates a label.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn update(
        &self,
        message_box_id: u64,
        label_id: u64,
        update: &LabelUpdate,
    ) -> Result<(), RelationError> {
        let path = format!("{}/labels/{}", message_box_id, label_id);
        self.transport.put(&path, update).await?;
        Ok(())
    }
}
