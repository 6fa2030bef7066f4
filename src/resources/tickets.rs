//! Ticket operations, scoped to a message box.

use serde::Serialize;

use crate::error::RelationError;
use crate::mapper::{map_list, map_record};
use crate::models::{
    MessageAction, MessageCreated, MessageMethod, Patch, RecordIcon, SnoozeTerm, Ticket,
    TicketColor, TicketStatus,
};
use crate::transport::Transport;

/// Default page size for ticket search.
const DEFAULT_PER_PAGE: u32 = 50;

/// Filters for [`Tickets::search`], sent as the JSON request body.
///
/// Empty lists and unset values are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketSearch {
    /// Ticket IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ticket_ids: Vec<u64>,
    /// Label IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<u64>,
    /// Statuses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status_cds: Vec<TicketStatus>,
    /// Color tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub color_cds: Vec<TicketColor>,
    /// Assignee mention name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Message IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub message_ids: Vec<u64>,
    /// Whether any message has attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_attachments: Option<bool>,
    /// Channels.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub method_cds: Vec<MessageMethod>,
    /// Message actions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_cds: Vec<MessageAction>,
    /// Earliest message send time (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    /// Latest message send time (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
    /// Message send date (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Relative window, `1days` to `99days` or `1months` to `99months`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within: Option<String>,
    /// Pending reason IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pending_reason_ids: Vec<u64>,
    /// Items per page (max 50, default 50).
    pub per_page: u32,
    /// Page number (default 1).
    pub page: u32,
}

impl Default for TicketSearch {
    fn default() -> Self {
        Self {
            ticket_ids: Vec::new(),
            label_ids: Vec::new(),
            status_cds: Vec::new(),
            color_cds: Vec::new(),
            assignee: None,
            message_ids: Vec::new(),
            has_attachments: None,
            method_cds: Vec::new(),
            action_cds: Vec::new(),
            since: None,
            until: None,
            date: None,
            within: None,
            pending_reason_ids: Vec::new(),
            per_page: DEFAULT_PER_PAGE,
            page: 1,
        }
    }
}

impl TicketSearch {
    /// Creates a search with default paging and no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by status.
    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status_cds.push(status);
        self
    }

    /// Filters by assignee.
    pub fn with_assignee(mut self, mention_name: impl Into<String>) -> Self {
        self.assignee = Some(mention_name.into());
        self
    }

    /// Filters by a relative window such as `7days`.
    pub fn with_within(mut self, within: impl Into<String>) -> Self {
        self.within = Some(within.into());
        self
    }

    /// Sets the page size.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Body for [`Tickets::update`].
///
/// `Patch::Null` on `pending_reason_id`, `assignee` or `color_cd` clears
/// them; an empty `label_ids` or `case_category_ids` removes every
/// assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketUpdate {
    /// New status.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub status_cd: Patch<TicketStatus>,
    /// Pending reason.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub pending_reason_id: Patch<u64>,
    /// Predefined snooze end.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub snooze_term: Patch<SnoozeTerm>,
    /// Custom snooze end (ISO 8601).
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub snooze_time: Patch<String>,
    /// Note shown when the snooze ends.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub snooze_comment: Patch<String>,
    /// User notified when the snooze ends.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub notification_mention_name: Patch<String>,
    /// Labels.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub label_ids: Patch<Vec<u64>>,
    /// Assignee mention name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub assignee: Patch<String>,
    /// Whether replies need approval.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub approval_required: Patch<bool>,
    /// Comment left with the assignment.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub assign_comment: Patch<String>,
    /// Color tag.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub color_cd: Patch<TicketColor>,
    /// Case categories.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub case_category_ids: Patch<Vec<u64>>,
}

impl TicketUpdate {
    /// Creates an update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status.
    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status_cd = Patch::Value(status);
        self
    }

    /// Assigns the ticket.
    pub fn with_assignee(mut self, mention_name: impl Into<String>) -> Self {
        self.assignee = Patch::Value(mention_name.into());
        self
    }

    /// Replaces the labels. An empty list removes them all.
    pub fn with_label_ids(mut self, label_ids: Vec<u64>) -> Self {
        self.label_ids = Patch::Value(label_ids);
        self
    }

    /// Sets the pending reason.
    pub fn with_pending_reason(mut self, pending_reason_id: u64) -> Self {
        self.pending_reason_id = Patch::Value(pending_reason_id);
        self
    }

    /// Clears the pending reason.
    pub fn clear_pending_reason(mut self) -> Self {
        self.pending_reason_id = Patch::Null;
        self
    }

    /// Unassigns the ticket.
    pub fn clear_assignee(mut self) -> Self {
        self.assignee = Patch::Null;
        self
    }
}

/// Body for [`Tickets::create_record`], a manually entered interaction
/// such as a phone call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecord {
    /// Subject.
    pub subject: String,
    /// When the interaction happened (ISO 8601).
    pub operated_at: String,
    /// Duration in minutes (0-1440).
    pub duration: u32,
    /// Body.
    pub body: String,
    /// Existing ticket to attach to; a new ticket is created when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<u64>,
    /// Ticket status after recording (default closed).
    pub status_cd: TicketStatus,
    /// Operator mention name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Customer phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_tel: Option<String>,
    /// Record kind (default received phone call).
    pub icon_cd: RecordIcon,
    /// Whether `body` is HTML.
    pub is_html: bool,
    /// Assignee for a newly created ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl NewRecord {
    /// Creates a record with the required fields and default status and icon.
    pub fn new(
        subject: impl Into<String>,
        operated_at: impl Into<String>,
        duration: u32,
        body: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            operated_at: operated_at.into(),
            duration,
            body: body.into(),
            ticket_id: None,
            status_cd: TicketStatus::Closed,
            operator: None,
            customer_email: None,
            customer_tel: None,
            icon_cd: RecordIcon::default(),
            is_html: false,
            assignee: None,
        }
    }

    /// Attaches the record to an existing ticket.
    pub fn with_ticket_id(mut self, ticket_id: u64) -> Self {
        self.ticket_id = Some(ticket_id);
        self
    }

    /// Sets the record kind.
    pub fn with_icon(mut self, icon: RecordIcon) -> Self {
        self.icon_cd = icon;
        self
    }

    /// Sets the customer email.
    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }
}

/// Ticket operations.
#[derive(Debug, Clone, Copy)]
pub struct Tickets<'a> {
    transport: &'a Transport,
}

impl<'a> Tickets<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Searches tickets in a message box.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let open = client
    ///     .tickets()
    ///     .search(1, &TicketSearch::new().with_status(TicketStatus::Open))
    ///     .await?;
    /// ```
    pub async fn search(
        &self,
        message_box_id: u64,
        params: &TicketSearch,
    ) -> Result<Vec<Ticket>, RelationError> {
        let path = format!("{}/tickets/search", message_box_id);
        let response = self.transport.post(&path, params).await?;
        map_list(response)
    }

    /// Gets a ticket with its messages.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::ResourceNotFound` if the ticket doesn't exist.
    pub async fn get(&self, message_box_id: u64, ticket_id: u64) -> Result<Ticket, RelationError> {
        let path = format!("{}/tickets/{}", message_box_id, ticket_id);
        let response = self.transport.get(&path, None).await?;
        map_record(response)
    }

    /// Updates a ticket.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn update(
        &self,
        message_box_id: u64,
        ticket_id: u64,
        update: &TicketUpdate,
    ) -> Result<(), RelationError> {
        let path = format!("{}/tickets/{}", message_box_id, ticket_id);
        self.transport.put(&path, update).await?;
        Ok(())
    }

    /// Records a manual interaction, creating a ticket if none is given.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn create_record(
        &self,
        message_box_id: u64,
        record: &NewRecord,
    ) -> Result<MessageCreated, RelationError> {
        let path = format!("{}/records", message_box_id);
        let response = self.transport.post(&path, record).await?;
        map_record(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_search_body_defaults() {
        assert_eq!(
            serde_json::to_value(TicketSearch::new()).unwrap(),
            json!({"per_page": 50, "page": 1})
        );
    }

    #[test]
    fn test_search_body_filters() {
        let mut search = TicketSearch::new()
            .with_status(TicketStatus::Open)
            .with_status(TicketStatus::Ongoing)
            .with_assignee("suzuki")
            .with_page(3);
        search.method_cds = vec![MessageMethod::RMesse];
        search.has_attachments = Some(false);

        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({
                "status_cds": ["open", "ongoing"],
                "assignee": "suzuki",
                "has_attachments": false,
                "method_cds": ["r_messe"],
                "per_page": 50,
                "page": 3
            })
        );
    }

    #[test]
    fn test_update_empty_label_ids_is_sent() {
        let update = TicketUpdate::new().with_label_ids(vec![]);
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"label_ids": []}));
    }

    #[test]
    fn test_update_null_clears() {
        let update = TicketUpdate::new()
            .with_status(TicketStatus::Ongoing)
            .clear_pending_reason()
            .clear_assignee();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"status_cd": "ongoing", "pending_reason_id": null, "assignee": null})
        );
    }

    #[test]
    fn test_update_nothing_is_empty_object() {
        assert_eq!(serde_json::to_value(TicketUpdate::new()).unwrap(), json!({}));
    }

    #[test]
    fn test_new_record_defaults() {
        let record = NewRecord::new("Phone call", "2021-01-05T13:30:00+09:00", 15, "Asked about delivery");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "subject": "Phone call",
                "operated_at": "2021-01-05T13:30:00+09:00",
                "duration": 15,
                "body": "Asked about delivery",
                "status_cd": "closed",
                "icon_cd": "received_phone",
                "is_html": false
            })
        );
    }
}
