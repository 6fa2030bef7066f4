//! Resource façades for the Re:lation API.
//!
//! Each façade borrows the client's [`Transport`](crate::transport::Transport)
//! and translates typed parameters into one HTTP call, then maps the
//! response through [`crate::mapper`]. Façades are obtained from
//! [`RelationClient`](crate::client::RelationClient), e.g.
//! `client.tickets()`.
//!
//! Parameter conventions:
//! - search and create parameters use `Option`; `None` is left out
//! - update parameters use [`Patch`](crate::models::Patch) so a field can
//!   be left alone, cleared, or set
//! - no call paginates automatically

mod attachments;
mod badges;
mod case_categories;
mod chats;
mod customer_groups;
mod customers;
mod labels;
mod mail_accounts;
mod mails;
mod message_boxes;
mod pending_reasons;
mod templates;
mod tickets;
mod users;

pub use attachments::Attachments;
pub use badges::Badges;
pub use case_categories::{CaseCategories, CaseCategoryUpdate, NewCaseCategory};
pub use chats::Chats;
pub use customer_groups::CustomerGroups;
pub use customers::{CustomerSearch, CustomerUpdate, Customers, NewCustomer};
pub use labels::{LabelUpdate, Labels, NewLabel};
pub use mail_accounts::MailAccounts;
pub use mails::{Mails, OutgoingMail};
pub use message_boxes::MessageBoxes;
pub use pending_reasons::PendingReasons;
pub use templates::Templates;
pub use tickets::{NewRecord, TicketSearch, TicketUpdate, Tickets};
pub use users::Users;

use std::borrow::Cow;

use crate::transport::QueryParams;

/// Paging for list calls. Unset values are left to the server default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    /// Items per page.
    pub per_page: Option<u32>,

    /// 1-based page number.
    pub page: Option<u32>,
}

impl Page {
    /// Creates paging that sends nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub(crate) fn to_query(self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("per_page", self.per_page)
            .push_opt("page", self.page);
        query
    }
}

/// Percent-encodes a caller-supplied key for use as one path segment.
pub(crate) fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}
