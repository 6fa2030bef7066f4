//! Customer operations, scoped to a customer group (address book).

use serde::Serialize;

use super::segment;
use crate::error::RelationError;
use crate::mapper::{map_list, map_record};
use crate::models::{Customer, EmailAddress, Gender, Patch, Tel};
use crate::transport::{QueryParams, Transport};

/// Default page size for customer search.
const DEFAULT_PER_PAGE: u32 = 10;

/// Filters for [`Customers::search`].
///
/// Every array filter is sent as repeated `key[]` query pairs. Email and
/// phone filters match partially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSearch {
    /// Customer IDs.
    pub customer_ids: Vec<u64>,
    /// Gender codes.
    pub gender_cds: Vec<Gender>,
    /// Customer codes.
    pub system_id1s: Vec<String>,
    /// Default assignee mention names.
    pub default_assignees: Vec<String>,
    /// Email addresses.
    pub emails: Vec<String>,
    /// Phone numbers.
    pub tels: Vec<String>,
    /// Badge IDs.
    pub badge_ids: Vec<u64>,
    /// Items per page (1-50, default 10).
    pub per_page: u32,
    /// Page number (default 1).
    pub page: u32,
}

impl Default for CustomerSearch {
    fn default() -> Self {
        Self {
            customer_ids: Vec::new(),
            gender_cds: Vec::new(),
            system_id1s: Vec::new(),
            default_assignees: Vec::new(),
            emails: Vec::new(),
            tels: Vec::new(),
            badge_ids: Vec::new(),
            per_page: DEFAULT_PER_PAGE,
            page: 1,
        }
    }
}

impl CustomerSearch {
    /// Creates a search with default paging and no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.emails.push(email.into());
        self
    }

    /// Filters by phone number.
    pub fn with_tel(mut self, tel: impl Into<String>) -> Self {
        self.tels.push(tel.into());
        self
    }

    /// Filters by customer code.
    pub fn with_system_id1(mut self, system_id1: impl Into<String>) -> Self {
        self.system_id1s.push(system_id1.into());
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

    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("per_page", self.per_page)
            .push("page", self.page)
            .push_array("customer_ids", &self.customer_ids)
            .push_array("gender_cds", self.gender_cds.iter().map(|g| g.code()))
            .push_array("system_id1s", &self.system_id1s)
            .push_array("default_assignees", &self.default_assignees)
            .push_array("emails", &self.emails)
            .push_array("tels", &self.tels)
            .push_array("badge_ids", &self.badge_ids);
        query
    }
}

/// Body for [`Customers::create`]. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewCustomer {
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name in kana.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_kana: Option<String>,
    /// Given name in kana.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name_kana: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_cd: Option<Gender>,
    /// Default assignee mention name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_assignee: Option<String>,
    /// Email addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<EmailAddress>>,
    /// Archived email addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_emails: Option<Vec<EmailAddress>>,
    /// Phone numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tels: Option<Vec<Tel>>,
    /// Archived phone numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_tels: Option<Vec<Tel>>,
    /// Badge IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_ids: Option<Vec<u64>>,
    /// Customer code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_id1: Option<String>,
}

/// Body for the `update_by_*` calls.
///
/// `Patch::Unset` fields are omitted, `Patch::Null` clears the field and an
/// empty list removes every entry. Setting `system_id1` renames the
/// customer code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerUpdate {
    /// Family name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub last_name: Patch<String>,
    /// Given name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub first_name: Patch<String>,
    /// Family name in kana.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub last_name_kana: Patch<String>,
    /// Given name in kana.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub first_name_kana: Patch<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub company_name: Patch<String>,
    /// Job title.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub title: Patch<String>,
    /// Website.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub url: Patch<String>,
    /// Gender.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub gender_cd: Patch<Gender>,
    /// Default assignee mention name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub default_assignee: Patch<String>,
    /// Email addresses.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub emails: Patch<Vec<EmailAddress>>,
    /// Archived email addresses.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub archived_emails: Patch<Vec<EmailAddress>>,
    /// Phone numbers.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub tels: Patch<Vec<Tel>>,
    /// Archived phone numbers.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub archived_tels: Patch<Vec<Tel>>,
    /// Badge IDs.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub badge_ids: Patch<Vec<u64>>,
    /// Customer code.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub system_id1: Patch<String>,
}

/// Customer operations.
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    transport: &'a Transport,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    fn base_path(customer_group_id: u64) -> String {
        format!("customer_groups/{}/customers", customer_group_id)
    }

    /// Searches customers in an address book.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let found = client
    ///     .customers()
    ///     .search(1, &CustomerSearch::new().with_email("taro@example.com"))
    ///     .await?;
    /// ```
    pub async fn search(
        &self,
        customer_group_id: u64,
        params: &CustomerSearch,
    ) -> Result<Vec<Customer>, RelationError> {
        let path = format!("{}/search", Self::base_path(customer_group_id));
        let response = self.transport.get(&path, Some(&params.to_query())).await?;
        map_list(response)
    }

    /// Registers a customer.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn create(
        &self,
        customer_group_id: u64,
        customer: &NewCustomer,
    ) -> Result<Customer, RelationError> {
        let path = format!("{}/create", Self::base_path(customer_group_id));
        let response = self.transport.post(&path, customer).await?;
        map_record(response)
    }

    /// Gets a customer by customer code.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::ResourceNotFound` if no customer has that code.
    pub async fn get_by_system_id1(
        &self,
        customer_group_id: u64,
        system_id1: &str,
    ) -> Result<Customer, RelationError> {
        let response = self
            .transport
            .get(&Self::system_id1_path(customer_group_id, system_id1), None)
            .await?;
        map_record(response)
    }

    /// Gets a customer by email address.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::ResourceNotFound` if no customer has that address.
    pub async fn get_by_email(
        &self,
        customer_group_id: u64,
        email: &str,
    ) -> Result<Customer, RelationError> {
        let response = self
            .transport
            .get(&Self::email_path(customer_group_id, email), None)
            .await?;
        map_record(response)
    }

    /// Updates the customer with the given customer code.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn update_by_system_id1(
        &self,
        customer_group_id: u64,
        system_id1: &str,
        update: &CustomerUpdate,
    ) -> Result<Customer, RelationError> {
        let response = self
            .transport
            .put(&Self::system_id1_path(customer_group_id, system_id1), update)
            .await?;
        map_record(response)
    }

    /// Updates the customer with the given email address.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn update_by_email(
        &self,
        customer_group_id: u64,
        email: &str,
        update: &CustomerUpdate,
    ) -> Result<Customer, RelationError> {
        let response = self
            .transport
            .put(&Self::email_path(customer_group_id, email), update)
            .await?;
        map_record(response)
    }

    /// Deletes the customer with the given customer code.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn delete_by_system_id1(
        &self,
        customer_group_id: u64,
        system_id1: &str,
    ) -> Result<(), RelationError> {
        self.transport
            .delete(&Self::system_id1_path(customer_group_id, system_id1))
            .await?;
        Ok(())
    }

    /// Deletes the customer with the given email address.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error if the request fails.
    pub async fn delete_by_email(
        &self,
        customer_group_id: u64,
        email: &str,
    ) -> Result<(), RelationError> {
        self.transport
            .delete(&Self::email_path(customer_group_id, email))
            .await?;
        Ok(())
    }

    fn system_id1_path(customer_group_id: u64, system_id1: &str) -> String {
        format!(
            "{}/system_id1/{}",
            Self::base_path(customer_group_id),
            segment(system_id1)
        )
    }

    fn email_path(customer_group_id: u64, email: &str) -> String {
        format!("{}/email/{}", Self::base_path(customer_group_id), segment(email))
    }
}
