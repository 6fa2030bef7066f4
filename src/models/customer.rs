//! Customer models for the Re:lation API.
//!
//! Customers live in a customer group (address book). Badges are defined
//! per customer group and referenced from customers by ID.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::common::{EmailAddress, Gender, Tel};
use crate::mapper::de;

/// A customer record from an address book.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Customer {
    /// Unique customer ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub customer_id: Option<u64>,

    /// Family name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub last_name: Option<String>,

    /// Given name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub first_name: Option<String>,

    /// Family name in kana.
    #[serde(default, deserialize_with = "de::lenient")]
    pub last_name_kana: Option<String>,

    /// Given name in kana.
    #[serde(default, deserialize_with = "de::lenient")]
    pub first_name_kana: Option<String>,

    /// Company name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub company_name: Option<String>,

    /// Job title.
    #[serde(default, deserialize_with = "de::lenient")]
    pub title: Option<String>,

    /// Website.
    #[serde(default, deserialize_with = "de::lenient")]
    pub url: Option<String>,

    /// Gender code (1, 2 or 9). See [`Customer::gender`].
    #[serde(default, deserialize_with = "de::lenient")]
    pub gender_cd: Option<u8>,

    /// Customer code, unique within the address book.
    #[serde(default, deserialize_with = "de::lenient")]
    pub system_id1: Option<String>,

    /// Mention name of the default assignee.
    #[serde(default, deserialize_with = "de::lenient")]
    pub default_assignee: Option<String>,

    /// User ID of the default assignee.
    #[serde(default, deserialize_with = "de::lenient")]
    pub default_assignee_id: Option<u64>,

    /// Active email addresses.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub emails: Vec<EmailAddress>,

    /// Archived email addresses.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub archived_emails: Vec<EmailAddress>,

    /// Active phone numbers.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub tels: Vec<Tel>,

    /// Archived phone numbers.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub archived_tels: Vec<Tel>,

    /// Badges attached to the customer.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub badge_ids: Vec<u64>,

    /// Last modification time.
    #[serde(default, deserialize_with = "de::timestamp")]
    pub last_updated_at: Option<DateTime<FixedOffset>>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Customer {
    /// Returns the decoded gender, if a code was sent.
    pub fn gender(&self) -> Option<Gender> {
        self.gender_cd.map(Gender::from_code)
    }

    /// Returns "last first" (the order used in Japanese), skipping missing parts.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.last_name.as_deref(), self.first_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            "(no name)".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// Returns the first active email address, if any.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.iter().find_map(|e| e.email.as_deref())
    }
}

/// An address book.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CustomerGroup {
    /// Unique customer group ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub customer_group_id: Option<u64>,

    /// Display name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,

    /// Message boxes that use this address book.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub message_box_ids: Vec<u64>,

    /// Last modification time.
    #[serde(default, deserialize_with = "de::timestamp")]
    pub last_updated_at: Option<DateTime<FixedOffset>>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A badge that can be attached to customers.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Badge {
    /// Unique badge ID.
    #[serde(default, deserialize_with = "de::lenient")]
    pub badge_id: Option<u64>,

    /// Display name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
