//! User (operator) models for the Re:lation API.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::codes::UserStatus;
use crate::mapper::de;

/// An operator account in the tenant.
///
/// Users are addressed by `mention_name`, which is what ticket assignment
/// and customer default assignee fields refer to.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct User {
    /// Unique handle.
    #[serde(default, deserialize_with = "de::lenient")]
    pub mention_name: Option<String>,

    /// Account status.
    #[serde(default, deserialize_with = "de::lenient")]
    pub status_cd: Option<UserStatus>,

    /// Given name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub last_name: Option<String>,

    /// Department.
    #[serde(default, deserialize_with = "de::lenient")]
    pub department_name: Option<String>,

    /// Employee number.
    #[serde(default, deserialize_with = "de::lenient")]
    pub employee_no: Option<String>,

    /// Login email.
    #[serde(default, deserialize_with = "de::lenient")]
    pub email: Option<String>,

    /// Tenant administrator flag.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub is_tenant_admin: bool,

    /// Whether one-time passwords are enforced.
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub is_otp_required: bool,

    /// Last activity time.
    #[serde(default, deserialize_with = "de::timestamp")]
    pub last_page_loaded_at: Option<DateTime<FixedOffset>>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Returns true if the account can log in.
    pub fn is_active(&self) -> bool {
        self.status_cd == Some(UserStatus::Available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::map_record;
    use serde_json::json;

    #[test]
    fn test_user_mapping() {
        let user: User = map_record(json!({
            "mention_name": "suzuki",
            "status_cd": "available",
            "is_tenant_admin": true,
            "last_page_loaded_at": "2021-01-05T13:31:56.000+09:00"
        }))
        .unwrap();
        assert!(user.is_active());
        assert!(user.is_tenant_admin);
        assert!(!user.is_otp_required);
        assert!(user.last_page_loaded_at.is_some());
    }

    #[test]
    fn test_locked_user_is_inactive() {
        let user: User = map_record(json!({"mention_name": "x", "status_cd": "locked"})).unwrap();
        assert!(!user.is_active());
    }
}
