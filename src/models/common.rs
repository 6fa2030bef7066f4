//! Common types shared across Re:lation API models.
//!
//! This module defines the contact value-objects embedded in customers,
//! the tri-state [`Patch`] used by update calls, and the small
//! acknowledgement records returned by create calls.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::mapper::de;

/// Tri-state value for update calls.
///
/// `Unset` leaves the field out of the request body, `Null` sends an
/// explicit JSON `null` (clearing the field server-side), and `Value`
/// sends the value as-is.
///
/// Use `#[serde(skip_serializing_if = "Patch::is_unset")]` on fields of
/// this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Not sent.
    Unset,
    /// Sent as `null`.
    Null,
    /// Sent as the contained value.
    Value(T),
}

impl<T> Patch<T> {
    /// Returns true if the field is left out of the request.
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    /// Returns the contained value, if any.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Value(value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(v) => v.serialize(serializer),
            Patch::Unset | Patch::Null => serializer.serialize_none(),
        }
    }
}

/// Customer gender code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Code 1.
    Male,
    /// Code 2.
    Female,
    /// Code 9.
    Unknown,
}

impl Gender {
    /// Returns the numeric code used by the API.
    pub fn code(self) -> u8 {
        match self {
            Gender::Male => 1,
            Gender::Female => 2,
            Gender::Unknown => 9,
        }
    }

    /// Maps an API code back to a gender; unrecognized codes are `Unknown`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Gender::Male,
            2 => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

impl Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

/// An email address attached to a customer.
///
/// The API sends `{"email": "..."}`; a bare string is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EmailAddress {
    /// The address.
    pub email: Option<String>,
}

impl EmailAddress {
    /// Creates an email value-object.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }
}

/// A phone number attached to a customer.
///
/// The API sends `{"tel": "..."}`; a bare string is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Tel {
    /// The phone number.
    pub tel: Option<String>,
}

impl Tel {
    /// Creates a phone value-object.
    pub fn new(tel: impl Into<String>) -> Self {
        Self {
            tel: Some(tel.into()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContactRepr {
    Bare(String),
    Object(serde_json::Map<String, serde_json::Value>),
}

impl ContactRepr {
    fn into_field(self, key: &str) -> Option<String> {
        match self {
            ContactRepr::Bare(s) => Some(s),
            ContactRepr::Object(mut map) => match map.remove(key) {
                Some(serde_json::Value::String(s)) => Some(s),
                _ => None,
            },
        }
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = ContactRepr::deserialize(deserializer)?;
        Ok(EmailAddress {
            email: repr.into_field("email"),
        })
    }
}

impl<'de> Deserialize<'de> for Tel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = ContactRepr::deserialize(deserializer)?;
        Ok(Tel {
            tel: repr.into_field("tel"),
        })
    }
}

/// Acknowledgement for calls that create a message (mails, records).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MessageCreated {
    /// ID of the created message.
    #[serde(default, deserialize_with = "de::lenient")]
    pub message_id: Option<u64>,

    /// ID of the ticket the message belongs to.
    #[serde(default, deserialize_with = "de::lenient")]
    pub ticket_id: Option<u64>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Acknowledgement for case category creation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CaseCategoryCreated {
    /// ID of the created case category.
    #[serde(default, deserialize_with = "de::lenient")]
    pub case_category_id: Option<u64>,
}

/// Acknowledgement for label creation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LabelCreated {
    /// ID of the created label.
    #[serde(default, deserialize_with = "de::lenient")]
    pub label_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Body {
        #[serde(skip_serializing_if = "Patch::is_unset")]
        a: Patch<u64>,
        #[serde(skip_serializing_if = "Patch::is_unset")]
        b: Patch<u64>,
        #[serde(skip_serializing_if = "Patch::is_unset")]
        c: Patch<Vec<u64>>,
    }

    #[test]
    fn test_patch_tri_state() {
        let body = Body {
            a: Patch::Unset,
            b: Patch::Null,
            c: Patch::Value(vec![]),
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"b": null, "c": []}));
    }

    #[test]
    fn test_patch_from_value() {
        let patch: Patch<&str> = "x".into();
        assert_eq!(patch.as_value(), Some(&"x"));
        assert!(Patch::<u8>::default().is_unset());
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(serde_json::to_value(Gender::Female).unwrap(), json!(2));
        assert_eq!(Gender::from_code(9), Gender::Unknown);
        assert_eq!(Gender::from_code(1), Gender::Male);
        assert_eq!(Gender::from_code(3), Gender::Unknown);
    }

    #[test]
    fn test_email_accepts_object_or_string() {
        let emails: Vec<EmailAddress> =
            serde_json::from_value(json!([{"email": "a@example.com"}, "b@example.com", {}]))
                .unwrap();
        assert_eq!(emails[0].email.as_deref(), Some("a@example.com"));
        assert_eq!(emails[1].email.as_deref(), Some("b@example.com"));
        assert_eq!(emails[2].email, None);
    }

    #[test]
    fn test_tel_serializes_as_object() {
        assert_eq!(
            serde_json::to_value(Tel::new("09000000000")).unwrap(),
            json!({"tel": "09000000000"})
        );
    }
}
