//! Attribute values.
//!
//! Attributes accept values of any kind at the call site; it is the validator
//! that decides whether a value is acceptable. `AttrValue` carries that
//! dynamically typed candidate until it is either committed or rejected.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A candidate or stored attribute value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttrValue {
    /// Explicit absence of a value (distinct from "never assigned").
    Null,
    /// Text.
    Text(String),
    /// Calendar date and time, without a time zone.
    Timestamp(NaiveDateTime),
    /// Integer.
    Integer(i64),
    /// Boolean.
    Boolean(bool),
}

impl AttrValue {
    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the timestamp, if this is a timestamp value.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            AttrValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Returns true for [`AttrValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// Short name of the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AttrValue::Null => "null",
            AttrValue::Text(_) => "text",
            AttrValue::Timestamp(_) => "timestamp",
            AttrValue::Integer(_) => "integer",
            AttrValue::Boolean(_) => "boolean",
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => f.write_str("null"),
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Timestamp(ts) => write!(f, "{ts}"),
            AttrValue::Integer(n) => write!(f, "{n}"),
            AttrValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<NaiveDateTime> for AttrValue {
    fn from(value: NaiveDateTime) -> Self {
        AttrValue::Timestamp(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Integer(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Boolean(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_conversions() {
        assert_eq!(AttrValue::from("alice"), AttrValue::Text("alice".into()));
        assert_eq!(AttrValue::from(sample_ts()).as_timestamp(), Some(sample_ts()));
        assert_eq!(AttrValue::from(None::<NaiveDateTime>), AttrValue::Null);
        assert_eq!(AttrValue::from(Some("bob")).as_text(), Some("bob"));
        assert_eq!(AttrValue::from(7i64).kind(), "integer");
    }

    #[test]
    fn test_display() {
        assert_eq!(AttrValue::Null.to_string(), "null");
        assert_eq!(AttrValue::from("yesterday").to_string(), "yesterday");
        assert_eq!(AttrValue::from(sample_ts()).to_string(), "2024-03-09 14:30:00");
        assert_eq!(AttrValue::from(false).to_string(), "false");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(AttrValue::from("alice")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "text", "value": "alice"}));

        let null: AttrValue = serde_json::from_str(r#"{"type":"null"}"#).unwrap();
        assert!(null.is_null());
    }
}
