//! Attribute validators.
//!
//! Each validator is a pure predicate over a candidate [`AttrValue`]. They never
//! log, allocate state, or fail; rejection is reported by the field that calls them.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::AttrValue;

/// Signature shared by all validators.
pub type Validator = fn(&AttrValue) -> bool;

/// Anchored at both ends: local part, `@`, domain, `.`, alphabetic TLD of 2+.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Accepts text that is non-empty after trimming surrounding whitespace.
pub fn validate_username(value: &AttrValue) -> bool {
    value.as_text().is_some_and(|s| !s.trim().is_empty())
}

/// Accepts text shaped like `local@domain.tld`.
pub fn validate_email(value: &AttrValue) -> bool {
    value.as_text().is_some_and(|s| email_regex().is_match(s))
}

/// Accepts null or a timestamp.
pub fn validate_last_login(value: &AttrValue) -> bool {
    matches!(value, AttrValue::Null | AttrValue::Timestamp(_))
}
