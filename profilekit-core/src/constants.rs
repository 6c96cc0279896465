//! Attribute names and process-wide defaults.

use chrono::{NaiveDate, NaiveDateTime};

// ═══════════════════════════════════════════════════════════════════════════════
// ATTRIBUTE NAMES
// ═══════════════════════════════════════════════════════════════════════════════

/// Name of the username attribute.
pub const USERNAME: &str = "username";

/// Name of the email attribute.
pub const EMAIL: &str = "email";

/// Name of the last-login attribute.
pub const LAST_LOGIN: &str = "last_login";

/// All attribute names, in declaration order.
pub const ATTRIBUTE_NAMES: [&str; 3] = [USERNAME, EMAIL, LAST_LOGIN];

// ═══════════════════════════════════════════════════════════════════════════════
// DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Calendar date of the default last-login placeholder (year, month, day).
pub const DEFAULT_LAST_LOGIN_DATE: (i32, u32, u32) = (2000, 1, 1);

/// Returns the shared placeholder used when a profile has no last login.
///
/// Midnight on [`DEFAULT_LAST_LOGIN_DATE`], without a time zone.
pub fn default_last_login() -> NaiveDateTime {
    let (year, month, day) = DEFAULT_LAST_LOGIN_DATE;
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}
