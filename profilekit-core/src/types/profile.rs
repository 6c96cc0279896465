//! The user profile.
//!
//! A profile starts with no attributes set. Every assignment goes through the
//! attribute's [`ValidatedField`], so a stored value always satisfies its
//! validator; a rejected assignment leaves the profile untouched.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{default_last_login, EMAIL, LAST_LOGIN, USERNAME};
use crate::error::{ProfileError, Result};
use crate::field::{AttributeMap, AttributeStore, ValidatedField};
use crate::types::AttrValue;
use crate::validate::{validate_email, validate_last_login, validate_username};

/// Validated `username` field: non-blank text.
pub static USERNAME_FIELD: ValidatedField<Profile> =
    ValidatedField::bind(USERNAME, validate_username);

/// Validated `email` field: `local@domain.tld` text.
pub static EMAIL_FIELD: ValidatedField<Profile> = ValidatedField::bind(EMAIL, validate_email);

/// Validated `last_login` field: null or a timestamp.
pub static LAST_LOGIN_FIELD: ValidatedField<Profile> =
    ValidatedField::bind(LAST_LOGIN, validate_last_login);

/// Identity token assigned to each profile when it is created.
///
/// Unique per profile for the life of the process; the default cache key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProfileId(Uuid);

impl ProfileId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user with validated `username`, `email` and `last_login` attributes.
///
/// Profiles are deliberately not `Clone`: each one has its own identity.
#[derive(Debug)]
pub struct Profile {
    id: ProfileId,
    attributes: AttributeMap,
}

impl Profile {
    /// Creates a profile with no attributes set.
    pub fn new() -> Self {
        Self {
            id: ProfileId::generate(),
            attributes: AttributeMap::with_capacity(Self::fields().len()),
        }
    }

    /// This profile's identity token.
    pub fn id(&self) -> ProfileId {
        self.id
    }

    /// The validated fields declared on `Profile`, in declaration order.
    pub fn fields() -> [&'static ValidatedField<Profile>; 3] {
        [&USERNAME_FIELD, &EMAIL_FIELD, &LAST_LOGIN_FIELD]
    }

    /// Looks up a field by attribute name.
    pub fn field(name: &str) -> Option<&'static ValidatedField<Profile>> {
        Self::fields().into_iter().find(|field| field.name() == name)
    }

    /// Reads an attribute by name.
    ///
    /// `Ok(None)` means the attribute exists but was never assigned.
    pub fn get(&self, name: &str) -> Result<Option<&AttrValue>> {
        let field = Self::field(name)
            .ok_or_else(|| ProfileError::UnknownAttribute(name.to_owned()))?;
        Ok(field.read(self))
    }

    /// Assigns an attribute by name, through its validator.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<()> {
        let field = Self::field(name)
            .ok_or_else(|| ProfileError::UnknownAttribute(name.to_owned()))?;
        field.write(self, value)
    }

    /// The username, if set.
    pub fn username(&self) -> Option<&str> {
        USERNAME_FIELD.read(self).and_then(AttrValue::as_text)
    }

    /// Sets the username. Rejects non-text and blank text.
    pub fn set_username(&mut self, value: impl Into<AttrValue>) -> Result<()> {
        USERNAME_FIELD.write(self, value)
    }

    /// The email address, if set.
    pub fn email(&self) -> Option<&str> {
        EMAIL_FIELD.read(self).and_then(AttrValue::as_text)
    }

    /// Sets the email address. Rejects anything not shaped like `local@domain.tld`.
    pub fn set_email(&mut self, value: impl Into<AttrValue>) -> Result<()> {
        EMAIL_FIELD.write(self, value)
    }

    /// The last login time, if set to a timestamp.
    ///
    /// Returns `None` both when unset and when explicitly set to null.
    pub fn last_login(&self) -> Option<NaiveDateTime> {
        LAST_LOGIN_FIELD.read(self).and_then(AttrValue::as_timestamp)
    }

    /// Sets the last login time. Accepts a timestamp or null.
    pub fn set_last_login(&mut self, value: impl Into<AttrValue>) -> Result<()> {
        LAST_LOGIN_FIELD.write(self, value)
    }

    /// Records a login at `at`, or at the current local time when `None`.
    pub fn update_last_login(&mut self, at: Option<NaiveDateTime>) -> Result<()> {
        let at = at.unwrap_or_else(|| Local::now().naive_local());
        self.set_last_login(at)
    }

    /// The last login time, falling back to [`default_last_login`].
    pub fn last_login_or_default(&self) -> NaiveDateTime {
        self.last_login().unwrap_or_else(default_last_login)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeStore for Profile {
    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |field: &ValidatedField<Profile>| match field.read(self) {
            None | Some(AttrValue::Null) => "None".to_owned(),
            Some(value) => value.to_string(),
        };
        write!(
            f,
            "UserProfile(username={}, email={}, last_login={})",
            show(&USERNAME_FIELD),
            show(&EMAIL_FIELD),
            show(&LAST_LOGIN_FIELD),
        )
    }
}

/// Returns the profile's last login, or the shared default when it has none.
pub fn resolve_last_login(profile: &Profile) -> NaiveDateTime {
    profile.last_login_or_default()
}
