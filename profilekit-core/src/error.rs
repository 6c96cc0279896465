//! Error types for profilekit.
//!
//! Validation failures are the only expected error. By-name attribute access
//! adds a second kind for names the profile does not define.

use thiserror::Error;

use crate::types::AttrValue;

/// Result type alias using `ProfileError`.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Main error type for profile operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A write was rejected by the attribute's validator.
    ///
    /// The profile is left exactly as it was before the write.
    #[error("Invalid value for {attribute}: {value}")]
    Validation {
        /// Name of the attribute that rejected the value.
        attribute: &'static str,
        /// The rejected value.
        value: AttrValue,
    },

    /// The attribute name is not defined on `Profile`.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
}

impl ProfileError {
    /// Returns true if this error came from a validator.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ProfileError::Validation { .. })
    }

    /// Name of the attribute involved, when it is a known one.
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            ProfileError::Validation { attribute, .. } => Some(*attribute),
            ProfileError::UnknownAttribute(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ProfileError::Validation {
            attribute: "email",
            value: AttrValue::from("not-an-email"),
        };
        assert_eq!(err.to_string(), "Invalid value for email: not-an-email");
    }

    #[test]
    fn test_error_classification() {
        let err = ProfileError::Validation {
            attribute: "username",
            value: AttrValue::from(""),
        };
        assert!(err.is_validation_error());
        assert_eq!(err.attribute(), Some("username"));

        let err = ProfileError::UnknownAttribute("nickname".into());
        assert!(!err.is_validation_error());
        assert_eq!(err.attribute(), None);
        assert!(err.to_string().contains("nickname"));
    }
}
