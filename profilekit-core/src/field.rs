//! Validated attribute fields.
//!
//! A [`ValidatedField`] is declared once per attribute, as a `static` next to
//! the owner type, and is shared by every instance of that type. It holds no
//! values itself: reads and writes are routed into the instance's own
//! [`AttributeMap`], keyed by the field's name.
//!
//! ```rust
//! use profilekit_core::{AttrValue, AttributeMap, AttributeStore, ValidatedField};
//!
//! #[derive(Default)]
//! struct Tag { attributes: AttributeMap }
//!
//! impl AttributeStore for Tag {
//!     fn attributes(&self) -> &AttributeMap { &self.attributes }
//!     fn attributes_mut(&mut self) -> &mut AttributeMap { &mut self.attributes }
//! }
//!
//! fn non_empty(value: &AttrValue) -> bool {
//!     value.as_text().is_some_and(|s| !s.is_empty())
//! }
//!
//! static LABEL: ValidatedField<Tag> = ValidatedField::bind("label", non_empty);
//!
//! let mut tag = Tag::default();
//! assert!(LABEL.read(&tag).is_none());
//! LABEL.write(&mut tag, "urgent").unwrap();
//! assert!(LABEL.write(&mut tag, "").is_err());
//! assert_eq!(LABEL.read(&tag), Some(&AttrValue::from("urgent")));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::error::{ProfileError, Result};
use crate::types::AttrValue;
use crate::validate::Validator;

/// Per-instance attribute storage: attribute name → stored value.
pub type AttributeMap = HashMap<&'static str, AttrValue>;

/// Types whose attributes are stored through [`ValidatedField`]s.
pub trait AttributeStore {
    /// Read access to the instance's attribute storage.
    fn attributes(&self) -> &AttributeMap;

    /// Write access to the instance's attribute storage.
    ///
    /// Values inserted here directly skip validation; writes should go
    /// through [`ValidatedField::write`].
    fn attributes_mut(&mut self) -> &mut AttributeMap;
}

/// Shared validation and storage routing for one named attribute of `O`.
pub struct ValidatedField<O: ?Sized> {
    name: &'static str,
    validator: Validator,
    _owner: PhantomData<fn(&O)>,
}

impl<O: ?Sized> ValidatedField<O> {
    /// Binds `validator` to the attribute `name` of the owner type.
    ///
    /// The name is fixed from here on; it addresses the per-instance storage
    /// and appears in validation errors.
    pub const fn bind(name: &'static str, validator: Validator) -> Self {
        Self {
            name,
            validator,
            _owner: PhantomData,
        }
    }

    /// The attribute name this field is bound to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the validator without touching any instance.
    pub fn accepts(&self, value: &AttrValue) -> bool {
        (self.validator)(value)
    }
}

impl<O: AttributeStore + ?Sized> ValidatedField<O> {
    /// Returns the value stored on `instance`, or `None` if never assigned.
    pub fn read<'a>(&self, instance: &'a O) -> Option<&'a AttrValue> {
        instance.attributes().get(self.name)
    }

    /// Validates `value` and stores it on `instance`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// [`ProfileError::Validation`] if the validator rejects the value; the
    /// instance is left unchanged.
    pub fn write(&self, instance: &mut O, value: impl Into<AttrValue>) -> Result<()> {
        let value = value.into();
        if !self.accepts(&value) {
            debug!(attribute = self.name, kind = value.kind(), "Rejected attribute value");
            return Err(ProfileError::Validation {
                attribute: self.name,
                value,
            });
        }

        trace!(attribute = self.name, kind = value.kind(), "Storing attribute value");
        instance.attributes_mut().insert(self.name, value);
        Ok(())
    }
}

impl<O: ?Sized> fmt::Debug for ValidatedField<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedField")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Record {
        attributes: AttributeMap,
    }

    impl AttributeStore for Record {
        fn attributes(&self) -> &AttributeMap {
            &self.attributes
        }

        fn attributes_mut(&mut self) -> &mut AttributeMap {
            &mut self.attributes
        }
    }

    fn positive(value: &AttrValue) -> bool {
        matches!(value, AttrValue::Integer(n) if *n > 0)
    }

    static COUNT: ValidatedField<Record> = ValidatedField::bind("count", positive);
    static LIMIT: ValidatedField<Record> = ValidatedField::bind("limit", positive);

    #[test]
    fn test_unset_reads_none() {
        let record = Record::default();
        assert!(COUNT.read(&record).is_none());
    }

    #[test]
    fn test_write_then_read() {
        let mut record = Record::default();
        COUNT.write(&mut record, 3i64).unwrap();
        assert_eq!(COUNT.read(&record), Some(&AttrValue::Integer(3)));

        COUNT.write(&mut record, 5i64).unwrap();
        assert_eq!(COUNT.read(&record), Some(&AttrValue::Integer(5)));
    }

    #[test]
    fn test_rejected_write_keeps_previous_value() {
        let mut record = Record::default();
        COUNT.write(&mut record, 3i64).unwrap();

        let err = COUNT.write(&mut record, -1i64).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::Validation { attribute: "count", value: AttrValue::Integer(-1) }
        ));
        assert_eq!(COUNT.read(&record), Some(&AttrValue::Integer(3)));
    }

    #[test]
    fn test_rejected_first_write_leaves_unset() {
        let mut record = Record::default();
        assert!(COUNT.write(&mut record, "three").is_err());
        assert!(COUNT.read(&record).is_none());
        assert!(record.attributes.is_empty());
    }

    #[test]
    fn test_fields_use_separate_storage_keys() {
        let mut record = Record::default();
        COUNT.write(&mut record, 1i64).unwrap();
        LIMIT.write(&mut record, 10i64).unwrap();
        assert_eq!(COUNT.read(&record), Some(&AttrValue::Integer(1)));
        assert_eq!(LIMIT.read(&record), Some(&AttrValue::Integer(10)));
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut a = Record::default();
        let mut b = Record::default();
        COUNT.write(&mut a, 1i64).unwrap();
        COUNT.write(&mut b, 2i64).unwrap();
        assert_eq!(COUNT.read(&a), Some(&AttrValue::Integer(1)));
        assert_eq!(COUNT.read(&b), Some(&AttrValue::Integer(2)));
    }

    #[test]
    fn test_introspection() {
        assert_eq!(COUNT.name(), "count");
        assert!(COUNT.accepts(&AttrValue::Integer(1)));
        assert!(!COUNT.accepts(&AttrValue::Null));
        assert!(format!("{COUNT:?}").contains("count"));
    }
}
