//! # profilekit core
//!
//! Validated user-profile attributes.
//!
//! This crate provides the building blocks shared by the rest of the workspace:
//!
//! - **Values**: [`AttrValue`], the dynamically typed candidate/stored attribute value
//! - **Validators**: pure predicates deciding which values an attribute accepts
//! - **Fields**: [`ValidatedField`], one shared slot per attribute that routes every
//!   read and write through its validator into per-instance storage
//! - **Profile**: the [`Profile`] type with `username`, `email` and `last_login`
//! - **Errors**: [`ProfileError`] and the crate [`Result`] alias
//!
//! ## Example
//!
//! ```rust
//! use profilekit_core::{resolve_last_login, default_last_login, Profile};
//!
//! let mut profile = Profile::new();
//! profile.set_username("JohnDoe").unwrap();
//! assert!(profile.set_email("john@example").is_err());
//! assert_eq!(resolve_last_login(&profile), default_last_login());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod field;
pub mod types;
pub mod validate;

pub use constants::*;
pub use error::{ProfileError, Result};
pub use field::{AttributeMap, AttributeStore, ValidatedField};
pub use types::*;
pub use validate::{validate_email, validate_last_login, validate_username, Validator};
