//! Domain types for profilekit.
//!
//! - [`AttrValue`]: a candidate or stored attribute value
//! - [`Profile`]: one user, carrying validated attributes
//! - [`ProfileId`]: identity token assigned to each profile at construction

mod profile;
mod value;

pub use profile::*;
pub use value::*;
