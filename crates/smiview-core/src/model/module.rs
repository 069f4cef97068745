//! Resolved module metadata.

use super::ids::ModuleId;
use alloc::string::String;

/// The module that defines a type.
///
/// Built on demand from the store's module record; text fields default to
/// empty when the loader has no value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    /// Module handle in the originating store.
    pub id: ModuleId,
    /// Module name.
    pub name: String,
    /// ORGANIZATION text.
    pub organization: String,
    /// CONTACT-INFO text.
    pub contact_info: String,
    /// Description text.
    pub description: String,
    /// REFERENCE text.
    pub reference: String,
}
