//! The schema-record collaborator boundary.
//!
//! The resolver never owns schema data. It reads an immutable, fully loaded
//! record graph through [`SchemaStore`], a narrow read-only view implemented
//! by an adapter over whichever loader built the graph. The loader must
//! finish building before the first resolution call; after that the graph is
//! treated as frozen and any number of resolutions may read it concurrently.
//!
//! [`MemoryStore`] is the in-tree reference adapter.

mod memory;

pub use memory::{CapacityError, CapacityErrorKind, MemoryStore};

use crate::model::{BaseType, Decl, ModuleId, NodeId, RawValue, Status, TypeId};
use alloc::boxed::Box;
use alloc::string::String;

/// Raw metadata of one type record.
///
/// Text fields are `None` when the loader recorded no value. A record with
/// no local name is anonymous: its displayed metadata comes from its parent
/// record at resolution time.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRecord {
    /// Declared base type.
    pub base: BaseType,
    /// Declaration kind.
    pub decl: Decl,
    /// Definition status.
    pub status: Status,
    /// Local name; `None` for anonymous refinements.
    pub name: Option<String>,
    /// Description text.
    pub description: Option<String>,
    /// REFERENCE text.
    pub reference: Option<String>,
    /// Display hint.
    pub format: Option<String>,
    /// UNITS text.
    pub units: Option<String>,
}

/// One named-number record of an enumeration or bit-set.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedNumberRecord {
    /// Constant name.
    pub name: String,
    /// Raw tagged constant value.
    pub value: RawValue,
}

/// One range record.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeRecord {
    /// Raw tagged lower bound.
    pub min: RawValue,
    /// Raw tagged upper bound.
    pub max: RawValue,
}

/// Raw metadata of one node record.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRecord {
    /// Associated type, if the node has one.
    pub type_id: Option<TypeId>,
    /// Node-local display hint.
    pub format: Option<String>,
    /// Node-local UNITS text.
    pub units: Option<String>,
}

/// Raw metadata of one module record.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleRecord {
    /// Module name.
    pub name: Option<String>,
    /// ORGANIZATION text.
    pub organization: Option<String>,
    /// CONTACT-INFO text.
    pub contact_info: Option<String>,
    /// Description text.
    pub description: Option<String>,
    /// REFERENCE text.
    pub reference: Option<String>,
}

/// Read-only view over a loaded schema record graph.
///
/// An unknown id behaves like an absent record: accessor methods return
/// `None` and the iterator methods yield nothing. Iterators deliver records
/// in the schema's declaration order and are consumed once, fully.
pub trait SchemaStore {
    /// Get a type's own metadata record.
    fn type_record(&self, ty: TypeId) -> Option<TypeRecord>;

    /// Get a type's parent type, one hop.
    fn parent_type(&self, ty: TypeId) -> Option<TypeId>;

    /// Iterate a type's named-number records in declaration order.
    fn named_numbers(&self, ty: TypeId) -> Box<dyn Iterator<Item = NamedNumberRecord> + '_>;

    /// Iterate a type's range records in declaration order.
    fn ranges(&self, ty: TypeId) -> Box<dyn Iterator<Item = RangeRecord> + '_>;

    /// Get the module that defines a type.
    fn type_module(&self, ty: TypeId) -> Option<ModuleId>;

    /// Get a module's metadata record.
    fn module_record(&self, module: ModuleId) -> Option<ModuleRecord>;

    /// Get the type associated with a node.
    fn node_type(&self, node: NodeId) -> Option<TypeId>;

    /// Get a node's metadata record.
    fn node_record(&self, node: NodeId) -> Option<NodeRecord>;
}
