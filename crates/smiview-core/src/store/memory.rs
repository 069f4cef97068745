//! In-memory schema store.
//!
//! Arena-backed reference implementation of [`SchemaStore`]: record vectors
//! addressed by index ids. It doubles as the fixture the test suites build
//! record graphs into and as a template for adapters over real loaders.

use super::{ModuleRecord, NamedNumberRecord, NodeRecord, RangeRecord, SchemaStore, TypeRecord};
use crate::model::{ModuleId, NodeId, RawValue, TypeId};
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Error returned when store capacity is exceeded.
///
/// Ids are `NonZeroU32`, limiting each record collection to `u32::MAX - 1`
/// entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError {
    /// The kind of storage that exceeded capacity.
    pub kind: CapacityErrorKind,
}

/// The kind of storage that exceeded capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityErrorKind {
    /// Too many modules (limit: u32::MAX - 1).
    Modules,
    /// Too many types (limit: u32::MAX - 1).
    Types,
    /// Too many nodes (limit: u32::MAX - 1).
    Nodes,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            CapacityErrorKind::Modules => "modules",
            CapacityErrorKind::Types => "types",
            CapacityErrorKind::Nodes => "nodes",
        };
        write!(
            f,
            "store capacity exceeded: too many {} (limit: {})",
            kind,
            u32::MAX - 1
        )
    }
}

/// Storage for one type record and everything hanging off it.
#[derive(Clone, Debug, Default)]
struct TypeEntry {
    record: TypeRecord,
    module: Option<ModuleId>,
    parent: Option<TypeId>,
    named_numbers: Vec<NamedNumberRecord>,
    ranges: Vec<RangeRecord>,
}

/// In-memory schema record graph.
///
/// Build it up with the `add_*`/`push_*`/`set_*` methods, then hand it to a
/// resolver. The mutators that address an existing record ignore ids the
/// store does not know.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    modules: Vec<ModuleRecord>,
    types: Vec<TypeEntry>,
    nodes: Vec<NodeRecord>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module record and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the store already contains `u32::MAX - 1`
    /// modules.
    pub fn add_module(&mut self, record: ModuleRecord) -> Result<ModuleId, CapacityError> {
        let id = ModuleId::from_index(self.modules.len()).ok_or(CapacityError {
            kind: CapacityErrorKind::Modules,
        })?;
        self.modules.push(record);
        Ok(id)
    }

    /// Add a type record, owned by `module` when given, and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the store already contains `u32::MAX - 1`
    /// types.
    pub fn add_type(
        &mut self,
        module: Option<ModuleId>,
        record: TypeRecord,
    ) -> Result<TypeId, CapacityError> {
        let id = TypeId::from_index(self.types.len()).ok_or(CapacityError {
            kind: CapacityErrorKind::Types,
        })?;
        self.types.push(TypeEntry {
            record,
            module,
            ..TypeEntry::default()
        });
        Ok(id)
    }

    /// Link `ty` to its parent type.
    pub fn set_parent_type(&mut self, ty: TypeId, parent: TypeId) {
        if let Some(entry) = self.types.get_mut(ty.to_index()) {
            entry.parent = Some(parent);
        }
    }

    /// Append a named-number record to `ty`. Declaration order is the call
    /// order.
    pub fn push_named_number(&mut self, ty: TypeId, name: &str, value: RawValue) {
        if let Some(entry) = self.types.get_mut(ty.to_index()) {
            entry.named_numbers.push(NamedNumberRecord {
                name: String::from(name),
                value,
            });
        }
    }

    /// Append a range record to `ty`. Declaration order is the call order.
    pub fn push_range(&mut self, ty: TypeId, min: RawValue, max: RawValue) {
        if let Some(entry) = self.types.get_mut(ty.to_index()) {
            entry.ranges.push(RangeRecord { min, max });
        }
    }

    /// Add a node record and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the store already contains `u32::MAX - 1`
    /// nodes.
    pub fn add_node(&mut self, record: NodeRecord) -> Result<NodeId, CapacityError> {
        let id = NodeId::from_index(self.nodes.len()).ok_or(CapacityError {
            kind: CapacityErrorKind::Nodes,
        })?;
        self.nodes.push(record);
        Ok(id)
    }

    /// Get the number of modules.
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Get the number of types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Get the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn entry(&self, ty: TypeId) -> Option<&TypeEntry> {
        self.types.get(ty.to_index())
    }
}

impl SchemaStore for MemoryStore {
    fn type_record(&self, ty: TypeId) -> Option<TypeRecord> {
        self.entry(ty).map(|e| e.record.clone())
    }

    fn parent_type(&self, ty: TypeId) -> Option<TypeId> {
        self.entry(ty).and_then(|e| e.parent)
    }

    fn named_numbers(&self, ty: TypeId) -> Box<dyn Iterator<Item = NamedNumberRecord> + '_> {
        match self.entry(ty) {
            Some(entry) => Box::new(entry.named_numbers.iter().cloned()),
            None => Box::new(core::iter::empty()),
        }
    }

    fn ranges(&self, ty: TypeId) -> Box<dyn Iterator<Item = RangeRecord> + '_> {
        match self.entry(ty) {
            Some(entry) => Box::new(entry.ranges.iter().copied()),
            None => Box::new(core::iter::empty()),
        }
    }

    fn type_module(&self, ty: TypeId) -> Option<ModuleId> {
        self.entry(ty).and_then(|e| e.module)
    }

    fn module_record(&self, module: ModuleId) -> Option<ModuleRecord> {
        self.modules.get(module.to_index()).cloned()
    }

    fn node_type(&self, node: NodeId) -> Option<TypeId> {
        self.nodes.get(node.to_index()).and_then(|n| n.type_id)
    }

    fn node_record(&self, node: NodeId) -> Option<NodeRecord> {
        self.nodes.get(node.to_index()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BaseType;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(store.module_count(), 0);
        assert_eq!(store.type_count(), 0);
        assert_eq!(store.node_count(), 0);
    }

    #[test]
    fn test_add_and_get_type() {
        let mut store = MemoryStore::new();
        let ty = store
            .add_type(
                None,
                TypeRecord {
                    base: BaseType::Integer32,
                    name: Some("InterfaceIndex".to_string()),
                    ..TypeRecord::default()
                },
            )
            .unwrap();

        let record = store.type_record(ty).unwrap();
        assert_eq!(record.base, BaseType::Integer32);
        assert_eq!(record.name.as_deref(), Some("InterfaceIndex"));
    }

    #[test]
    fn test_unknown_ids_are_absent() {
        let store = MemoryStore::new();
        let ty = TypeId::from_raw(7).unwrap();

        assert!(store.type_record(ty).is_none());
        assert!(store.parent_type(ty).is_none());
        assert!(store.type_module(ty).is_none());
        assert_eq!(store.named_numbers(ty).count(), 0);
        assert_eq!(store.ranges(ty).count(), 0);
        assert!(store.node_type(NodeId::from_raw(7).unwrap()).is_none());
        assert!(store
            .module_record(ModuleId::from_raw(7).unwrap())
            .is_none());
    }

    #[test]
    fn test_named_numbers_keep_push_order() {
        let mut store = MemoryStore::new();
        let ty = store
            .add_type(
                None,
                TypeRecord {
                    base: BaseType::Enum,
                    ..TypeRecord::default()
                },
            )
            .unwrap();

        store.push_named_number(ty, "up", RawValue::int32(1));
        store.push_named_number(ty, "down", RawValue::int32(2));

        let names: Vec<_> = store.named_numbers(ty).map(|n| n.name).collect();
        assert_eq!(names, ["up", "down"]);
    }

    #[test]
    fn test_mutators_ignore_unknown_ids() {
        let mut store = MemoryStore::new();
        let ty = TypeId::from_raw(9).unwrap();

        store.push_named_number(ty, "up", RawValue::int32(1));
        store.push_range(ty, RawValue::int32(0), RawValue::int32(1));
        store.set_parent_type(ty, ty);

        assert_eq!(store.type_count(), 0);
    }

    #[test]
    fn test_capacity_error_display() {
        let err = CapacityError {
            kind: CapacityErrorKind::Types,
        };
        assert_eq!(
            format!("{}", err),
            "store capacity exceeded: too many types (limit: 4294967294)"
        );
    }
}
