//! Type resolution over a schema store.
//!
//! Turns raw type records into self-contained type values:
//!
//! ```text
//! SchemaStore records → TypeResolver → Type
//! ```
//!
//! Resolution is synchronous and read-only: each call reads the frozen
//! record graph through the store and returns a freshly allocated result.
//! A resolver borrows its store immutably, so independent resolutions may
//! run concurrently over one loaded graph. Tracing state is caller-supplied
//! (see [`trace`]).
//!
//! # Usage
//!
//! ```ignore
//! let resolver = TypeResolver::new(&store);
//!
//! let ty = resolver.resolve(Some(type_id));
//! if let Some(e) = &ty.enumeration {
//!     for nn in &e.values {
//!         println!("{}({})", nn.name, nn.value);
//!     }
//! }
//!
//! // Through a node, with node-local format/units applied
//! let ty = resolver.resolve_from_node(node_id);
//! ```

pub mod trace;

pub use trace::{NoopTracer, TraceEvent, TraceLevel, Tracer};

use crate::model::{BaseType, Enum, Module, NamedNumber, NodeId, Range, Type, TypeId, Value};
use crate::store::SchemaStore;
use crate::trace_event;
use alloc::vec::Vec;

/// Resolves raw schema records into self-contained [`Type`] values.
pub struct TypeResolver<'a, S: SchemaStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SchemaStore + ?Sized> TypeResolver<'a, S> {
    /// Create a resolver over a loaded store.
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve a type handle into a self-contained [`Type`].
    ///
    /// An absent handle, or a handle the store does not know, yields
    /// `Type::default()` — a defined no-op, not an error.
    #[must_use]
    pub fn resolve(&self, ty: Option<TypeId>) -> Type {
        self.resolve_traced(ty, &mut NoopTracer)
    }

    /// Resolve a type handle, emitting trace events to `tracer`.
    #[must_use]
    pub fn resolve_traced(&self, ty: Option<TypeId>, tracer: &mut dyn Tracer) -> Type {
        let Some(id) = ty else {
            return Type::default();
        };
        let Some(record) = self.store.type_record(id) else {
            trace_event!(tracer, TraceLevel::Warn, TraceEvent::TypeMissing { ty: id });
            return Type::default();
        };

        let mut out = Type {
            id: Some(id),
            // The base type is always the record's own, even when the
            // displayed metadata below comes from the parent.
            base: record.base,
            ..Type::default()
        };

        // An anonymous record inherits displayed metadata from its parent,
        // one hop only. A missing parent leaves the record's own (absent)
        // metadata in place.
        let meta = if record.name.is_none() {
            let parent = self.store.parent_type(id);
            trace_event!(
                tracer,
                TraceLevel::Debug,
                TraceEvent::ParentSubstituted { ty: id, parent }
            );
            parent
                .and_then(|p| self.store.type_record(p))
                .unwrap_or(record)
        } else {
            record
        };

        out.decl = meta.decl;
        out.status = meta.status;
        out.name = meta.name.unwrap_or_default();
        out.description = meta.description.unwrap_or_default();
        out.reference = meta.reference.unwrap_or_default();
        out.format = meta.format.unwrap_or_default();
        out.units = meta.units.unwrap_or_default();

        // Collectors run against the original handle, not the parent: an
        // anonymous refinement's own named numbers and ranges win.
        out.enumeration = self.collect_named_numbers(id, out.base);
        out.ranges = self.collect_ranges(id, out.base);

        trace_event!(
            tracer,
            TraceLevel::Debug,
            TraceEvent::TypeResolved {
                ty: id,
                name: &out.name,
                base: out.base,
                named_numbers: out.enumeration.as_ref().map_or(0, |e| e.values.len()),
                ranges: out.ranges.len(),
            }
        );
        out
    }

    /// Resolve the module that defines `ty`.
    ///
    /// Returns `None` when the store knows no defining module for the
    /// handle.
    #[must_use]
    pub fn resolve_module(&self, ty: TypeId) -> Option<Module> {
        let module = self.store.type_module(ty)?;
        let record = self.store.module_record(module)?;
        Some(Module {
            id: module,
            name: record.name.unwrap_or_default(),
            organization: record.organization.unwrap_or_default(),
            contact_info: record.contact_info.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            reference: record.reference.unwrap_or_default(),
        })
    }

    /// Resolve the type associated with a node.
    ///
    /// Returns `None` when the node has no associated type. Node-local
    /// non-empty format/units strings override the type's; enumeration,
    /// ranges and base type are untouched.
    #[must_use]
    pub fn resolve_from_node(&self, node: NodeId) -> Option<Type> {
        self.resolve_from_node_traced(node, &mut NoopTracer)
    }

    /// Resolve the type associated with a node, emitting trace events to
    /// `tracer`.
    #[must_use]
    pub fn resolve_from_node_traced(
        &self,
        node: NodeId,
        tracer: &mut dyn Tracer,
    ) -> Option<Type> {
        let Some(ty) = self.store.node_type(node) else {
            trace_event!(
                tracer,
                TraceLevel::Debug,
                TraceEvent::NodeTypeMissing { node }
            );
            return None;
        };
        let mut out = self.resolve_traced(Some(ty), tracer);

        if let Some(record) = self.store.node_record(node) {
            let format = record.format.filter(|f| !f.is_empty());
            let units = record.units.filter(|u| !u.is_empty());
            let overrode = (format.is_some(), units.is_some());

            if let Some(format) = format {
                out.format = format;
            }
            if let Some(units) = units {
                out.units = units;
            }
            if overrode.0 || overrode.1 {
                trace_event!(
                    tracer,
                    TraceLevel::Trace,
                    TraceEvent::NodeOverride {
                        node,
                        format: overrode.0,
                        units: overrode.1,
                    }
                );
            }
        }
        Some(out)
    }

    /// Collect an enumeration or bit-set's named numbers.
    ///
    /// `base` must be the type's own base type; anything other than an
    /// enumeration or bit-set collects nothing, as does a type with no
    /// named-number records.
    fn collect_named_numbers(&self, ty: TypeId, base: BaseType) -> Option<Enum> {
        if !base.is_enumerated() {
            return None;
        }

        let mut records = self.store.named_numbers(ty).peekable();
        // The enumeration is tagged with the first value's base type, not
        // the declaring type's: value records are the ground truth for
        // interpretation width.
        let value_base = records.peek()?.value.base;
        let values = records
            .map(|r| NamedNumber::new(r.name, Value::decode(&r.value)))
            .collect();

        Some(Enum {
            base: value_base,
            values,
        })
    }

    /// Collect a type's range records in declaration order.
    ///
    /// Empty, never absent, when the base type is unknown or nothing is
    /// declared. Each range is tagged with its min value's base type.
    fn collect_ranges(&self, ty: TypeId, base: BaseType) -> Vec<Range> {
        if base == BaseType::Unknown {
            return Vec::new();
        }

        self.store
            .ranges(ty)
            .map(|r| Range {
                base: r.min.base,
                min: Value::decode(&r.min),
                max: Value::decode(&r.max),
            })
            .collect()
    }
}
