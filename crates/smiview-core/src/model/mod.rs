//! Resolved type model.
//!
//! These are the values the resolver hands back: each one is freshly
//! allocated, owns its strings, and keeps no reference into the schema
//! record graph beyond the opaque handle ids.

mod ids;
mod module;
mod types;
mod value;

pub use ids::{ModuleId, NodeId, TypeId};
pub use module::Module;
pub use types::{BaseType, Decl, Enum, NamedNumber, Range, Status, Type};
pub use value::{RawValue, Value};
