//! Resolution tracing support.
//!
//! Structured trace events for debugging resolution against a loaded store.
//! The tracer is caller-supplied, so a resolver stays read-only and shared.

use crate::model::{BaseType, NodeId, TypeId};

/// Trace verbosity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TraceLevel {
    /// Critical errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Informational messages.
    Info,
    /// Detailed debugging (individual resolutions, decisions).
    Debug,
    /// Verbose tracing (every operation).
    Trace,
}

/// Structured trace events emitted during resolution.
#[derive(Clone, Debug)]
pub enum TraceEvent<'a> {
    /// No record exists for a type handle.
    TypeMissing {
        /// The handle that failed to resolve.
        ty: TypeId,
    },
    /// An anonymous type read its displayed metadata from its parent.
    ParentSubstituted {
        /// The anonymous type.
        ty: TypeId,
        /// The parent the metadata came from, if the store knew one.
        parent: Option<TypeId>,
    },
    /// A type finished resolving.
    TypeResolved {
        /// The resolved handle.
        ty: TypeId,
        /// Resolved type name (possibly inherited).
        name: &'a str,
        /// The type's own base type.
        base: BaseType,
        /// Number of named numbers collected.
        named_numbers: usize,
        /// Number of ranges collected.
        ranges: usize,
    },
    /// A node has no associated type.
    NodeTypeMissing {
        /// The node in question.
        node: NodeId,
    },
    /// Node-local presentation metadata overrode the type's.
    NodeOverride {
        /// The node supplying the override.
        node: NodeId,
        /// Whether the display hint was overridden.
        format: bool,
        /// Whether the units string was overridden.
        units: bool,
    },
}

/// Trait for receiving trace events during resolution.
///
/// Implement this to capture resolution diagnostics. The tracer filters
/// events by returning a minimum trace level from `level()`.
pub trait Tracer {
    /// Returns the minimum trace level to emit.
    ///
    /// Events below this level will not be passed to `trace()`.
    /// Default: `TraceLevel::Info`.
    fn level(&self) -> TraceLevel {
        TraceLevel::Info
    }

    /// Called for each trace event at or above the configured level.
    fn trace(&mut self, level: TraceLevel, event: TraceEvent<'_>);
}

/// A no-op tracer that discards all events.
///
/// Used as the default when tracing is not needed.
#[derive(Default, Clone, Copy, Debug)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn level(&self) -> TraceLevel {
        // Lowest level, so event construction is skipped entirely
        TraceLevel::Error
    }

    fn trace(&mut self, _level: TraceLevel, _event: TraceEvent<'_>) {
        // Intentionally empty
    }
}

/// Emit a trace event if the tracer level permits.
///
/// Checks the tracer's level before constructing the event, enabling
/// zero-cost tracing when the level is too low.
#[macro_export]
macro_rules! trace_event {
    ($tracer:expr, $level:expr, $event:expr) => {
        if $level <= $tracer.level() {
            $tracer.trace($level, $event);
        }
    };
}
