//! Type system types for the resolved model.

use super::ids::TypeId;
use super::value::Value;
use alloc::string::String;
use alloc::vec::Vec;

/// SMI base type.
///
/// The closed set of primitive machine representations every declared type
/// ultimately reduces to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseType {
    /// Not classifiable.
    #[default]
    Unknown,
    /// Signed 32-bit integer.
    Integer32,
    /// OCTET STRING.
    OctetString,
    /// OBJECT IDENTIFIER.
    ObjectIdentifier,
    /// Unsigned 32-bit integer.
    Unsigned32,
    /// Signed 64-bit integer.
    Integer64,
    /// Unsigned 64-bit integer.
    Unsigned64,
    /// 32-bit float (SMIng).
    Float32,
    /// 64-bit float (SMIng).
    Float64,
    /// 128-bit float (SMIng).
    Float128,
    /// Enumeration (named numbers over an integer representation).
    Enum,
    /// BITS (bit string with named positions).
    Bits,
    /// Pointer (SMIng).
    Pointer,
}

impl BaseType {
    /// Get a string representation for downstream consumers.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Integer32 => "Integer32",
            Self::OctetString => "OctetString",
            Self::ObjectIdentifier => "ObjectIdentifier",
            Self::Unsigned32 => "Unsigned32",
            Self::Integer64 => "Integer64",
            Self::Unsigned64 => "Unsigned64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Float128 => "Float128",
            Self::Enum => "Enumeration",
            Self::Bits => "Bits",
            Self::Pointer => "Pointer",
        }
    }

    /// Check if the base type carries named numbers (enumeration or bit-set).
    #[must_use]
    pub fn is_enumerated(&self) -> bool {
        matches!(self, Self::Enum | Self::Bits)
    }

    /// Convert to u8 for compact serialization.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Integer32 => 1,
            Self::OctetString => 2,
            Self::ObjectIdentifier => 3,
            Self::Unsigned32 => 4,
            Self::Integer64 => 5,
            Self::Unsigned64 => 6,
            Self::Float32 => 7,
            Self::Float64 => 8,
            Self::Float128 => 9,
            Self::Enum => 10,
            Self::Bits => 11,
            Self::Pointer => 12,
        }
    }

    /// Convert from u8.
    #[must_use]
    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Unknown),
            1 => Some(Self::Integer32),
            2 => Some(Self::OctetString),
            3 => Some(Self::ObjectIdentifier),
            4 => Some(Self::Unsigned32),
            5 => Some(Self::Integer64),
            6 => Some(Self::Unsigned64),
            7 => Some(Self::Float32),
            8 => Some(Self::Float64),
            9 => Some(Self::Float128),
            10 => Some(Self::Enum),
            11 => Some(Self::Bits),
            12 => Some(Self::Pointer),
            _ => None,
        }
    }
}

/// Declaration kind of a definition.
///
/// Carried opaquely from the schema record; the resolver stores it without
/// interpreting it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decl {
    /// Not recorded.
    #[default]
    Unknown,
    /// Implicitly declared type (inline refinement).
    ImplicitType,
    /// Plain ASN.1 type assignment.
    TypeAssignment,
    /// Value assignment.
    ValueAssignment,
    /// OBJECT-TYPE.
    ObjectType,
    /// OBJECT-IDENTITY.
    ObjectIdentity,
    /// MODULE-IDENTITY.
    ModuleIdentity,
    /// NOTIFICATION-TYPE.
    NotificationType,
    /// TRAP-TYPE (SMIv1).
    TrapType,
    /// OBJECT-GROUP.
    ObjectGroup,
    /// NOTIFICATION-GROUP.
    NotificationGroup,
    /// MODULE-COMPLIANCE.
    ModuleCompliance,
    /// AGENT-CAPABILITIES.
    AgentCapabilities,
    /// TEXTUAL-CONVENTION.
    TextualConvention,
    /// MACRO definition.
    Macro,
}

impl Decl {
    /// Get a string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::ImplicitType => "implicit-type",
            Self::TypeAssignment => "type-assignment",
            Self::ValueAssignment => "value-assignment",
            Self::ObjectType => "OBJECT-TYPE",
            Self::ObjectIdentity => "OBJECT-IDENTITY",
            Self::ModuleIdentity => "MODULE-IDENTITY",
            Self::NotificationType => "NOTIFICATION-TYPE",
            Self::TrapType => "TRAP-TYPE",
            Self::ObjectGroup => "OBJECT-GROUP",
            Self::NotificationGroup => "NOTIFICATION-GROUP",
            Self::ModuleCompliance => "MODULE-COMPLIANCE",
            Self::AgentCapabilities => "AGENT-CAPABILITIES",
            Self::TextualConvention => "TEXTUAL-CONVENTION",
            Self::Macro => "MACRO",
        }
    }

    /// Check if this declares a reusable type (as opposed to an object).
    #[must_use]
    pub fn is_type_definition(&self) -> bool {
        matches!(
            self,
            Self::ImplicitType | Self::TypeAssignment | Self::TextualConvention
        )
    }

    /// Convert to u8 for compact serialization.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::ImplicitType => 1,
            Self::TypeAssignment => 2,
            Self::ValueAssignment => 3,
            Self::ObjectType => 4,
            Self::ObjectIdentity => 5,
            Self::ModuleIdentity => 6,
            Self::NotificationType => 7,
            Self::TrapType => 8,
            Self::ObjectGroup => 9,
            Self::NotificationGroup => 10,
            Self::ModuleCompliance => 11,
            Self::AgentCapabilities => 12,
            Self::TextualConvention => 13,
            Self::Macro => 14,
        }
    }

    /// Convert from u8.
    #[must_use]
    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Unknown),
            1 => Some(Self::ImplicitType),
            2 => Some(Self::TypeAssignment),
            3 => Some(Self::ValueAssignment),
            4 => Some(Self::ObjectType),
            5 => Some(Self::ObjectIdentity),
            6 => Some(Self::ModuleIdentity),
            7 => Some(Self::NotificationType),
            8 => Some(Self::TrapType),
            9 => Some(Self::ObjectGroup),
            10 => Some(Self::NotificationGroup),
            11 => Some(Self::ModuleCompliance),
            12 => Some(Self::AgentCapabilities),
            13 => Some(Self::TextualConvention),
            14 => Some(Self::Macro),
            _ => None,
        }
    }
}

/// Status of a definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Not recorded.
    #[default]
    Unknown,
    /// Currently in use.
    Current,
    /// Being phased out.
    Deprecated,
    /// Mandatory (SMIv1).
    Mandatory,
    /// Optional (SMIv1).
    Optional,
    /// No longer in use.
    Obsolete,
}

impl Status {
    /// Get a string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Current => "current",
            Self::Deprecated => "deprecated",
            Self::Mandatory => "mandatory",
            Self::Optional => "optional",
            Self::Obsolete => "obsolete",
        }
    }

    /// Convert to u8 for compact serialization.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Current => 1,
            Self::Deprecated => 2,
            Self::Mandatory => 3,
            Self::Optional => 4,
            Self::Obsolete => 5,
        }
    }

    /// Convert from u8.
    #[must_use]
    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Unknown),
            1 => Some(Self::Current),
            2 => Some(Self::Deprecated),
            3 => Some(Self::Mandatory),
            4 => Some(Self::Optional),
            5 => Some(Self::Obsolete),
            _ => None,
        }
    }
}

/// One symbolic constant of an enumeration or bit-set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedNumber {
    /// Constant name.
    pub name: String,
    /// Decoded constant value.
    pub value: Value,
}

impl NamedNumber {
    /// Create a new named number.
    #[must_use]
    pub fn new(name: String, value: Value) -> Self {
        Self { name, value }
    }
}

/// Named numbers of an enumeration or bit-set type.
///
/// `values` keeps the schema's declaration order; that order is meaningful
/// for display and must not be sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enum {
    /// Base type of the member values.
    pub base: BaseType,
    /// Named numbers in declaration order.
    pub values: Vec<NamedNumber>,
}

impl Enum {
    /// Get the name bound to a value.
    #[must_use]
    pub fn label_for(&self, value: Value) -> Option<&str> {
        self.values
            .iter()
            .find(|n| n.value == value)
            .map(|n| n.name.as_str())
    }

    /// Get the value bound to a name.
    #[must_use]
    pub fn value_for(&self, label: &str) -> Option<Value> {
        self.values.iter().find(|n| n.name == label).map(|n| n.value)
    }
}

/// One permitted interval of a numeric type.
///
/// A type may carry several disjoint ranges; the sequence on [`Type`] keeps
/// declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Base type of the bound values.
    pub base: BaseType,
    /// Lower bound, inclusive.
    pub min: Value,
    /// Upper bound, inclusive.
    pub max: Value,
}

impl Range {
    /// Check whether a decoded value falls within the bounds.
    ///
    /// Undecoded bounds or an undecoded probe always fail the test.
    #[must_use]
    pub fn contains(&self, value: Value) -> bool {
        match (value.as_i128(), self.min.as_i128(), self.max.as_i128()) {
            (Some(v), Some(min), Some(max)) => min <= v && v <= max,
            _ => false,
        }
    }
}

/// A resolved type.
///
/// Self-contained: owns its metadata strings and collections. The only tie
/// back to the schema graph is `id`, kept so the defining module can be
/// looked up lazily. `Type::default()` is the result of resolving an absent
/// handle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Type {
    /// Handle of the originating record, if any.
    pub id: Option<TypeId>,
    /// Underlying primitive type. Always the record's own, never inherited.
    pub base: BaseType,
    /// Declaration kind.
    pub decl: Decl,
    /// Definition status.
    pub status: Status,
    /// Type name (the parent's for anonymous refinements).
    pub name: String,
    /// Description text.
    pub description: String,
    /// REFERENCE text.
    pub reference: String,
    /// Display hint.
    pub format: String,
    /// UNITS text.
    pub units: String,
    /// Named numbers, for enumeration and bit-set types that declare any.
    pub enumeration: Option<Enum>,
    /// Permitted intervals in declaration order; empty when none declared.
    pub ranges: Vec<Range>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_base_type_as_str() {
        assert_eq!(BaseType::Integer32.as_str(), "Integer32");
        assert_eq!(BaseType::Enum.as_str(), "Enumeration");
        assert_eq!(BaseType::OctetString.as_str(), "OctetString");
    }

    #[test]
    fn test_base_type_is_enumerated() {
        assert!(BaseType::Enum.is_enumerated());
        assert!(BaseType::Bits.is_enumerated());
        assert!(!BaseType::Integer32.is_enumerated());
        assert!(!BaseType::Unknown.is_enumerated());
    }

    #[test]
    fn test_base_type_as_u8_round_trip() {
        for i in 0..13u8 {
            let base = BaseType::from_u8(i).unwrap();
            assert_eq!(base.as_u8(), i, "Round-trip failed for value {}", i);
        }
        assert!(BaseType::from_u8(13).is_none());
        assert!(BaseType::from_u8(255).is_none());
    }

    #[test]
    fn test_decl_as_u8_round_trip() {
        for i in 0..15u8 {
            let decl = Decl::from_u8(i).unwrap();
            assert_eq!(decl.as_u8(), i, "Round-trip failed for value {}", i);
        }
        assert!(Decl::from_u8(15).is_none());
    }

    #[test]
    fn test_decl_is_type_definition() {
        assert!(Decl::TextualConvention.is_type_definition());
        assert!(Decl::TypeAssignment.is_type_definition());
        assert!(!Decl::ObjectType.is_type_definition());
    }

    #[test]
    fn test_decl_and_status_as_str() {
        assert_eq!(Decl::TextualConvention.as_str(), "TEXTUAL-CONVENTION");
        assert_eq!(Decl::TypeAssignment.as_str(), "type-assignment");
        assert_eq!(Status::Current.as_str(), "current");
        assert_eq!(Status::Deprecated.as_str(), "deprecated");
    }

    #[test]
    fn test_status_as_u8_round_trip() {
        for i in 0..6u8 {
            let status = Status::from_u8(i).unwrap();
            assert_eq!(status.as_u8(), i, "Round-trip failed for value {}", i);
        }
        assert!(Status::from_u8(6).is_none());
    }

    #[test]
    fn test_enum_lookups() {
        let e = Enum {
            base: BaseType::Integer32,
            values: vec![
                NamedNumber::new("up".into(), Value::Integer32(1)),
                NamedNumber::new("down".into(), Value::Integer32(2)),
            ],
        };
        assert_eq!(e.label_for(Value::Integer32(2)), Some("down"));
        assert_eq!(e.value_for("up"), Some(Value::Integer32(1)));
        assert_eq!(e.label_for(Value::Integer32(3)), None);
        assert_eq!(e.value_for("testing"), None);
    }

    #[test]
    fn test_range_contains() {
        let r = Range {
            base: BaseType::Integer32,
            min: Value::Integer32(1),
            max: Value::Integer32(10),
        };
        assert!(r.contains(Value::Integer32(1)));
        assert!(r.contains(Value::Unsigned32(10)));
        assert!(!r.contains(Value::Integer32(0)));
        assert!(!r.contains(Value::Undecoded));
    }

    #[test]
    fn test_type_default() {
        let t = Type::default();
        assert_eq!(t.id, None);
        assert_eq!(t.base, BaseType::Unknown);
        assert_eq!(t.decl, Decl::Unknown);
        assert_eq!(t.status, Status::Unknown);
        assert!(t.name.is_empty());
        assert!(t.enumeration.is_none());
        assert!(t.ranges.is_empty());
    }
}
