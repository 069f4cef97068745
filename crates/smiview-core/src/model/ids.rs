//! Opaque handle ids for schema records.
//!
//! Handles are minted by the store that owns the record graph; the resolver
//! never inspects them. Using `NonZeroU32` enables `Option<T>` niche
//! optimization (no extra space).

use core::num::NonZeroU32;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(NonZeroU32);

        impl $name {
            /// Create from a raw value (1-based).
            #[must_use]
            pub const fn from_raw(raw: u32) -> Option<Self> {
                match NonZeroU32::new(raw) {
                    Some(n) => Some(Self(n)),
                    None => None,
                }
            }

            /// Create from a 0-based index.
            #[must_use]
            pub fn from_index(index: usize) -> Option<Self> {
                let raw = u32::try_from(index.checked_add(1)?).ok()?;
                Self::from_raw(raw)
            }

            /// Get the raw value (1-based).
            #[must_use]
            pub const fn to_raw(self) -> u32 {
                self.0.get()
            }

            /// Get the 0-based index.
            #[must_use]
            pub const fn to_index(self) -> usize {
                (self.0.get() - 1) as usize
            }
        }
    };
}

define_id!(
    /// Type record identifier.
    TypeId
);

define_id!(
    /// Node record identifier.
    NodeId
);

define_id!(
    /// Module record identifier.
    ModuleId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_zero() {
        assert!(TypeId::from_raw(0).is_none());
    }

    #[test]
    fn test_from_raw_nonzero() {
        let id = TypeId::from_raw(1).unwrap();
        assert_eq!(id.to_raw(), 1);
        assert_eq!(id.to_index(), 0);
    }

    #[test]
    fn test_from_index() {
        let id = NodeId::from_index(0).unwrap();
        assert_eq!(id.to_raw(), 1);

        let id = NodeId::from_index(41).unwrap();
        assert_eq!(id.to_raw(), 42);
        assert_eq!(id.to_index(), 41);
    }

    #[test]
    fn test_from_index_overflow() {
        assert!(ModuleId::from_index(u32::MAX as usize).is_none());
    }

    #[test]
    fn test_option_size() {
        // Option<TypeId> should be the same size as TypeId due to niche optimization
        assert_eq!(
            core::mem::size_of::<Option<TypeId>>(),
            core::mem::size_of::<TypeId>()
        );
    }
}
