//! Raw tagged values and their canonical decoding.

use super::types::BaseType;
use core::fmt;

/// A raw tagged value as stored by the schema loader.
///
/// The buffer is a fixed little-endian scratch area: 32-bit values occupy
/// the low 4 bytes, 64-bit values all 8. Keeping the width fixed makes the
/// decode below total — there is no short-buffer case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawValue {
    /// Base type tag of the value.
    pub base: BaseType,
    /// Little-endian value bytes.
    pub bytes: [u8; 8],
}

impl RawValue {
    /// Create a raw signed 32-bit value.
    #[must_use]
    pub fn int32(v: i32) -> Self {
        Self::low32(BaseType::Integer32, v as u32)
    }

    /// Create a raw unsigned 32-bit value.
    #[must_use]
    pub fn uint32(v: u32) -> Self {
        Self::low32(BaseType::Unsigned32, v)
    }

    /// Create a raw signed 64-bit value.
    #[must_use]
    pub fn int64(v: i64) -> Self {
        Self {
            base: BaseType::Integer64,
            bytes: (v as u64).to_le_bytes(),
        }
    }

    /// Create a raw unsigned 64-bit value.
    #[must_use]
    pub fn uint64(v: u64) -> Self {
        Self {
            base: BaseType::Unsigned64,
            bytes: v.to_le_bytes(),
        }
    }

    fn low32(base: BaseType, v: u32) -> Self {
        let mut bytes = [0u8; 8];
        bytes[..4].copy_from_slice(&v.to_le_bytes());
        Self { base, bytes }
    }

    /// Low 4 bytes as a little-endian unsigned 32-bit pattern.
    fn u32_le(&self) -> u32 {
        u32::from_le_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]])
    }

    /// All 8 bytes as a little-endian unsigned 64-bit pattern.
    fn u64_le(&self) -> u64 {
        u64::from_le_bytes(self.bytes)
    }
}

/// A decoded scalar value.
///
/// The bit-width and signedness are fully determined by the raw value's base
/// type; base types outside the four fixed-width integer kinds decode to
/// [`Value::Undecoded`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Signed 32-bit integer.
    Integer32(i32),
    /// Unsigned 32-bit integer.
    Unsigned32(u32),
    /// Signed 64-bit integer.
    Integer64(i64),
    /// Unsigned 64-bit integer.
    Unsigned64(u64),
    /// No numeric interpretation for the value's base type.
    #[default]
    Undecoded,
}

impl Value {
    /// Decode a raw value according to its base type tag.
    ///
    /// Integer kinds are read little-endian from the low bytes of the
    /// buffer; signed kinds reinterpret the unsigned bit pattern as two's
    /// complement.
    #[must_use]
    pub fn decode(raw: &RawValue) -> Self {
        match raw.base {
            BaseType::Integer32 => Self::Integer32(raw.u32_le() as i32),
            BaseType::Unsigned32 => Self::Unsigned32(raw.u32_le()),
            BaseType::Integer64 => Self::Integer64(raw.u64_le() as i64),
            BaseType::Unsigned64 => Self::Unsigned64(raw.u64_le()),
            _ => Self::Undecoded,
        }
    }

    /// Get the value as i128 for comparison purposes.
    ///
    /// Returns `None` for [`Value::Undecoded`].
    #[must_use]
    pub fn as_i128(self) -> Option<i128> {
        match self {
            Self::Integer32(v) => Some(i128::from(v)),
            Self::Unsigned32(v) => Some(i128::from(v)),
            Self::Integer64(v) => Some(i128::from(v)),
            Self::Unsigned64(v) => Some(i128::from(v)),
            Self::Undecoded => None,
        }
    }

    /// Check whether the value carries a decoded integer.
    #[must_use]
    pub fn is_decoded(self) -> bool {
        !matches!(self, Self::Undecoded)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer32(v) => write!(f, "{}", v),
            Self::Unsigned32(v) => write!(f, "{}", v),
            Self::Integer64(v) => write!(f, "{}", v),
            Self::Unsigned64(v) => write!(f, "{}", v),
            Self::Undecoded => Ok(()),
        }
    }
}
