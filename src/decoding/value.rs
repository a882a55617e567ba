//! Typed output of the field decoder.

use alloy_primitives::{I256, U256};

use super::error::DecodeError;

/// A value produced by a [`Parser`](super::parser::Parser).
///
/// Records keep their fields in consumption order, which is the order of the
/// declared indices rather than the order the schema listed them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    Uint8(u8),
    Uint16(u16),
    Uint64(u64),
    Uint128(u128),
    Uint256(U256),
    /// Sign-magnitude 129-bit integer, widened to 256 bits.
    Int129(I256),
    /// Field element: addresses, ids and hashes.
    Felt(U256),
    Bool(bool),
    /// Named record of (field_name, field_value) pairs
    Record(Vec<(String, DecodedValue)>),
    /// Array of values
    Array(Vec<DecodedValue>),
}

impl DecodedValue {
    /// Try to get as u8.
    pub fn as_u8(&self) -> Option<u8> {
        match self {
            DecodedValue::Uint8(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u16, widening u8.
    pub fn as_u16(&self) -> Option<u16> {
        match self {
            DecodedValue::Uint16(v) => Some(*v),
            DecodedValue::Uint8(v) => Some(*v as u16),
            _ => None,
        }
    }

    /// Try to get as u64, widening the smaller unsigned widths.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            DecodedValue::Uint64(v) => Some(*v),
            DecodedValue::Uint16(v) => Some(*v as u64),
            DecodedValue::Uint8(v) => Some(*v as u64),
            _ => None,
        }
    }

    /// Try to get as u128.
    pub fn as_u128(&self) -> Option<u128> {
        match self {
            DecodedValue::Uint128(v) => Some(*v),
            DecodedValue::Uint64(v) => Some(*v as u128),
            DecodedValue::Uint16(v) => Some(*v as u128),
            DecodedValue::Uint8(v) => Some(*v as u128),
            _ => None,
        }
    }

    /// Try to get as U256. Field elements are accepted as well.
    pub fn as_uint256(&self) -> Option<U256> {
        match self {
            DecodedValue::Uint256(v) | DecodedValue::Felt(v) => Some(*v),
            DecodedValue::Uint128(v) => Some(U256::from(*v)),
            DecodedValue::Uint64(v) => Some(U256::from(*v)),
            DecodedValue::Uint16(v) => Some(U256::from(*v)),
            DecodedValue::Uint8(v) => Some(U256::from(*v)),
            _ => None,
        }
    }

    /// Try to get as a field element.
    pub fn as_felt(&self) -> Option<U256> {
        match self {
            DecodedValue::Felt(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DecodedValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as an array of values.
    pub fn as_array(&self) -> Option<&[DecodedValue]> {
        match self {
            DecodedValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get a field from a record.
    pub fn get_field(&self, name: &str) -> Option<&DecodedValue> {
        match self {
            DecodedValue::Record(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Get a record field, returning an error if missing.
    pub fn get(&self, name: &str) -> Result<&DecodedValue, DecodeError> {
        self.get_field(name)
            .ok_or_else(|| DecodeError::MissingField(name.to_string()))
    }

    pub fn get_u8(&self, name: &str) -> Result<u8, DecodeError> {
        self.get(name)?
            .as_u8()
            .ok_or_else(|| DecodeError::type_mismatch(name, "u8"))
    }

    pub fn get_u16(&self, name: &str) -> Result<u16, DecodeError> {
        self.get(name)?
            .as_u16()
            .ok_or_else(|| DecodeError::type_mismatch(name, "u16"))
    }

    pub fn get_u64(&self, name: &str) -> Result<u64, DecodeError> {
        self.get(name)?
            .as_u64()
            .ok_or_else(|| DecodeError::type_mismatch(name, "u64"))
    }

    pub fn get_u128(&self, name: &str) -> Result<u128, DecodeError> {
        self.get(name)?
            .as_u128()
            .ok_or_else(|| DecodeError::type_mismatch(name, "u128"))
    }

    pub fn get_uint256(&self, name: &str) -> Result<U256, DecodeError> {
        self.get(name)?
            .as_uint256()
            .ok_or_else(|| DecodeError::type_mismatch(name, "u256"))
    }

    pub fn get_felt(&self, name: &str) -> Result<U256, DecodeError> {
        self.get(name)?
            .as_felt()
            .ok_or_else(|| DecodeError::type_mismatch(name, "felt252"))
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, DecodeError> {
        self.get(name)?
            .as_bool()
            .ok_or_else(|| DecodeError::type_mismatch(name, "bool"))
    }

    pub fn get_array(&self, name: &str) -> Result<&[DecodedValue], DecodeError> {
        self.get(name)?
            .as_array()
            .ok_or_else(|| DecodeError::type_mismatch(name, "array"))
    }

}
