//! Composable parsers over a flat wire value sequence.
//!
//! Every parser takes the sequence and a cursor and returns the decoded value
//! together with the cursor just past what it consumed. Small integers are one
//! scalar each regardless of their logical width; `u256` and `i129` take two.

use std::str::FromStr;

use alloy_primitives::{I256, U256};

use super::error::DecodeError;
use super::value::DecodedValue;

/// Exclusive upper bound for a Starknet field element.
const FELT_BOUND_BITS: usize = 252;

/// Read the raw scalar at `cursor`.
pub fn read_scalar(data: &[String], cursor: usize) -> Result<U256, DecodeError> {
    let raw = data.get(cursor).ok_or(DecodeError::OutOfBounds {
        cursor,
        len: data.len(),
    })?;
    U256::from_str(raw.trim()).map_err(|_| DecodeError::InvalidScalar {
        cursor,
        value: raw.clone(),
    })
}

fn narrow<T>(data: &[String], cursor: usize, width: &'static str) -> Result<(T, usize), DecodeError>
where
    T: TryFrom<U256>,
{
    let scalar = read_scalar(data, cursor)?;
    let value = T::try_from(scalar).map_err(|_| DecodeError::OutOfRange {
        cursor,
        value: scalar.to_string(),
        width,
    })?;
    Ok((value, cursor + 1))
}

pub fn parse_u8(data: &[String], cursor: usize) -> Result<(u8, usize), DecodeError> {
    narrow(data, cursor, "u8")
}

pub fn parse_u16(data: &[String], cursor: usize) -> Result<(u16, usize), DecodeError> {
    narrow(data, cursor, "u16")
}

pub fn parse_u64(data: &[String], cursor: usize) -> Result<(u64, usize), DecodeError> {
    narrow(data, cursor, "u64")
}

pub fn parse_u128(data: &[String], cursor: usize) -> Result<(u128, usize), DecodeError> {
    narrow(data, cursor, "u128")
}

/// `low, high` limbs, value `low + high * 2^128`.
pub fn parse_u256(data: &[String], cursor: usize) -> Result<(U256, usize), DecodeError> {
    let (low, next) = parse_u128(data, cursor)?;
    let (high, next) = parse_u128(data, next)?;
    Ok((U256::from(low) | (U256::from(high) << 128), next))
}

/// `magnitude, sign`; any non-zero sign scalar negates the magnitude.
pub fn parse_i129(data: &[String], cursor: usize) -> Result<(I256, usize), DecodeError> {
    let (magnitude, next) = parse_u128(data, cursor)?;
    let sign = read_scalar(data, next)?;
    let value = I256::from_raw(U256::from(magnitude));
    let value = if sign.is_zero() { value } else { -value };
    Ok((value, next + 1))
}

pub fn parse_felt252(data: &[String], cursor: usize) -> Result<(U256, usize), DecodeError> {
    let scalar = read_scalar(data, cursor)?;
    if scalar.bit_len() > FELT_BOUND_BITS {
        return Err(DecodeError::OutOfRange {
            cursor,
            value: scalar.to_string(),
            width: "felt252",
        });
    }
    Ok((scalar, cursor + 1))
}

pub fn parse_bool(data: &[String], cursor: usize) -> Result<(bool, usize), DecodeError> {
    let scalar = read_scalar(data, cursor)?;
    if scalar == U256::ZERO {
        Ok((false, cursor + 1))
    } else if scalar == U256::from(1u8) {
        Ok((true, cursor + 1))
    } else {
        Err(DecodeError::InvalidBoolean {
            cursor,
            value: scalar.to_string(),
        })
    }
}

/// A field of a record parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    pub name: String,
    /// Declaration index; fields are consumed in ascending index order.
    pub index: usize,
    pub parser: Parser,
}

/// Parser composition describing the wire layout of a chain type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parser {
    U8,
    U16,
    U64,
    U128,
    U256,
    I129,
    Felt252,
    Bool,
    /// Fields sorted by declaration index
    Record(Vec<RecordField>),
    /// Length-prefixed sequence of elements
    Array(Box<Parser>),
}

impl Parser {
    /// Build a record parser from `(name, index, parser)` triples.
    ///
    /// The order of the triples does not matter; only `index` decides the
    /// consumption order. Indices must be unique.
    pub fn record<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, usize, Parser)>,
        S: Into<String>,
    {
        let mut fields: Vec<RecordField> = fields
            .into_iter()
            .map(|(name, index, parser)| RecordField {
                name: name.into(),
                index,
                parser,
            })
            .collect();
        fields.sort_by_key(|f| f.index);
        debug_assert!(
            fields.windows(2).all(|w| w[0].index != w[1].index),
            "duplicate field index in record parser"
        );
        Parser::Record(fields)
    }

    /// Build an array parser over `element`.
    pub fn array(element: Parser) -> Self {
        Parser::Array(Box::new(element))
    }

    /// Smallest number of scalars a value of this shape can occupy.
    pub fn min_width(&self) -> usize {
        match self {
            Parser::U8
            | Parser::U16
            | Parser::U64
            | Parser::U128
            | Parser::Felt252
            | Parser::Bool
            | Parser::Array(_) => 1,
            Parser::U256 | Parser::I129 => 2,
            Parser::Record(fields) => fields.iter().map(|f| f.parser.min_width()).sum(),
        }
    }

    /// Decode one value starting at `cursor`.
    pub fn parse(&self, data: &[String], cursor: usize) -> Result<(DecodedValue, usize), DecodeError> {
        match self {
            Parser::U8 => parse_u8(data, cursor).map(|(v, n)| (DecodedValue::Uint8(v), n)),
            Parser::U16 => parse_u16(data, cursor).map(|(v, n)| (DecodedValue::Uint16(v), n)),
            Parser::U64 => parse_u64(data, cursor).map(|(v, n)| (DecodedValue::Uint64(v), n)),
            Parser::U128 => parse_u128(data, cursor).map(|(v, n)| (DecodedValue::Uint128(v), n)),
            Parser::U256 => parse_u256(data, cursor).map(|(v, n)| (DecodedValue::Uint256(v), n)),
            Parser::I129 => parse_i129(data, cursor).map(|(v, n)| (DecodedValue::Int129(v), n)),
            Parser::Felt252 => {
                parse_felt252(data, cursor).map(|(v, n)| (DecodedValue::Felt(v), n))
            }
            Parser::Bool => parse_bool(data, cursor).map(|(v, n)| (DecodedValue::Bool(v), n)),
            Parser::Record(fields) => {
                let mut next = cursor;
                let mut values = Vec::with_capacity(fields.len());
                for field in fields {
                    let (value, after) = field.parser.parse(data, next)?;
                    values.push((field.name.clone(), value));
                    next = after;
                }
                Ok((DecodedValue::Record(values), next))
            }
            Parser::Array(element) => {
                let count = read_scalar(data, cursor)?;
                let remaining = data.len().saturating_sub(cursor + 1);
                let invalid_length = || DecodeError::InvalidLength {
                    cursor,
                    len: count.to_string(),
                    remaining,
                };
                let len = u64::try_from(count)
                    .ok()
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or_else(invalid_length)?;
                if len.saturating_mul(element.min_width()) > remaining {
                    return Err(invalid_length());
                }

                let mut next = cursor + 1;
                let mut items = Vec::with_capacity(len.min(remaining));
                for _ in 0..len {
                    let (item, after) = element.parse(data, next)?;
                    items.push(item);
                    next = after;
                }
                Ok((DecodedValue::Array(items), next))
            }
        }
    }

    /// Decode a whole event payload from cursor 0.
    ///
    /// Trailing scalars are left unread so that fields appended by a newer
    /// contract version do not break older layouts.
    pub fn decode(&self, data: &[String]) -> Result<DecodedValue, DecodeError> {
        let (value, consumed) = self.parse(data, 0)?;
        if consumed < data.len() {
            tracing::debug!(
                "Payload has {} trailing scalar(s) after {} consumed",
                data.len() - consumed,
                consumed
            );
        }
        Ok(value)
    }
}
