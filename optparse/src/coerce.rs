//! Per-kind conversion of the raw `=value` text into a typed [`Value`].
//!
//! `raw` is `None` when the option appeared without `=`, and `Some("")` when
//! it appeared as `name=`.

use std::num::IntErrorKind;

use crate::error::{Error, Result};
use crate::value::{Kind, Value};

const INT_EXPECTED: &str = "an integer value";
const UINT_EXPECTED: &str = "a non-negative integer value";

pub(crate) fn coerce(kind: Kind, raw: Option<&str>) -> Result<Value> {
    match kind {
        Kind::Bool => coerce_bool(raw),
        Kind::Int64 => coerce_int(raw),
        Kind::Uint64 => coerce_uint(raw),
        Kind::Str => coerce_str(raw),
    }
}

fn coerce_bool(raw: Option<&str>) -> Result<Value> {
    match raw {
        Some(_) => Err(Error::UnwantedValue),
        None => Ok(Value::Bool(true)),
    }
}

fn coerce_int(raw: Option<&str>) -> Result<Value> {
    let text = raw.ok_or(Error::MissingValue(INT_EXPECTED))?;
    text.parse::<i64>()
        .map(Value::Int64)
        .map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::OutOfRange("int"),
            _ => Error::BadNumber(INT_EXPECTED),
        })
}

fn coerce_uint(raw: Option<&str>) -> Result<Value> {
    let text = raw.ok_or(Error::MissingValue(UINT_EXPECTED))?;
    // `u64::from_str` takes a leading '+'; only bare digits are accepted here.
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::BadNumber(UINT_EXPECTED));
    }
    text.parse::<u64>()
        .map(Value::Uint64)
        .map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => Error::OutOfRange("unsigned integer"),
            _ => Error::BadNumber(UINT_EXPECTED),
        })
}

fn coerce_str(raw: Option<&str>) -> Result<Value> {
    raw.map(|s| Value::Str(s.to_string()))
        .ok_or(Error::MissingValue("a value"))
}
