//! Typed extraction of raw driver values.
//!
//! An [`Extractor`] converts one raw column value into the representation a
//! field stores. The extractor for a field is picked once, when the field
//! descriptor is built, and reused for every row.

use crate::{
    stmt::{Type, Value},
    Error, Result,
};

/// Converts a raw driver value into a field's storage representation.
pub type Extractor = fn(Value) -> Result<Value>;

/// Selects the extractor for a field of type `ty`.
///
/// Nullable extractors map a raw `Null` to `Value::Null` without attempting
/// to decode it. JSON-tagged fields are decoded from bytes or text whatever
/// their declared type.
pub fn select_extractor(ty: &Type, nullable: bool, json: bool) -> Result<Extractor> {
    let nullable = nullable || ty.is_dynamic();

    if json {
        return Ok(match (ty, nullable) {
            (Type::Map, false) => extract_json_map,
            (Type::Map, true) => extract_nullable_json_map,
            (_, false) => extract_json,
            (_, true) => extract_nullable_json,
        });
    }

    Ok(match (ty, nullable) {
        (Type::Bool, false) => extract_bool,
        (Type::Bool, true) => extract_nullable_bool,
        (ty, false) if ty.is_signed() => extract_int,
        (ty, true) if ty.is_signed() => extract_nullable_int,
        (ty, false) if ty.is_unsigned() => extract_uint,
        (ty, true) if ty.is_unsigned() => extract_nullable_uint,
        (ty, false) if ty.is_float() => extract_float,
        (ty, true) if ty.is_float() => extract_nullable_float,
        (Type::String, false) => extract_string,
        (Type::String, true) => extract_nullable_string,
        (Type::Timestamp, false) => extract_timestamp,
        (Type::Timestamp, true) => extract_nullable_timestamp,
        (ty, _) => {
            return Err(Error::invalid_schema(format!(
                "no extractor for type {ty:?} without JSON encoding"
            )))
        }
    })
}

pub fn extract_bool(value: Value) -> Result<Value> {
    match value {
        Value::Bool(_) => Ok(value),
        // SQLite stores booleans as integers
        Value::I64(v @ (0 | 1)) => Ok(Value::Bool(v == 1)),
        _ => Err(Error::type_conversion(value, "bool")),
    }
}

pub fn extract_int(value: Value) -> Result<Value> {
    match value {
        Value::I64(_) => Ok(value),
        Value::U64(v) => match i64::try_from(v) {
            Ok(v) => Ok(Value::I64(v)),
            Err(_) => Err(Error::type_conversion(value, "i64")),
        },
        _ => Err(Error::type_conversion(value, "i64")),
    }
}

pub fn extract_uint(value: Value) -> Result<Value> {
    match value {
        Value::U64(_) => Ok(value),
        Value::I64(v) => match u64::try_from(v) {
            Ok(v) => Ok(Value::U64(v)),
            Err(_) => Err(Error::type_conversion(value, "u64")),
        },
        _ => Err(Error::type_conversion(value, "u64")),
    }
}

pub fn extract_float(value: Value) -> Result<Value> {
    match value {
        Value::F64(_) => Ok(value),
        Value::I64(v) => Ok(Value::F64(v as f64)),
        _ => Err(Error::type_conversion(value, "f64")),
    }
}

/// Text columns arrive either as strings or as raw bytes. Bytes must be
/// valid UTF-8.
pub fn extract_string(value: Value) -> Result<Value> {
    match value {
        Value::String(_) => Ok(value),
        Value::Bytes(bytes) => Ok(Value::String(String::from_utf8(bytes)?)),
        _ => Err(Error::type_conversion(value, "String")),
    }
}

pub fn extract_timestamp(value: Value) -> Result<Value> {
    match value {
        Value::Timestamp(_) => Ok(value),
        Value::String(text) => Ok(Value::Timestamp(text.parse()?)),
        Value::Bytes(bytes) => Ok(Value::Timestamp(std::str::from_utf8(&bytes)?.parse()?)),
        _ => Err(Error::type_conversion(value, "Timestamp")),
    }
}

/// Decodes a JSON document that must be an object.
pub fn extract_json_map(value: Value) -> Result<Value> {
    match extract_json(value)? {
        value @ Value::Json(serde_json::Value::Object(_)) => Ok(value),
        value => Err(Error::type_conversion(value, "JSON map")),
    }
}

/// Decodes any JSON document.
pub fn extract_json(value: Value) -> Result<Value> {
    match value {
        Value::Json(_) => Ok(value),
        Value::Bytes(bytes) => Ok(Value::Json(serde_json::from_slice(&bytes)?)),
        Value::String(text) => Ok(Value::Json(serde_json::from_str(&text)?)),
        _ => Err(Error::type_conversion(value, "JSON")),
    }
}

macro_rules! nullable {
    ($($name:ident => $inner:ident,)*) => {
        $(
            pub fn $name(value: Value) -> Result<Value> {
                if value.is_null() {
                    return Ok(Value::Null);
                }
                $inner(value)
            }
        )*
    };
}

nullable! {
    extract_nullable_bool => extract_bool,
    extract_nullable_int => extract_int,
    extract_nullable_uint => extract_uint,
    extract_nullable_float => extract_float,
    extract_nullable_string => extract_string,
    extract_nullable_timestamp => extract_timestamp,
    extract_nullable_json_map => extract_json_map,
    extract_nullable_json => extract_json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_nullable_rejects_null() {
        let extract = select_extractor(&Type::I32, false, false).unwrap();
        let err = extract(Value::Null).unwrap_err();
        assert!(err.is_type_conversion());
    }

    #[test]
    fn nullable_skips_decode() {
        let extract = select_extractor(&Type::Map, true, true).unwrap();
        assert_eq!(extract(Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn dynamic_is_nullable() {
        let extract = select_extractor(&Type::Any, false, true).unwrap();
        assert_eq!(extract(Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn structured_kinds_require_json() {
        for ty in [Type::Map, Type::Struct, Type::Any] {
            let err = select_extractor(&ty, false, false).unwrap_err();
            assert!(err.is_invalid_schema());
        }
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let err = extract_string(Value::Bytes(vec![0xff, 0xfe])).unwrap_err();
        assert!(!err.is_type_conversion());
    }

    #[test]
    fn json_map_rejects_array() {
        let err = extract_json_map(Value::Bytes(b"[1, 2]".to_vec())).unwrap_err();
        assert!(err.is_type_conversion());
    }

    #[test]
    fn int_out_of_range() {
        assert!(extract_int(Value::U64(u64::MAX)).is_err());
        assert!(extract_uint(Value::I64(-1)).is_err());
    }
}
