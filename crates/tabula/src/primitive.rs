use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tabula_core::{
    stmt::{Type, Value},
    Result,
};

/// A Rust type that can be stored in a column.
pub trait Primitive: Serialize + DeserializeOwned {
    /// Declared type of the column
    const TYPE: Type;

    /// True for `Option<T>`
    const NULLABLE: bool = false;

    /// Converts the field into a statement argument.
    fn to_value(&self) -> Result<Value>;

    /// Converts an extracted value back into the field type.
    fn load(value: Value) -> Result<Self>;

    /// Encodes the field as a JSON document, for fields declared `json`.
    /// A JSON `null` binds as SQL `NULL`.
    fn to_json(&self) -> Result<Value> {
        match serde_json::to_value(self)? {
            serde_json::Value::Null => Ok(Value::Null),
            json => Ok(Value::Bytes(serde_json::to_vec(&json)?)),
        }
    }

    /// Decodes a JSON document, raw or already extracted, into the field type.
    fn from_json(value: Value) -> Result<Self> {
        let json = match value {
            Value::Bytes(bytes) => serde_json::from_slice(&bytes)?,
            value => value.into_json()?,
        };
        Ok(serde_json::from_value(json)?)
    }
}

/// Stores any serializable value as a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json<T>(pub T);

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident,)*) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn to_value(&self) -> Result<Value> {
                    Ok(Value::from(self.clone()))
                }

                fn load(value: Value) -> Result<Self> {
                    <$ty>::try_from(value)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    jiff::Timestamp => Timestamp,
}

// Map, struct and dynamic types only register as `json` fields, so their
// plain conversion is the JSON one.
macro_rules! impl_json_primitive {
    ($(impl$(<$param:ident>)? for $ty:ty => $variant:ident;)*) => {
        $(
            impl$(<$param: Serialize + DeserializeOwned>)? Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn to_value(&self) -> Result<Value> {
                    self.to_json()
                }

                fn load(value: Value) -> Result<Self> {
                    Self::from_json(value)
                }
            }
        )*
    };
}

impl_json_primitive! {
    impl for serde_json::Value => Any;
    impl for serde_json::Map<String, serde_json::Value> => Map;
    impl<V> for HashMap<String, V> => Map;
    impl<V> for BTreeMap<String, V> => Map;
    impl<T> for Json<T> => Struct;
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn to_value(&self) -> Result<Value> {
        match self {
            Some(value) => value.to_value(),
            None => Ok(Value::Null),
        }
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }

    fn to_json(&self) -> Result<Value> {
        match self {
            Some(value) => value.to_json(),
            None => Ok(Value::Null),
        }
    }

    fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_json(value).map(Some),
        }
    }
}
