/// The declared kind of a mapped field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Timestamp,

    /// A string-keyed map, only storable as JSON
    Map,

    /// An arbitrary structure, only storable as JSON
    Struct,

    /// A dynamically typed JSON document
    Any,
}

impl Type {
    pub fn is_signed(self) -> bool {
        matches!(self, Type::I8 | Type::I16 | Type::I32 | Type::I64)
    }

    pub fn is_unsigned(self) -> bool {
        matches!(self, Type::U8 | Type::U16 | Type::U32 | Type::U64)
    }

    pub fn is_float(self) -> bool {
        matches!(self, Type::F32 | Type::F64)
    }

    /// Returns `true` for kinds that have no column representation of their
    /// own and must be declared as JSON.
    pub fn requires_json(self) -> bool {
        matches!(self, Type::Map | Type::Struct | Type::Any)
    }

    /// Dynamic kinds may always hold null, whatever the declaration says.
    pub fn is_dynamic(self) -> bool {
        matches!(self, Type::Any)
    }
}
