// ============================================================================
// Kind — the value type an option coerces into
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Int64,
    Uint64,
    Str,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int64 => "i64",
            Kind::Uint64 => "u64",
            Kind::Str => "String",
        }
    }

    /// Whether the option must be given `=value`.
    pub fn takes_value(self) -> bool {
        !matches!(self, Kind::Bool)
    }
}

// ============================================================================
// Value — type-erased storage held by each option slot
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int64(i64),
    Uint64(u64),
    Str(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int64(_) => Kind::Int64,
            Value::Uint64(_) => Kind::Uint64,
            Value::Str(_) => Kind::Str,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int64(n) => write!(f, "{}", n),
            Value::Uint64(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// OptValue — Rust types an option can hold
// ============================================================================

/// Rust types that can back an option. Implemented for `bool`, `i64`, `u64`
/// and `String`.
pub trait OptValue: Sized + 'static {
    const KIND: Kind;

    fn into_value(self) -> Value;

    fn from_value(v: &Value) -> Option<&Self>;
}

impl OptValue for bool {
    const KIND: Kind = Kind::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(v: &Value) -> Option<&Self> {
        match v {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl OptValue for i64 {
    const KIND: Kind = Kind::Int64;

    fn into_value(self) -> Value {
        Value::Int64(self)
    }

    fn from_value(v: &Value) -> Option<&Self> {
        match v {
            Value::Int64(n) => Some(n),
            _ => None,
        }
    }
}

impl OptValue for u64 {
    const KIND: Kind = Kind::Uint64;

    fn into_value(self) -> Value {
        Value::Uint64(self)
    }

    fn from_value(v: &Value) -> Option<&Self> {
        match v {
            Value::Uint64(n) => Some(n),
            _ => None,
        }
    }
}

impl OptValue for String {
    const KIND: Kind = Kind::Str;

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(v: &Value) -> Option<&Self> {
        match v {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}
