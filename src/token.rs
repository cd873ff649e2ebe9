// std imports
use std::fmt;

// ---

/// Token is the kind of element a [`TokenStream`](crate::stream::TokenStream) cursor is positioned at.
///
/// Stream exhaustion is represented by the absence of a token.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Token {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    FieldName,
    ValueString,
    ValueNumber,
    ValueBoolean,
    ValueNull,
}

impl Token {
    #[inline]
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::ValueString | Self::ValueNumber | Self::ValueBoolean | Self::ValueNull
        )
    }

    #[inline]
    pub fn is_structure_start(self) -> bool {
        matches!(self, Self::StartObject | Self::StartArray)
    }

    #[inline]
    pub fn is_structure_end(self) -> bool {
        matches!(self, Self::EndObject | Self::EndArray)
    }
}

// ---

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum NumberType {
    Int,
    Long,
    Float,
    Double,
    BigInteger,
}

/// Numeric value that keeps the subtype it was declared with.
///
/// Integers too large for `i64` are kept as their literal digits.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    BigInteger(String),
}

impl Number {
    #[inline]
    pub fn number_type(&self) -> NumberType {
        match self {
            Self::Int(_) => NumberType::Int,
            Self::Long(_) => NumberType::Long,
            Self::Float(_) => NumberType::Float,
            Self::Double(_) => NumberType::Double,
            Self::BigInteger(_) => NumberType::BigInteger,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Long(v) => write!(f, "{}", v),
            // shortest representation that parses back to the same value
            Self::Float(v) => f.write_str(&json::to_string(v).map_err(|_| fmt::Error)?),
            Self::Double(v) => f.write_str(&json::to_string(v).map_err(|_| fmt::Error)?),
            Self::BigInteger(v) => f.write_str(v),
        }
    }
}

impl From<i32> for Number {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

// ---

/// Value captured for a matched field.
///
/// Objects and arrays are captured as their re-serialized JSON text in [`Value::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Raw(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Number(v) => write!(f, "{}", v),
            Self::String(v) | Self::Raw(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for Value {
    #[inline]
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}
