use crate::{impl_from, Number, PcoreError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Scalar half of a raw value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PrimitiveValue {
    #[default]
    None,
    Bool(bool),
    Number(Number),
    String(String),
}

impl_from! {
    bool, PrimitiveValue, PrimitiveValue::Bool;
    String, PrimitiveValue, PrimitiveValue::String;
}

impl From<&'_ str> for PrimitiveValue {
    #[inline]
    fn from(value: &'_ str) -> Self {
        PrimitiveValue::String(value.to_string())
    }
}

impl<T: Into<Number>> From<T> for PrimitiveValue {
    #[inline]
    fn from(value: T) -> Self {
        PrimitiveValue::Number(value.into())
    }
}

impl From<()> for PrimitiveValue {
    #[inline]
    fn from(_value: ()) -> Self {
        PrimitiveValue::None
    }
}

impl Display for PrimitiveValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimitiveValue::None => write!(f, "none"),
            PrimitiveValue::Bool(v) => write!(f, "{v}"),
            PrimitiveValue::Number(v) => write!(f, "{v}"),
            PrimitiveValue::String(v) => write!(f, "{v}"),
        }
    }
}

impl PrimitiveValue {
    /// Name of the well-known type this scalar naturally belongs to.
    pub fn kind(&self) -> &'static str {
        match self {
            PrimitiveValue::None => "Undef",
            PrimitiveValue::Bool(_) => "Boolean",
            PrimitiveValue::Number(Number::Int(_)) => "Integer",
            PrimitiveValue::Number(Number::Float(_)) => "Float",
            PrimitiveValue::String(_) => "String",
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, PrimitiveValue::None)
    }

    pub fn to_bool(&self) -> Result<bool, PcoreError> {
        match self {
            PrimitiveValue::Bool(b) => Ok(*b),
            PrimitiveValue::String(s) => match s.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(PcoreError::ConversionError(format!(
                    "Cannot convert {s:?} to Boolean"
                ))),
            },
            v => Err(PcoreError::ConversionError(format!(
                "Cannot convert {} {v} to Boolean",
                v.kind()
            ))),
        }
    }

    pub fn to_number(&self) -> Result<Number, PcoreError> {
        match self {
            PrimitiveValue::Number(n) => Ok(*n),
            PrimitiveValue::String(s) => s.parse(),
            v => Err(PcoreError::ConversionError(format!(
                "Cannot convert {} {v} to Number",
                v.kind()
            ))),
        }
    }
}

#[cfg(test)]
mod primitive_tests {
    use crate::{Number, PrimitiveValue};
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test(unsupported = test)]
    fn kinds() {
        assert_eq!(PrimitiveValue::from(1).kind(), "Integer");
        assert_eq!(PrimitiveValue::from(1.5).kind(), "Float");
        assert_eq!(PrimitiveValue::from("a").kind(), "String");
        assert_eq!(PrimitiveValue::from(true).kind(), "Boolean");
        assert_eq!(PrimitiveValue::None.kind(), "Undef");
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn bool_conversion() {
        assert_eq!(PrimitiveValue::from("true").to_bool(), Ok(true));
        assert!(PrimitiveValue::from("yes").to_bool().is_err());
        assert!(PrimitiveValue::from(1).to_bool().is_err());
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn number_conversion() {
        assert_eq!(PrimitiveValue::from("12").to_number(), Ok(Number::Int(12)));
        assert_eq!(PrimitiveValue::from(2.5).to_number(), Ok(Number::Float(2.5)));
        assert!(PrimitiveValue::None.to_number().is_err());
    }
}
