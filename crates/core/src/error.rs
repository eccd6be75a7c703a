#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PcoreError {
    ArityMismatch(String),
    InvalidArgument(String),
    UnknownField(String),
    MissingField(String),
    ConversionError(String),
    UnknownType(String),
    ConstructionFailure(String),
}

impl Error for PcoreError {}

impl Display for PcoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PcoreError::ArityMismatch(m) => write!(f, "Arity Mismatch: {m}"),
            PcoreError::InvalidArgument(m) => write!(f, "Invalid Argument: {m}"),
            PcoreError::UnknownField(m) => write!(f, "Unknown Field: {m}"),
            PcoreError::MissingField(m) => write!(f, "Missing Field: {m}"),
            PcoreError::ConversionError(m) => write!(f, "Conversion Error: {m}"),
            PcoreError::UnknownType(m) => write!(f, "Unknown Type: {m}"),
            PcoreError::ConstructionFailure(m) => write!(f, "{m}"),
        }
    }
}

impl PcoreError {
    pub fn arity(type_name: &str, expected: usize, actual: usize) -> Self {
        PcoreError::ArityMismatch(format!(
            "{type_name} expects {expected} argument{}, got {actual}",
            if expected == 1 { "" } else { "s" }
        ))
    }

    pub fn arity_at_most(type_name: &str, max: usize, actual: usize) -> Self {
        PcoreError::ArityMismatch(format!(
            "{type_name} expects at most {max} argument{}, got {actual}",
            if max == 1 { "" } else { "s" }
        ))
    }

    pub fn construction<T: Display>(message: T) -> Self {
        PcoreError::ConstructionFailure(message.to_string())
    }
}
