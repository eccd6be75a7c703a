use crate::{impl_from, impl_from_cast, PcoreError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl_from! {
    i64, Number, Number::Int;
    f64, Number, Number::Float;
}

impl_from_cast! {
    i32 as i64, Number, Number::Int;
    u32 as i64, Number, Number::Int;
    f32 as f64, Number, Number::Float;
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Number::Int(v) => v.hash(state),
            Number::Float(v) => v.to_bits().hash(state),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

impl Eq for Number {}

impl PartialEq for Number {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (&Number::Int(a), &Number::Int(b)) => a == b,
            (&Number::Float(a), &Number::Float(b)) => a == b,
            (&Number::Int(a), &Number::Float(b)) => a as f64 == b,
            (&Number::Float(a), &Number::Int(b)) => a == b as f64,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.partial_cmp(b),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(b),
            (Number::Int(a), Number::Float(b)) => (*a as f64).partial_cmp(b),
            (Number::Float(a), Number::Int(b)) => a.partial_cmp(&(*b as f64)),
        }
    }
}

impl FromStr for Number {
    type Err = PcoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let parsed = if s.contains(['.', 'e', 'E']) {
            s.parse::<f64>().map(Number::Float).map_err(|e| e.to_string())
        } else {
            s.parse::<i64>().map(Number::Int).map_err(|e| e.to_string())
        };
        parsed.map_err(|e| PcoreError::ConversionError(format!("Cannot parse {s:?} as Number: {e}")))
    }
}

impl Number {
    #[inline]
    pub fn zero() -> Number {
        Number::Int(0)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    #[inline]
    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    #[inline]
    pub fn to_float(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Truncating conversion, `3.9` becomes `3`.
    #[inline]
    pub fn to_int(self) -> i64 {
        match self {
            Number::Int(i) => i,
            Number::Float(f) => f as i64,
        }
    }

    /// Lossless conversion: floats are only accepted when they carry no fraction
    /// and fit in an `i64`.
    pub fn to_exact_int(self) -> Result<i64, PcoreError> {
        match self {
            Number::Int(i) => Ok(i),
            // i64::MAX as f64 rounds up to 2^63, which is already out of range
            Number::Float(f) if !(f >= i64::MIN as f64 && f < i64::MAX as f64) => {
                Err(PcoreError::ConversionError(format!(
                    "{f} is out of range for Integer"
                )))
            }
            Number::Float(f) if f.fract() == 0.0 => Ok(f as i64),
            Number::Float(f) => Err(PcoreError::ConversionError(format!(
                "Cannot convert {f} to Integer without losing precision"
            ))),
        }
    }
}

#[cfg(test)]
mod number_tests {
    use crate::{Number, PcoreError};
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test(unsupported = test)]
    fn cross_variant_eq() {
        assert_eq!(Number::Int(2), Number::Float(2.0));
        assert_ne!(Number::Int(2), Number::Float(2.5));
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn parse() {
        assert_eq!("1_000".parse::<Number>(), Ok(Number::Int(1000)));
        assert_eq!("2.5".parse::<Number>(), Ok(Number::Float(2.5)));
        assert_eq!("1e3".parse::<Number>(), Ok(Number::Float(1000.0)));
        assert!(matches!(
            "abc".parse::<Number>(),
            Err(PcoreError::ConversionError(_))
        ));
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn exact_int() {
        assert_eq!(Number::Float(4.0).to_exact_int(), Ok(4));
        assert!(Number::Float(4.5).to_exact_int().is_err());
        assert_eq!(Number::Float(4.5).to_int(), 4);
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn exact_int_range() {
        assert!(matches!(
            Number::Float(1e20).to_exact_int(),
            Err(PcoreError::ConversionError(_))
        ));
        assert!(Number::Float(-1e20).to_exact_int().is_err());
        assert!(Number::Float(9223372036854775807.0).to_exact_int().is_err());
        assert!(Number::Float(f64::INFINITY).to_exact_int().is_err());
        assert!(Number::Float(f64::NAN).to_exact_int().is_err());
        assert_eq!(Number::Float(-9223372036854775808.0).to_exact_int(), Ok(i64::MIN));
        assert_eq!(Number::Float(1e15).to_exact_int(), Ok(1_000_000_000_000_000));
    }
}
