mod from;

use crate::{IndexMap, PrimitiveValue};
use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Raw, untyped input to instance construction.
///
/// Only [`Value::Record`] is record-shaped; lists and scalars are handed to an
/// initializer as a single positional argument.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Primitive(PrimitiveValue),
    List(Vec<Value>),
    Record(IndexMap<String, Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Primitive(PrimitiveValue::default())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Primitive(p) => write!(f, "{p}"),
            Value::List(l) => write!(f, "[{}]", l.iter().join(",")),
            Value::Record(r) => write!(
                f,
                "{{{}}}",
                r.iter().map(|(k, v)| format!("{k} = {v}")).join(",")
            ),
        }
    }
}

impl Value {
    #[inline]
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    #[inline]
    pub fn as_record(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    #[inline]
    pub fn as_primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(p) => Some(p),
            _ => None,
        }
    }

    /// Field names of a record in enumeration order.
    pub fn record_keys(&self) -> Option<Vec<&str>> {
        self.as_record()
            .map(|r| r.keys().map(String::as_str).collect())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Primitive(p) => p.kind(),
            Value::List(_) => "Array",
            Value::Record(_) => "Hash",
        }
    }
}

#[cfg(test)]
mod value_tests {
    use crate::{record, Number, PrimitiveValue, Value};
    use pretty_assertions::assert_eq;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test(unsupported = test)]
    fn record_preserves_order() {
        let v = record! { "b" => 1, "a" => 2, "c" => 3 };
        assert_eq!(v.record_keys(), Some(vec!["b", "a", "c"]));
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn display() {
        let v = record! { "x" => 1, "tags" => vec!["a", "b"] };
        assert_eq!(v.to_string(), "{x = 1,tags = [a,b]}");
        assert_eq!(record! {}.to_string(), "{}");
    }

    #[cfg(feature = "serde")]
    #[wasm_bindgen_test(unsupported = test)]
    fn deserialize_json_keeps_key_order() {
        let v: Value = serde_json::from_str(r#"{"y": 2, "x": 1.5, "name": "p", "on": true, "n": null}"#)
            .expect("valid json");
        let Value::Record(r) = &v else {
            panic!("expected record, got {v:?}");
        };
        assert_eq!(r.keys().collect::<Vec<_>>(), vec!["y", "x", "name", "on", "n"]);
        assert_eq!(r["y"], Value::Primitive(PrimitiveValue::Number(Number::Int(2))));
        assert_eq!(r["x"], Value::from(1.5));
        assert_eq!(r["n"], Value::default());
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn only_records_are_record_shaped() {
        assert!(record! {}.is_record());
        assert!(!Value::from(vec![1, 2]).is_record());
        assert!(!Value::from(5).is_record());
    }
}
