use crate::{IndexMap, PrimitiveValue, Value};

impl<T: Into<PrimitiveValue>> From<T> for Value {
    #[inline]
    fn from(v: T) -> Value {
        Value::Primitive(v.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(|v| v.into()).collect())
    }
}

impl<V: Into<Value>> From<IndexMap<String, V>> for Value {
    #[inline]
    fn from(value: IndexMap<String, V>) -> Self {
        Value::Record(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Value::default(),
            Some(v) => v.into(),
        }
    }
}
