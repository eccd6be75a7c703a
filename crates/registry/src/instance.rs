use crate::TypeDescriptor;
use itertools::Itertools;
use pcore_core::{IndexMap, PrimitiveValue, Value};
use std::fmt::{Display, Formatter};

/// Storage of an [`Instance`]. `Empty` is the state right after allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Body {
    #[default]
    Empty,
    Scalar(PrimitiveValue),
    Object(IndexMap<String, Value>),
}

/// A value of a resolved type, created by [`TypeDescriptor::allocate`] and
/// populated by the descriptor's initializer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    descriptor: TypeDescriptor,
    body: Body,
    initialized: bool,
}

impl Instance {
    pub fn allocated(descriptor: TypeDescriptor) -> Self {
        Self {
            descriptor,
            body: Body::Empty,
            initialized: false,
        }
    }

    #[inline]
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Whether an initializer has run successfully on this instance, even one
    /// that stored nothing.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body == Body::Empty
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    pub fn scalar(&self) -> Option<&PrimitiveValue> {
        match &self.body {
            Body::Scalar(p) => Some(p),
            _ => None,
        }
    }

    pub fn fields(&self) -> Option<&IndexMap<String, Value>> {
        match &self.body {
            Body::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields().and_then(|f| f.get(field))
    }

    pub fn set_scalar(&mut self, value: impl Into<PrimitiveValue>) {
        self.body = Body::Scalar(value.into());
    }

    /// Sets a field, turning a scalar or empty body into an object body.
    pub fn set_field(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        if !matches!(self.body, Body::Object(_)) {
            self.body = Body::Object(IndexMap::default());
        }
        if let Body::Object(fields) = &mut self.body {
            fields.insert(field.into(), value.into());
        }
    }

    /// Drops the type, an empty body becomes an empty record.
    pub fn into_value(self) -> Value {
        match self.body {
            Body::Empty => Value::Record(IndexMap::default()),
            Body::Scalar(p) => Value::Primitive(p),
            Body::Object(fields) => Value::Record(fields),
        }
    }
}

impl Display for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.body {
            Body::Empty => write!(f, "{}{{}}", self.descriptor),
            Body::Scalar(p) => write!(f, "{}({p})", self.descriptor),
            Body::Object(fields) => write!(
                f,
                "{}{{{}}}",
                self.descriptor,
                fields.iter().map(|(k, v)| format!("{k} = {v}")).join(",")
            ),
        }
    }
}
