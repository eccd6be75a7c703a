use crate::{InitArgs, InitConvention, Instance, TypeDescriptor, TypeFactory};
use log::trace;
use once_cell::sync::Lazy;
use pcore_core::{PcoreError, PrimitiveValue, Value};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Primitive types resolvable by bare name. They shadow any namespace entry
/// of the same name for single-segment lookups.
///
/// `Number` is an alias of `Float`: both names share one descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WellKnown {
    Boolean,
    Integer,
    Float,
    Number,
    String,
}

impl WellKnown {
    pub const ALL: [WellKnown; 5] = [
        WellKnown::Boolean,
        WellKnown::Integer,
        WellKnown::Float,
        WellKnown::Number,
        WellKnown::String,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WellKnown::Boolean => "Boolean",
            WellKnown::Integer => "Integer",
            WellKnown::Float => "Float",
            WellKnown::Number => "Number",
            WellKnown::String => "String",
        }
    }

    /// The shared descriptor for this primitive; every call returns the same identity.
    pub fn descriptor(self) -> TypeDescriptor {
        DESCRIPTORS[self.slot()].clone()
    }

    fn slot(self) -> usize {
        match self {
            WellKnown::Boolean => 0,
            WellKnown::Integer => 1,
            WellKnown::Float | WellKnown::Number => 2,
            WellKnown::String => 3,
        }
    }

    pub fn convert(self, value: &Value) -> Result<PrimitiveValue, PcoreError> {
        let Value::Primitive(p) = value else {
            return Err(PcoreError::ConversionError(format!(
                "Cannot convert {} {value} to {self}",
                value.kind()
            )));
        };
        let converted: PrimitiveValue = match self {
            WellKnown::Boolean => p.to_bool()?.into(),
            WellKnown::Integer => p.to_number()?.to_exact_int()?.into(),
            WellKnown::Float | WellKnown::Number => p.to_number()?.to_float().into(),
            WellKnown::String => match p {
                PrimitiveValue::None => {
                    return Err(PcoreError::ConversionError(format!(
                        "Cannot convert {} to {self}",
                        p.kind()
                    )))
                }
                p => p.to_string().into(),
            },
        };
        Ok(converted)
    }
}

impl Display for WellKnown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for WellKnown {
    type Err = PcoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WellKnown::ALL
            .into_iter()
            .find(|w| w.name() == s)
            .ok_or_else(|| PcoreError::UnknownType(format!("{s} is not a well-known type")))
    }
}

#[derive(Debug)]
struct PrimitiveFactory(WellKnown);

impl TypeFactory for PrimitiveFactory {
    fn initialize(&self, instance: &mut Instance, args: InitArgs) -> Result<(), PcoreError> {
        let args = args.into_positional();
        let [value] = args.as_slice() else {
            return Err(PcoreError::arity(self.0.name(), 1, args.len()));
        };
        let converted = self.0.convert(value)?;
        trace!("{} converted {value} to {converted:?}", self.0);
        instance.set_scalar(converted);
        Ok(())
    }
}

static DESCRIPTORS: Lazy<[TypeDescriptor; 4]> = Lazy::new(|| {
    [
        WellKnown::Boolean,
        WellKnown::Integer,
        WellKnown::Float,
        WellKnown::String,
    ]
    .map(|w| TypeDescriptor::new(w.name(), InitConvention::Positional, PrimitiveFactory(w)))
});

/// Descriptor for a bare well-known name, `None` for anything else.
pub fn well_known(name: &str) -> Option<TypeDescriptor> {
    name.parse::<WellKnown>().ok().map(WellKnown::descriptor)
}

/// Which well-known primitive, if any, this descriptor is. The shared
/// `Float`/`Number` descriptor reports `Float`.
pub fn well_known_kind(descriptor: &TypeDescriptor) -> Option<WellKnown> {
    WellKnown::ALL
        .into_iter()
        .find(|w| DESCRIPTORS[w.slot()] == *descriptor)
}
