use crate::{InitArgs, InitConvention, Instance, TypeDescriptor, TypeFactory};
use itertools::Itertools;
use log::trace;
use pcore_core::{IndexMap, PcoreError, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub default: Option<Value>,
}

/// Factory for record-like object types declared as an ordered attribute list.
///
/// Positional arguments are matched to attributes in declaration order,
/// structured arguments by name. Missing attributes take their default.
#[derive(Clone, Debug, Default)]
pub struct ObjectType {
    attributes: Vec<Attribute>,
}

impl ObjectType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            default: None,
        });
        self
    }

    pub fn attribute_with_default(
        mut self,
        name: impl Into<String>,
        default: impl Into<Value>,
    ) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            default: Some(default.into()),
        });
        self
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn into_descriptor(
        self,
        name: impl Into<String>,
        convention: InitConvention,
    ) -> TypeDescriptor {
        TypeDescriptor::new(name, convention, self)
    }

    fn fill(
        &self,
        type_name: &str,
        mut lookup: impl FnMut(&Attribute) -> Option<Value>,
    ) -> Result<IndexMap<String, Value>, PcoreError> {
        let mut fields = IndexMap::default();
        for attr in &self.attributes {
            let value = match lookup(attr).or_else(|| attr.default.clone()) {
                Some(v) => v,
                None => {
                    return Err(PcoreError::MissingField(format!(
                        "{type_name} requires a value for '{}'",
                        attr.name
                    )))
                }
            };
            fields.insert(attr.name.clone(), value);
        }
        Ok(fields)
    }

    fn positional(
        &self,
        type_name: &str,
        args: Vec<Value>,
    ) -> Result<IndexMap<String, Value>, PcoreError> {
        if args.len() > self.attributes.len() {
            return Err(PcoreError::arity_at_most(
                type_name,
                self.attributes.len(),
                args.len(),
            ));
        }
        let mut args = args.into_iter();
        self.fill(type_name, |_| args.next())
    }

    fn structured(
        &self,
        type_name: &str,
        mut given: IndexMap<String, Value>,
    ) -> Result<IndexMap<String, Value>, PcoreError> {
        let unknown = given
            .keys()
            .filter(|k| !self.attributes.iter().any(|a| &a.name == *k))
            .join(", ");
        if !unknown.is_empty() {
            return Err(PcoreError::UnknownField(format!(
                "{type_name} has no attribute(s) {unknown}"
            )));
        }
        self.fill(type_name, |attr| given.shift_remove(&attr.name))
    }
}

impl TypeFactory for ObjectType {
    fn initialize(&self, instance: &mut Instance, args: InitArgs) -> Result<(), PcoreError> {
        let type_name = instance.descriptor().name().to_string();
        trace!("initializing {type_name} with {} argument(s)", args.len());
        let fields = match args {
            InitArgs::Positional(args) => self.positional(&type_name, args)?,
            InitArgs::Structured(given) => self.structured(&type_name, given)?,
        };
        for (name, value) in fields {
            instance.set_field(name, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod object_tests {
    use crate::{InitArgs, InitConvention, ObjectType, TypeDescriptor};
    use pcore_core::{record, PcoreError, Value};
    use pretty_assertions::assert_eq;
    use wasm_bindgen_test::*;

    fn point() -> TypeDescriptor {
        ObjectType::new()
            .attribute("x")
            .attribute("y")
            .attribute_with_default("label", "origin")
            .into_descriptor("Point", InitConvention::Structured)
    }

    fn fields(v: Value) -> pcore_core::IndexMap<String, Value> {
        match v {
            Value::Record(r) => r,
            v => panic!("expected record, got {v}"),
        }
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn positional_fills_defaults() {
        let d = point();
        let mut i = d.allocate();
        d.initialize(&mut i, InitArgs::Positional(vec![1.into(), 2.into()]))
            .expect("initialize");
        assert_eq!(i.into_value(), record! { "x" => 1, "y" => 2, "label" => "origin" });
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn structured_matches_by_name() {
        let d = point();
        let mut i = d.allocate();
        let args = InitArgs::Structured(fields(record! { "y" => 2, "label" => "p", "x" => 1 }));
        d.initialize(&mut i, args).expect("initialize");
        assert_eq!(i.to_string(), "Point{x = 1,y = 2,label = p}");
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn too_many_positional() {
        let d = point();
        let mut i = d.allocate();
        let result = d.initialize(
            &mut i,
            InitArgs::Positional(vec![1.into(), 2.into(), 3.into(), 4.into()]),
        );
        assert_eq!(
            result,
            Err(PcoreError::ArityMismatch(
                "Point expects at most 3 arguments, got 4".to_string()
            ))
        );
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn missing_required() {
        let d = point();
        let mut i = d.allocate();
        let result = d.initialize(&mut i, InitArgs::Structured(fields(record! { "x" => 1 })));
        assert_eq!(
            result,
            Err(PcoreError::MissingField(
                "Point requires a value for 'y'".to_string()
            ))
        );
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn unknown_field() {
        let d = point();
        let mut i = d.allocate();
        let result = d.initialize(
            &mut i,
            InitArgs::Structured(fields(record! { "x" => 1, "y" => 2, "z" => 3 })),
        );
        assert!(matches!(result, Err(PcoreError::UnknownField(_))));
    }
}
