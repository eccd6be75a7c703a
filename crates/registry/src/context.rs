use crate::{
    well_known, CatalogOptions, InitArgs, InitConvention, Instance, NamespaceNode, TypeCatalog,
    TypeDescriptor, SEPARATOR,
};
use log::trace;
use pcore_core::{PcoreError, Value};

/// Resolves a `::` separated name against `root`.
///
/// A single segment naming a well-known primitive wins over the namespace.
/// Anything else is walked segment by segment; a missing member, a non
/// namespace in the middle of the path, or a final node that is not a type
/// all resolve to `None`.
pub fn resolve_type(root: &NamespaceNode, type_name: &str) -> Option<TypeDescriptor> {
    if !type_name.contains(SEPARATOR) {
        if let Some(primitive) = well_known(type_name) {
            trace!("{type_name} resolved to well-known type");
            return Some(primitive);
        }
    }

    let mut current = root;
    for segment in type_name.split(SEPARATOR) {
        current = match current.get(segment) {
            Some(next) => next,
            None => {
                trace!("{type_name}: no member {segment:?}");
                return None;
            }
        };
    }

    let resolved = current.as_type().cloned();
    if resolved.is_none() {
        trace!("{type_name} does not name a type");
    }
    resolved
}

/// Allocates an instance of `descriptor` and initializes it from `value`.
///
/// - an empty record returns the allocated instance without initializing it
/// - a non-empty record is passed whole to [`InitConvention::Structured`]
///   types, or as its values in key order to positional ones
/// - any other value becomes the only positional argument
///
/// Initializer errors are returned unchanged.
pub fn construct(descriptor: &TypeDescriptor, value: Value) -> Result<Instance, PcoreError> {
    let mut instance = descriptor.allocate();
    let args = match value {
        Value::Record(fields) if fields.is_empty() => {
            trace!("{descriptor}: empty record, allocation only");
            return Ok(instance);
        }
        Value::Record(fields) => match descriptor.convention() {
            InitConvention::Structured => InitArgs::Structured(fields),
            InitConvention::Positional => InitArgs::Positional(fields.into_values().collect()),
        },
        value => InitArgs::Positional(vec![value]),
    };
    trace!("{descriptor}: initializing with {args:?}");
    descriptor.initialize(&mut instance, args)?;
    Ok(instance)
}

/// A namespace tree together with its reverse catalog.
///
/// The tree is never mutated after construction, so a context can be shared
/// between threads freely.
#[derive(Clone, Debug)]
pub struct TypeContext {
    root: NamespaceNode,
    type_names: TypeCatalog,
}

impl TypeContext {
    pub fn new(root: impl Into<NamespaceNode>) -> Self {
        Self::with_options(root, CatalogOptions::default())
    }

    pub fn with_options(root: impl Into<NamespaceNode>, options: CatalogOptions) -> Self {
        let root = root.into();
        let type_names = TypeCatalog::build_with(&root, options);
        Self { root, type_names }
    }

    #[inline]
    pub fn root(&self) -> &NamespaceNode {
        &self.root
    }

    #[inline]
    pub fn type_names(&self) -> &TypeCatalog {
        &self.type_names
    }

    pub fn parse_type(&self, type_name: &str) -> Option<TypeDescriptor> {
        resolve_type(&self.root, type_name)
    }

    pub fn name_for(&self, descriptor: &TypeDescriptor) -> Option<&str> {
        self.type_names.name_for(descriptor)
    }

    pub fn create_instance(
        &self,
        descriptor: &TypeDescriptor,
        value: impl Into<Value>,
    ) -> Result<Instance, PcoreError> {
        construct(descriptor, value.into())
    }

    /// Resolves then constructs, failing with [`PcoreError::UnknownType`]
    /// when the name does not resolve.
    pub fn create_named(
        &self,
        type_name: &str,
        value: impl Into<Value>,
    ) -> Result<Instance, PcoreError> {
        let descriptor = self
            .parse_type(type_name)
            .ok_or_else(|| PcoreError::UnknownType(type_name.to_string()))?;
        construct(&descriptor, value.into())
    }
}
