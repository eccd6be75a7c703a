use crate::Instance;
use pcore_core::{IndexMap, PcoreError, Value};
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static NEXT_DESCRIPTOR_ID: AtomicUsize = AtomicUsize::new(1);

/// Process-unique identity of a [`TypeDescriptor`], shared by all of its clones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DescriptorId(usize);

impl DescriptorId {
    fn next() -> Self {
        DescriptorId(NEXT_DESCRIPTOR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for DescriptorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a record is handed to a type's initializer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InitConvention {
    /// Record values become positional arguments in key order, names are dropped.
    #[default]
    Positional,
    /// The whole record is passed as one structured argument.
    Structured,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitArgs {
    Positional(Vec<Value>),
    Structured(IndexMap<String, Value>),
}

impl InitArgs {
    pub fn len(&self) -> usize {
        match self {
            InitArgs::Positional(args) => args.len(),
            InitArgs::Structured(fields) => fields.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops field names, keeping enumeration order.
    pub fn into_positional(self) -> Vec<Value> {
        match self {
            InitArgs::Positional(args) => args,
            InitArgs::Structured(fields) => fields.into_values().collect(),
        }
    }
}

/// Two-phase construction contract: allocate a bare handle, then initialize it.
pub trait TypeFactory: Debug + Send + Sync {
    fn allocate(&self, descriptor: &TypeDescriptor) -> Instance {
        Instance::allocated(descriptor.clone())
    }

    fn initialize(&self, instance: &mut Instance, args: InitArgs) -> Result<(), PcoreError>;
}

type InitFn = dyn Fn(&mut Instance, InitArgs) -> Result<(), PcoreError> + Send + Sync;

struct FnFactory(Box<InitFn>);

impl Debug for FnFactory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FnFactory")
    }
}

impl TypeFactory for FnFactory {
    fn initialize(&self, instance: &mut Instance, args: InitArgs) -> Result<(), PcoreError> {
        (self.0)(instance, args)
    }
}

struct DescriptorInner {
    id: DescriptorId,
    name: String,
    convention: InitConvention,
    factory: Box<dyn TypeFactory>,
}

/// A constructible type: its initialization convention plus the factory that
/// allocates and initializes instances of it.
///
/// Cloning is cheap and keeps the identity; two descriptors are equal only
/// when they share a [`DescriptorId`].
#[derive(Clone)]
pub struct TypeDescriptor(Arc<DescriptorInner>);

impl TypeDescriptor {
    pub fn new<F: TypeFactory + 'static>(
        name: impl Into<String>,
        convention: InitConvention,
        factory: F,
    ) -> Self {
        TypeDescriptor(Arc::new(DescriptorInner {
            id: DescriptorId::next(),
            name: name.into(),
            convention,
            factory: Box::new(factory),
        }))
    }

    pub fn from_fn<F>(name: impl Into<String>, convention: InitConvention, init: F) -> Self
    where
        F: Fn(&mut Instance, InitArgs) -> Result<(), PcoreError> + Send + Sync + 'static,
    {
        Self::new(name, convention, FnFactory(Box::new(init)))
    }

    #[inline]
    pub fn id(&self) -> DescriptorId {
        self.0.id
    }

    /// Local name given at creation, not the qualified catalog name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[inline]
    pub fn convention(&self) -> InitConvention {
        self.0.convention
    }

    pub fn allocate(&self) -> Instance {
        self.0.factory.allocate(self)
    }

    /// Runs the factory's initializer; the instance is marked initialized only on success.
    pub fn initialize(&self, instance: &mut Instance, args: InitArgs) -> Result<(), PcoreError> {
        self.0.factory.initialize(instance, args)?;
        instance.mark_initialized();
        Ok(())
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state)
    }
}

impl Debug for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("id", &self.0.id)
            .field("name", &self.0.name)
            .field("convention", &self.0.convention)
            .field("factory", &self.0.factory)
            .finish()
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.name)
    }
}
