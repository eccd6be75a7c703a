use crate::{is_type_segment, TypeDescriptor};
use pcore_core::{IndexMap, Value};

/// A node of the namespace tree, classified once when the tree is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NamespaceNode {
    Namespace(IndexMap<String, NamespaceNode>),
    Type(TypeDescriptor),
    /// Anything else living in a namespace (constants, metadata). Never constructible.
    Value(Value),
}

impl Default for NamespaceNode {
    fn default() -> Self {
        NamespaceNode::Namespace(IndexMap::default())
    }
}

impl From<TypeDescriptor> for NamespaceNode {
    fn from(value: TypeDescriptor) -> Self {
        NamespaceNode::Type(value)
    }
}

impl From<IndexMap<String, NamespaceNode>> for NamespaceNode {
    fn from(value: IndexMap<String, NamespaceNode>) -> Self {
        NamespaceNode::Namespace(value)
    }
}

impl From<NamespaceBuilder> for NamespaceNode {
    fn from(value: NamespaceBuilder) -> Self {
        value.build()
    }
}

impl NamespaceNode {
    /// Member lookup, only namespaces have members.
    pub fn get(&self, key: &str) -> Option<&NamespaceNode> {
        match self {
            NamespaceNode::Namespace(members) => members.get(key),
            _ => None,
        }
    }

    #[inline]
    pub fn as_type(&self) -> Option<&TypeDescriptor> {
        match self {
            NamespaceNode::Type(t) => Some(t),
            _ => None,
        }
    }

    #[inline]
    pub fn is_namespace(&self) -> bool {
        matches!(self, NamespaceNode::Namespace(_))
    }

    /// Member keys that belong to the type namespace, in declaration order.
    pub fn type_keys(&self) -> impl Iterator<Item = &str> {
        let members = match self {
            NamespaceNode::Namespace(members) => Some(members),
            _ => None,
        };
        members
            .into_iter()
            .flat_map(|m| m.keys())
            .map(String::as_str)
            .filter(|k| is_type_segment(k))
    }
}

/// Builds a [`NamespaceNode::Namespace`] keeping declaration order.
///
/// ```
/// use pcore_registry::{InitConvention, NamespaceBuilder, NamespaceNode, ObjectType};
///
/// let point = ObjectType::new()
///     .attribute("x")
///     .attribute("y")
///     .into_descriptor("Point", InitConvention::Positional);
/// let root = NamespaceBuilder::new()
///     .namespace("Geo", |geo| geo.register(point.clone()).member("version", 2))
///     .build();
/// assert_eq!(
///     root.get("Geo").and_then(|g| g.get("Point")),
///     Some(&NamespaceNode::Type(point))
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct NamespaceBuilder {
    members: IndexMap<String, NamespaceNode>,
}

impl NamespaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type under its own local name.
    pub fn register(self, descriptor: TypeDescriptor) -> Self {
        let key = descriptor.name().to_string();
        self.register_as(key, descriptor)
    }

    pub fn register_as(self, key: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        self.node(key, NamespaceNode::Type(descriptor))
    }

    pub fn member(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.node(key, NamespaceNode::Value(value.into()))
    }

    pub fn namespace<F>(self, key: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(NamespaceBuilder) -> NamespaceBuilder,
    {
        let child = build(NamespaceBuilder::new()).build();
        self.node(key, child)
    }

    /// Inserts or replaces a member; a replaced key keeps its original position.
    pub fn node(mut self, key: impl Into<String>, node: impl Into<NamespaceNode>) -> Self {
        self.members.insert(key.into(), node.into());
        self
    }

    pub fn build(self) -> NamespaceNode {
        NamespaceNode::Namespace(self.members)
    }
}
