use crate::{is_type_segment, DescriptorId, NamespaceNode, QualifiedName, TypeDescriptor};
use log::{debug, warn};
use pcore_core::{IndexMap, IndexMapEntry};

/// Which path a descriptor keeps when it is reachable through more than one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AliasPolicy {
    #[default]
    LastWins,
    FirstWins,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    pub alias_policy: AliasPolicy,
}

/// A descriptor found under a second path during the catalog walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    pub descriptor: DescriptorId,
    pub kept: QualifiedName,
    pub dropped: QualifiedName,
}

/// Reverse index from descriptor identity to qualified name.
///
/// Built by one depth-first walk of the namespace tree. Well-known primitives
/// are never part of it, and building never fails: nodes that are not types
/// or namespaces simply contribute nothing.
#[derive(Clone, Debug, Default)]
pub struct TypeCatalog {
    names: IndexMap<DescriptorId, QualifiedName>,
    collisions: Vec<Collision>,
}

impl TypeCatalog {
    pub fn build(root: &NamespaceNode) -> Self {
        Self::build_with(root, CatalogOptions::default())
    }

    pub fn build_with(root: &NamespaceNode, options: CatalogOptions) -> Self {
        let mut catalog = TypeCatalog::default();
        catalog.walk(None, root, options);
        debug!(
            "type catalog built: {} type(s), {} alias collision(s)",
            catalog.names.len(),
            catalog.collisions.len()
        );
        catalog
    }

    fn walk(
        &mut self,
        prefix: Option<QualifiedName>,
        node: &NamespaceNode,
        options: CatalogOptions,
    ) {
        match (prefix, node) {
            (Some(name), NamespaceNode::Type(descriptor)) => self.record(name, descriptor, options),
            (prefix, NamespaceNode::Namespace(members)) => {
                for (key, child) in members {
                    if !is_type_segment(key) {
                        continue;
                    }
                    let name = match &prefix {
                        None => QualifiedName::root(key.as_str()),
                        Some(p) => p.child(key),
                    };
                    self.walk(Some(name), child, options);
                }
            }
            _ => {}
        }
    }

    fn record(
        &mut self,
        name: QualifiedName,
        descriptor: &TypeDescriptor,
        options: CatalogOptions,
    ) {
        let id = descriptor.id();
        let mut existing = match self.names.entry(id) {
            IndexMapEntry::Vacant(slot) => {
                slot.insert(name);
                return;
            }
            IndexMapEntry::Occupied(existing) => existing,
        };

        let collision = match options.alias_policy {
            AliasPolicy::LastWins => Collision {
                descriptor: id,
                dropped: existing.insert(name.clone()),
                kept: name,
            },
            AliasPolicy::FirstWins => Collision {
                descriptor: id,
                kept: existing.get().clone(),
                dropped: name,
            },
        };
        warn!(
            "{descriptor} is reachable as both {} and {}, keeping {}",
            collision.dropped, collision.kept, collision.kept
        );
        self.collisions.push(collision);
    }

    pub fn name_for(&self, descriptor: &TypeDescriptor) -> Option<&str> {
        self.names.get(&descriptor.id()).map(QualifiedName::as_str)
    }

    pub fn qualified_name_for(&self, descriptor: &TypeDescriptor) -> Option<&QualifiedName> {
        self.names.get(&descriptor.id())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = (DescriptorId, &QualifiedName)> {
        self.names.iter().map(|(id, name)| (*id, name))
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}
