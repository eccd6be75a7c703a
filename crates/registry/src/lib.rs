//! Runtime type registry.
//!
//! A [`TypeContext`] holds a namespace tree of [`TypeDescriptor`]s and the
//! [`TypeCatalog`] built from it. It resolves `::` qualified names to
//! descriptors and constructs [`Instance`]s from raw [`Value`]s, choosing the
//! initialization convention each descriptor declares.
//!
//! [`Value`]: pcore_core::Value

mod catalog;
mod context;
mod descriptor;
mod instance;
mod name;
mod namespace;
mod object;
mod well_known;

pub use catalog::{AliasPolicy, CatalogOptions, Collision, TypeCatalog};
pub use context::{construct, resolve_type, TypeContext};
pub use descriptor::{DescriptorId, InitArgs, InitConvention, TypeDescriptor, TypeFactory};
pub use instance::{Body, Instance};
pub use name::{is_type_segment, is_valid_segment, QualifiedName, SEPARATOR};
pub use namespace::{NamespaceBuilder, NamespaceNode};
pub use object::{Attribute, ObjectType};
pub use well_known::{well_known, well_known_kind, WellKnown};
