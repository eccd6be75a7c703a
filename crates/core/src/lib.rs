//! Untyped value model shared by the pcore type registry.
//!
//! A [`Value`] is either a scalar ([`PrimitiveValue`]), a list, or a record of
//! named fields that keeps its insertion order.

mod error;
mod macros;
mod number;
mod primitive;
mod value;

pub type IndexMap<K, V> = indexmap::map::IndexMap<K, V, FxBuildHasher>;
pub type IndexMapEntry<'a, K, V> = indexmap::map::Entry<'a, K, V>;

pub use error::PcoreError;
use fxhash::FxBuildHasher;
pub use number::Number;
pub use primitive::PrimitiveValue;
pub use value::Value;
