//! Turn serialized type names and literal data into live typed values.
//!
//! ```
//! use pcore::{record, InitConvention, NamespaceBuilder, ObjectType, TypeContext};
//!
//! let point = ObjectType::new()
//!     .attribute("x")
//!     .attribute("y")
//!     .into_descriptor("Point", InitConvention::Structured);
//! let ctx = TypeContext::new(NamespaceBuilder::new().namespace("Geo", |g| g.register(point)));
//!
//! let point_type = ctx.parse_type("Geo::Point").expect("registered");
//! let p = ctx
//!     .create_instance(&point_type, record! { "y" => 2, "x" => 1 })
//!     .expect("valid point");
//! assert_eq!(p.to_string(), "Point{x = 1,y = 2}");
//! assert_eq!(ctx.name_for(p.descriptor()), Some("Geo::Point"));
//! ```

pub use pcore_core::*;
pub use pcore_registry::*;
