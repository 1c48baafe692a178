//! Canonical type descriptors and generic type-argument resolution.
//!
//! Recovers the type argument a class fixes on its generic superclass or
//! generic interface (the "type token" idiom), and describes any such type
//! with a canonical, structurally comparable [`TypeDescriptor`].
//!
//! # Pieces
//!
//! - [`ClassTable`]: registration-based class metadata, behind the
//!   [`Reflect`] capability
//! - [`TypeDescriptor`]: `Named`, `ArrayOf`, `Parameterized`, `Wildcard`
//!   (plus passthrough type variables), with structural equality, hashing
//!   and [`render`]ing
//! - [`canonicalize`]: raw reflective shapes to descriptors
//! - [`TypeResolver`]: first type argument of the superclass or first
//!   interface
//! - [`TypeToken`]: captures the argument supplied by a declaring subclass
//!
//! # Example
//!
//! ```
//! use reify_types::{ClassDef, ClassTable, RawType};
//!
//! let mut table = ClassTable::new();
//! let string = table.register(ClassDef::class("String"))?;
//! let comparable = table.register(ClassDef::interface("Comparable").with_type_params(["T"]))?;
//! let name = table.register(
//!     ClassDef::class("Name").implements(RawType::parameterized(comparable, [RawType::Class(string)])),
//! )?;
//!
//! let arg = table.resolver().resolve(name)?;
//! assert_eq!(reify_types::render(&table, &arg), "String");
//! # Ok::<(), reify_types::ReflectError>(())
//! ```

mod canon;
mod class;
mod class_id;
mod descriptor;
mod error;
mod modifiers;
mod raw;
mod reflect;
mod resolve;
mod table;
mod tag;
mod token;

#[cfg(test)]
mod test_support;

pub use canon::canonicalize;
pub use class::{ClassDef, ClassKind};
pub use class_id::ClassId;
pub use descriptor::{
    equal_descriptors, hash_descriptor, render, render_into, DisplayDescriptor, Shape,
    TypeDescriptor, TypeVariable,
};
pub use error::{ReflectError, ShapeError};
pub use modifiers::Modifiers;
pub use raw::RawType;
pub use reflect::Reflect;
pub use resolve::{AsClass, FallbackPolicy, Instance, ResolverConfig, TypeResolver};
pub use table::ClassTable;
pub use tag::Tag;
pub use token::TypeToken;

/// Crate name, as published.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=reify_types=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
