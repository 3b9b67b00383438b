#![forbid(unsafe_code)]
//! Snapshot views SSOT.
//!
//! Read-only projections of a deployment platform: the platform itself, its
//! deployed modules, their instances, and the polymorphic property values
//! carried at every level. All types here are rebuilt per request from the
//! upstream read model and never mutated afterwards.

mod path;
mod platform;
mod property;
mod validation;

pub use path::{ModulePath, MODULE_PATH_SEPARATOR};
pub use platform::{DeployedModuleView, InstanceView, PlatformView};
pub use property::{
    is_reserved_property_name, AbstractValuedProperty, IterablePropertyBlock,
    IterableValuedProperty, ValuedProperty, PREDEFINED_PREFIX,
};
pub use validation::{only_printable, ValidationError};

pub const CRATE_NAME: &str = "hesperides-model";
