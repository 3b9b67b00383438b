#![forbid(unsafe_code)]
//! Property valuation engine.
//!
//! Resolves the final set of property values for a (platform, deployed
//! module, instance) triple by merging four scopes in precedence order:
//! template defaults, instance properties, synthesized predefined properties
//! and platform globals, with without-model properties filling remaining
//! gaps. Purely functional over immutable snapshot views; degenerate inputs
//! contribute empty scopes, never errors.

mod context;
mod predefined;
mod scopes;
mod sequence;

pub use context::PropertyValuationContext;
pub use predefined::predefined_properties;
pub use scopes::{global_properties, instance_properties};
pub use sequence::PropertySequence;

pub const CRATE_NAME: &str = "hesperides-properties";
