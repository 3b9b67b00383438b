// SPDX-License-Identifier: Apache-2.0

use crate::predefined::predefined_properties;
use crate::scopes::{global_properties, instance_properties};
use crate::sequence::PropertySequence;
use hesperides_model::{AbstractValuedProperty, DeployedModuleView, PlatformView, ValuedProperty};
use std::collections::BTreeSet;
use tracing::debug;

/// All scopes for one valuation request, computed once at construction and
/// discarded with the request. Holds no shared or persisted state.
#[derive(Debug, Clone)]
pub struct PropertyValuationContext {
    global_properties: Vec<ValuedProperty>,
    instance_properties: Vec<ValuedProperty>,
    predefined_properties: Vec<ValuedProperty>,
    properties_without_model: Vec<AbstractValuedProperty>,
}

impl PropertyValuationContext {
    /// Module-scoped context: instance properties are collected against this
    /// module's instances model, predefined properties carry full
    /// module/instance identity.
    #[must_use]
    pub fn for_deployed_module(
        platform: &PlatformView,
        deployed_module: &DeployedModuleView,
        instance_name: Option<&str>,
        properties_without_model: Vec<AbstractValuedProperty>,
    ) -> Self {
        let context = Self {
            global_properties: global_properties(platform),
            instance_properties: instance_properties(deployed_module, instance_name),
            predefined_properties: predefined_properties(
                platform,
                Some(deployed_module),
                instance_name,
            ),
            properties_without_model,
        };
        debug!(
            application = %platform.application_name,
            platform = %platform.platform_name,
            module = %deployed_module.name,
            globals = context.global_properties.len(),
            instance = context.instance_properties.len(),
            predefined = context.predefined_properties.len(),
            "built module-scoped valuation context"
        );
        context
    }

    /// Platform-scoped context: no instance scope, platform-only predefined
    /// properties. Used for platform-wide operations not tied to one module.
    #[must_use]
    pub fn for_platform(
        platform: &PlatformView,
        properties_without_model: Vec<AbstractValuedProperty>,
    ) -> Self {
        let context = Self {
            global_properties: global_properties(platform),
            instance_properties: Vec::new(),
            predefined_properties: predefined_properties(platform, None, None),
            properties_without_model,
        };
        debug!(
            application = %platform.application_name,
            platform = %platform.platform_name,
            globals = context.global_properties.len(),
            "built platform-scoped valuation context"
        );
        context
    }

    /// Merges the contextual scopes into `base`. Application order is
    /// precedence order: instance, then predefined, then (when enabled)
    /// globals; without-model properties only fill names still undefined.
    #[must_use]
    pub fn complete_with_contextual_properties(
        &self,
        base: PropertySequence,
        include_globals: bool,
        include_without_model: bool,
    ) -> PropertySequence {
        let mut sequence = base
            .with_overriding_valued_properties(&self.instance_properties)
            .with_overriding_valued_properties(&self.predefined_properties);
        if include_globals {
            sequence = sequence.with_overriding_valued_properties(&self.global_properties);
        }
        if include_without_model {
            sequence = sequence.with_valued_properties_if_undefined(
                self.properties_without_model
                    .iter()
                    .filter_map(AbstractValuedProperty::as_valued),
            );
        }
        sequence
    }

    /// Strips every predefined property this context synthesized, so a
    /// completed sequence can be handed back to callers that must only see
    /// user-authored values.
    #[must_use]
    pub fn remove_predefined_properties(&self, sequence: PropertySequence) -> PropertySequence {
        let predefined_names: BTreeSet<String> = self
            .predefined_properties
            .iter()
            .map(|property| property.name.clone())
            .collect();
        sequence.without_names(&predefined_names)
    }

    #[must_use]
    pub fn predefined_properties(&self) -> &[ValuedProperty] {
        &self.predefined_properties
    }
}
