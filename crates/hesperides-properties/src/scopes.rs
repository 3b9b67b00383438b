use hesperides_model::{DeployedModuleView, PlatformView, ValuedProperty};

/// Platform-wide properties, unfiltered.
#[must_use]
pub fn global_properties(platform: &PlatformView) -> Vec<ValuedProperty> {
    platform.global_properties.clone()
}

/// Properties of the first instance whose name matches case-insensitively,
/// kept only if the module's instances model declares the property name.
/// Missing name or instance degrades to an empty list.
#[must_use]
pub fn instance_properties(
    deployed_module: &DeployedModuleView,
    instance_name: Option<&str>,
) -> Vec<ValuedProperty> {
    let Some(requested) = instance_name else {
        return Vec::new();
    };
    deployed_module
        .instances
        .iter()
        .find(|instance| instance.name.eq_ignore_ascii_case(requested))
        .map(|instance| {
            instance
                .valued_properties
                .iter()
                .filter(|property| deployed_module.instances_model.contains(&property.name))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
