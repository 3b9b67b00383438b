use hesperides_model::{DeployedModuleView, ModulePath, PlatformView, ValuedProperty};

/// Synthesizes the identity-derived predefined properties. The three
/// platform entries are always present; module entries only when a deployed
/// module is given. The instance name defaults to the empty string, never an
/// absent key. Order is stable for reproducibility.
#[must_use]
pub fn predefined_properties(
    platform: &PlatformView,
    deployed_module: Option<&DeployedModuleView>,
    instance_name: Option<&str>,
) -> Vec<ValuedProperty> {
    let mut predefined = vec![
        ValuedProperty::new("hesperides.application.name", &platform.application_name),
        ValuedProperty::new("hesperides.application.version", &platform.version),
        ValuedProperty::new("hesperides.platform.name", &platform.platform_name),
    ];
    if let Some(module) = deployed_module {
        predefined.push(ValuedProperty::new("hesperides.module.name", &module.name));
        predefined.push(ValuedProperty::new(
            "hesperides.module.version",
            &module.version,
        ));
        predefined.push(ValuedProperty::new(
            "hesperides.module.path.full",
            module.module_path.to_slash_path(),
        ));
        predefined.extend(path_logical_groups(&module.module_path));
        predefined.push(ValuedProperty::new(
            "hesperides.instance.name",
            instance_name.unwrap_or(""),
        ));
    }
    predefined
}

// Logical groups are 1-indexed in the path but exposed as 0-indexed keys.
fn path_logical_groups(module_path: &ModulePath) -> Vec<ValuedProperty> {
    module_path
        .segments()
        .enumerate()
        .map(|(index, group)| {
            ValuedProperty::new(format!("hesperides.module.path.{index}"), group)
        })
        .collect()
}
