// SPDX-License-Identifier: Apache-2.0

use hesperides_model::{
    AbstractValuedProperty, DeployedModuleView, InstanceView, ModulePath, PlatformView,
    ValuedProperty,
};
use hesperides_properties::{PropertySequence, PropertyValuationContext};
use std::collections::BTreeSet;

fn valued(name: &str, value: &str) -> AbstractValuedProperty {
    AbstractValuedProperty::Valued(ValuedProperty::new(name, value))
}

fn value_of<'a>(sequence: &'a PropertySequence, name: &str) -> Option<&'a str> {
    sequence
        .get(name)
        .and_then(AbstractValuedProperty::as_valued)
        .map(|property| property.value.as_str())
}

fn billing_module() -> DeployedModuleView {
    let instance = InstanceView::new(
        "Node-1",
        vec![
            ValuedProperty::new("timeout", "30"),
            ValuedProperty::new("debug", "true"),
        ],
    )
    .expect("instance");
    DeployedModuleView::new(
        "billing",
        "2.3.0",
        ModulePath::parse("#core#billing").expect("module path"),
        vec![instance],
        BTreeSet::from(["timeout".to_string()]),
    )
    .expect("deployed module")
}

fn payments_platform(module: DeployedModuleView) -> PlatformView {
    PlatformView::new(
        "Payments",
        "PROD1",
        "1.0",
        true,
        7,
        vec![ValuedProperty::new("env", "prod")],
        vec![module],
    )
    .expect("platform")
}

#[test]
fn billing_scenario_resolves_predefined_and_instance_properties() {
    let module = billing_module();
    let platform = payments_platform(module.clone());
    let context =
        PropertyValuationContext::for_deployed_module(&platform, &module, Some("node-1"), vec![]);

    let merged =
        context.complete_with_contextual_properties(PropertySequence::new(), true, true);

    assert_eq!(value_of(&merged, "hesperides.application.name"), Some("Payments"));
    assert_eq!(value_of(&merged, "hesperides.application.version"), Some("1.0"));
    assert_eq!(value_of(&merged, "hesperides.platform.name"), Some("PROD1"));
    assert_eq!(value_of(&merged, "hesperides.module.name"), Some("billing"));
    assert_eq!(value_of(&merged, "hesperides.module.version"), Some("2.3.0"));
    assert_eq!(
        value_of(&merged, "hesperides.module.path.full"),
        Some("/core/billing")
    );
    assert_eq!(value_of(&merged, "hesperides.module.path.0"), Some("core"));
    assert_eq!(value_of(&merged, "hesperides.module.path.1"), Some("billing"));
    assert!(merged.get("hesperides.module.path.2").is_none());
    // The requested name, matched case-insensitively against "Node-1".
    assert_eq!(value_of(&merged, "hesperides.instance.name"), Some("node-1"));
    assert_eq!(value_of(&merged, "timeout"), Some("30"));
    // "debug" is not in the instances model.
    assert!(merged.get("debug").is_none());
}

#[test]
fn missing_instance_name_yields_empty_string_not_absent_key() {
    let module = billing_module();
    let platform = payments_platform(module.clone());
    let context = PropertyValuationContext::for_deployed_module(&platform, &module, None, vec![]);

    let merged =
        context.complete_with_contextual_properties(PropertySequence::new(), false, false);
    assert_eq!(value_of(&merged, "hesperides.instance.name"), Some(""));
    assert!(merged.get("timeout").is_none());
}

#[test]
fn unknown_instance_name_degrades_to_empty_instance_scope() {
    let module = billing_module();
    let platform = payments_platform(module.clone());
    let context =
        PropertyValuationContext::for_deployed_module(&platform, &module, Some("node-9"), vec![]);

    let merged =
        context.complete_with_contextual_properties(PropertySequence::new(), false, false);
    assert!(merged.get("timeout").is_none());
    assert_eq!(value_of(&merged, "hesperides.instance.name"), Some("node-9"));
}

#[test]
fn precedence_is_global_over_predefined_over_instance_over_base() {
    let instance = InstanceView::new("node-1", vec![ValuedProperty::new("shared", "instance")])
        .expect("instance");
    let module = DeployedModuleView::new(
        "billing",
        "2.3.0",
        ModulePath::parse("#core").expect("module path"),
        vec![instance],
        BTreeSet::from(["shared".to_string()]),
    )
    .expect("deployed module");
    let platform = PlatformView::new(
        "Payments",
        "PROD1",
        "1.0",
        false,
        1,
        vec![
            ValuedProperty::new("shared", "global"),
            ValuedProperty::new("hesperides.platform.name", "forged"),
        ],
        vec![module.clone()],
    )
    .expect("platform");
    let context =
        PropertyValuationContext::for_deployed_module(&platform, &module, Some("node-1"), vec![]);

    let base = PropertySequence::from_properties(vec![valued("shared", "base")]);

    // Without globals, the instance scope wins over the base value.
    let no_globals = context.complete_with_contextual_properties(base.clone(), false, false);
    assert_eq!(value_of(&no_globals, "shared"), Some("instance"));
    // Globals are applied last and win over everything, including a global
    // that collides with a predefined name.
    let with_globals = context.complete_with_contextual_properties(base, true, false);
    assert_eq!(value_of(&with_globals, "shared"), Some("global"));
    assert_eq!(
        value_of(&with_globals, "hesperides.platform.name"),
        Some("forged")
    );
}

#[test]
fn without_model_properties_fill_gaps_only() {
    let module = billing_module();
    let platform = payments_platform(module.clone());
    let without_model = vec![valued("timeout", "999"), valued("orphan", "kept")];
    let context = PropertyValuationContext::for_deployed_module(
        &platform,
        &module,
        Some("node-1"),
        without_model,
    );

    let merged =
        context.complete_with_contextual_properties(PropertySequence::new(), true, true);
    assert_eq!(value_of(&merged, "timeout"), Some("30"));
    assert_eq!(value_of(&merged, "orphan"), Some("kept"));

    let excluded =
        context.complete_with_contextual_properties(PropertySequence::new(), true, false);
    assert!(excluded.get("orphan").is_none());
}

#[test]
fn iterable_without_model_properties_are_never_synthesized_as_fill_ins() {
    let module = billing_module();
    let platform = payments_platform(module.clone());
    let iterable = AbstractValuedProperty::Iterable(
        hesperides_model::IterableValuedProperty::new("backends", vec![]),
    );
    let context =
        PropertyValuationContext::for_deployed_module(&platform, &module, None, vec![iterable]);

    let merged =
        context.complete_with_contextual_properties(PropertySequence::new(), false, true);
    assert!(merged.get("backends").is_none());
}

#[test]
fn remove_predefined_properties_round_trips_user_values() {
    let module = billing_module();
    let platform = payments_platform(module.clone());
    let context =
        PropertyValuationContext::for_deployed_module(&platform, &module, Some("node-1"), vec![]);

    let base = PropertySequence::from_properties(vec![valued("user.prop", "x")]);
    let completed = context.complete_with_contextual_properties(base, true, true);
    let stripped = context.remove_predefined_properties(completed);

    assert!(stripped
        .iter()
        .all(|property| !property.name().starts_with("hesperides.")));
    assert_eq!(value_of(&stripped, "user.prop"), Some("x"));
    assert_eq!(value_of(&stripped, "timeout"), Some("30"));
}

#[test]
fn platform_scoped_context_has_no_module_or_instance_entries() {
    let module = billing_module();
    let platform = payments_platform(module);
    let context = PropertyValuationContext::for_platform(&platform, vec![]);

    let merged =
        context.complete_with_contextual_properties(PropertySequence::new(), true, false);
    assert_eq!(value_of(&merged, "hesperides.application.name"), Some("Payments"));
    assert_eq!(value_of(&merged, "hesperides.platform.name"), Some("PROD1"));
    assert!(merged.get("hesperides.module.name").is_none());
    assert!(merged.get("hesperides.instance.name").is_none());
    assert!(merged.get("timeout").is_none());
    assert_eq!(value_of(&merged, "env"), Some("prod"));
}

#[test]
fn instance_property_outside_the_model_never_contributes() {
    let module = billing_module();
    let platform = payments_platform(module.clone());
    let context =
        PropertyValuationContext::for_deployed_module(&platform, &module, Some("node-1"), vec![]);

    // Even when the base already defines the name, the value present after
    // completion is the base's, not the filtered instance property's.
    let base = PropertySequence::from_properties(vec![valued("debug", "false")]);
    let merged = context.complete_with_contextual_properties(base, false, false);
    assert_eq!(value_of(&merged, "debug"), Some("false"));
}
