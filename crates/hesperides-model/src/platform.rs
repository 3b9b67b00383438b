use crate::path::ModulePath;
use crate::property::ValuedProperty;
use crate::validation::{only_printable, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One named instance of a deployed module. Instance names are matched
/// case-insensitively on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct InstanceView {
    pub name: String,
    pub valued_properties: Vec<ValuedProperty>,
}

impl InstanceView {
    pub fn new(
        name: impl Into<String>,
        valued_properties: Vec<ValuedProperty>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        only_printable("instance name", &name)?;
        Ok(Self {
            name,
            valued_properties,
        })
    }
}

/// A module deployed on a platform at a specific version and path.
///
/// `instances_model` is the set of property names this module legitimately
/// declares as instance-scoped; instance properties outside it are dropped
/// during scope collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct DeployedModuleView {
    pub name: String,
    pub version: String,
    #[serde(rename = "path")]
    pub module_path: ModulePath,
    pub instances: Vec<InstanceView>,
    pub instances_model: BTreeSet<String>,
}

impl DeployedModuleView {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        module_path: ModulePath,
        instances: Vec<InstanceView>,
        instances_model: BTreeSet<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let version = version.into();
        only_printable("module name", &name)?;
        only_printable("module version", &version)?;
        Ok(Self {
            name,
            version,
            module_path,
            instances,
            instances_model,
        })
    }
}

/// The full platform snapshot rebuilt from the authoritative event log.
/// Wire field names follow the platform REST contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct PlatformView {
    pub application_name: String,
    pub platform_name: String,
    pub version: String,
    #[serde(rename = "production")]
    pub is_production_platform: bool,
    pub version_id: i64,
    pub global_properties: Vec<ValuedProperty>,
    #[serde(rename = "modules")]
    pub deployed_modules: Vec<DeployedModuleView>,
}

impl PlatformView {
    pub fn new(
        application_name: impl Into<String>,
        platform_name: impl Into<String>,
        version: impl Into<String>,
        is_production_platform: bool,
        version_id: i64,
        global_properties: Vec<ValuedProperty>,
        deployed_modules: Vec<DeployedModuleView>,
    ) -> Result<Self, ValidationError> {
        let application_name = application_name.into();
        let platform_name = platform_name.into();
        let version = version.into();
        only_printable("application_name", &application_name)?;
        only_printable("platform_name", &platform_name)?;
        only_printable("version", &version)?;
        Ok(Self {
            application_name,
            platform_name,
            version,
            is_production_platform,
            version_id,
            global_properties,
            deployed_modules,
        })
    }
}
