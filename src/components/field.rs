//! Shared attributes of every field model, bound explicitly from the value
//! map with per-property defaults.

use crate::content::{
    Resource, ValueMap, PN_DESCRIPTION, PN_ENABLED, PN_EXCLUSIVE_MAXIMUM, PN_EXCLUSIVE_MINIMUM,
    PN_FIELD_TYPE, PN_MAXIMUM, PN_MINIMUM, PN_NAME, PN_PROPERTIES, PN_TITLE, PN_VISIBLE,
};
use crate::domain::FieldType;
use serde_json::Value;

/// Base field model: the attributes common to all concrete field models.
///
/// Binding is explicit: every property name, type and default is spelled out
/// in [`FieldBase::from_value_map`]. No cross-field invariant is checked
/// here; `minimum > maximum` passes through untouched and is left to an
/// external validation collaborator.
#[derive(Debug, Clone)]
pub struct FieldBase {
    name: String,
    title: String,
    description: String,
    minimum: Option<i64>,
    maximum: Option<i64>,
    exclusive_minimum: Option<i64>,
    exclusive_maximum: Option<i64>,
    field_type_override: Option<FieldType>,
    enabled: bool,
    visible: bool,
    custom_properties: serde_json::Map<String, Value>,
}

impl FieldBase {
    pub fn from_value_map(vm: &ValueMap) -> Self {
        let custom_properties = match vm.get(PN_PROPERTIES) {
            Some(Value::Object(map)) => map.clone(),
            _ => serde_json::Map::new(),
        };
        Self {
            name: vm.get_string_or(PN_NAME, ""),
            title: vm.get_string_or(PN_TITLE, ""),
            description: vm.get_string_or(PN_DESCRIPTION, ""),
            minimum: vm.get_i64(PN_MINIMUM),
            maximum: vm.get_i64(PN_MAXIMUM),
            exclusive_minimum: vm.get_i64(PN_EXCLUSIVE_MINIMUM),
            exclusive_maximum: vm.get_i64(PN_EXCLUSIVE_MAXIMUM),
            field_type_override: vm.get_str(PN_FIELD_TYPE).and_then(FieldType::parse),
            enabled: vm.get_bool_or(PN_ENABLED, true),
            visible: vm.get_bool_or(PN_VISIBLE, true),
            custom_properties,
        }
    }

    /// Binds from the resource's value map, falling back to the resource
    /// name when no `name` property was authored.
    pub fn from_resource(resource: &Resource) -> Self {
        let mut base = Self::from_value_map(&resource.properties);
        if base.name.is_empty() {
            base.name = resource.name().to_string();
        }
        base
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn minimum(&self) -> Option<i64> {
        self.minimum
    }

    pub fn maximum(&self) -> Option<i64> {
        self.maximum
    }

    pub fn exclusive_minimum(&self) -> Option<i64> {
        self.exclusive_minimum
    }

    pub fn exclusive_maximum(&self) -> Option<i64> {
        self.exclusive_maximum
    }

    /// Effective field type: the authored override when present, otherwise
    /// the concrete model's default.
    pub fn field_type_or(&self, default: FieldType) -> FieldType {
        self.field_type_override.unwrap_or(default)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Fresh copy of the base custom-properties bag. Callers may extend or
    /// mutate the returned map without affecting later calls.
    pub fn custom_properties(&self) -> serde_json::Map<String, Value> {
        self.custom_properties.clone()
    }
}
