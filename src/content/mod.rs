//! Authored content: the value-map source backing each component instance
//! and the resource shape the adaptation layer dispatches on.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod document;

pub use document::{DocumentResolver, FsDocumentResolver};

/// Resource property holding the lead (integer) digit count of a number input.
pub const PN_LEAD_DIGITS: &str = "leadDigits";
/// Resource property holding the fractional digit count of a number input.
pub const PN_FRAC_DIGITS: &str = "fracDigits";
pub const PN_MINIMUM: &str = "minimum";
pub const PN_MAXIMUM: &str = "maximum";
pub const PN_EXCLUSIVE_MINIMUM: &str = "exclusiveMinimum";
pub const PN_EXCLUSIVE_MAXIMUM: &str = "exclusiveMaximum";
/// Resource property that defines the document path containing the form model json.
pub const PN_RUNTIME_DOCUMENT_PATH: &str = "formModelDocumentPath";
pub const PN_NAME: &str = "name";
pub const PN_TITLE: &str = "jcr:title";
pub const PN_DESCRIPTION: &str = "jcr:description";
pub const PN_FIELD_TYPE: &str = "fieldType";
pub const PN_ENABLED: &str = "enabled";
pub const PN_VISIBLE: &str = "visible";
pub const PN_THANK_YOU_MESSAGE: &str = "thankYouMessage";
pub const PN_THANK_YOU_PAGE: &str = "thankYouPage";
pub const PN_DOR_TEMPLATE_REF: &str = "dorTemplateRef";
pub const PN_DOR_TYPE: &str = "dorType";
/// Nested object holding authored extension properties not covered by a
/// named accessor; seeds a field's custom-properties bag.
pub const PN_PROPERTIES: &str = "properties";

/// Key-value view over one component's authored properties.
///
/// Every getter uses the optional injection strategy: a missing key, or a
/// value of the wrong JSON type, yields `None` (or the caller's default) and
/// never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValueMap(serde_json::Map<String, Value>);

impl ValueMap {
    pub fn new() -> Self {
        Self(serde_json::Map::new())
    }

    /// Raw access to an authored value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Owned string value, falling back to `default` when absent.
    pub fn get_string_or(&self, name: &str, default: &str) -> String {
        self.get_str(name).unwrap_or(default).to_string()
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.0.get(name).and_then(Value::as_i64)
    }

    pub fn get_i32(&self, name: &str) -> Option<i32> {
        self.0
            .get(name)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
    }

    pub fn get_bool_or(&self, name: &str, default: bool) -> bool {
        self.0.get(name).and_then(Value::as_bool).unwrap_or(default)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// The whole map as a JSON object value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// An authored repository resource: path, structural type, value map and
/// inline child items. Read-only once handed to the adaptation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub path: String,
    pub resource_type: String,
    #[serde(default)]
    pub properties: ValueMap,
    #[serde(default)]
    pub children: Vec<Resource>,
}

impl Resource {
    pub fn new(path: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            resource_type: resource_type.into(),
            properties: ValueMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name, value);
        self
    }

    pub fn with_child(mut self, child: Resource) -> Self {
        self.children.push(child);
        self
    }

    /// Resource name: the last segment of the repository path.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_key_is_none() {
        let vm = ValueMap::new();
        assert_eq!(vm.get_i64(PN_MINIMUM), None);
        assert_eq!(vm.get_str(PN_TITLE), None);
        assert_eq!(vm.get_string_or(PN_TITLE, ""), "");
        assert!(vm.get_bool_or(PN_ENABLED, true));
    }

    #[test]
    fn test_present_value_returned_untransformed() {
        let mut vm = ValueMap::new();
        vm.insert(PN_MINIMUM, json!(-42));
        vm.insert(PN_LEAD_DIGITS, json!(7));
        assert_eq!(vm.get_i64(PN_MINIMUM), Some(-42));
        assert_eq!(vm.get_i32(PN_LEAD_DIGITS), Some(7));
    }

    #[test]
    fn test_wrong_typed_value_is_none() {
        let mut vm = ValueMap::new();
        vm.insert(PN_MINIMUM, json!("ten"));
        vm.insert(PN_LEAD_DIGITS, json!(2.5));
        assert_eq!(vm.get_i64(PN_MINIMUM), None);
        assert_eq!(vm.get_i32(PN_LEAD_DIGITS), None);
    }

    #[test]
    fn test_resource_name_is_last_path_segment() {
        let r = Resource::new("/content/forms/demo/jcr:content/numberinput", "rt");
        assert_eq!(r.name(), "numberinput");
    }
}
