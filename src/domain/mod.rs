//! Shared component abstractions: the field-type tags, the polymorphic
//! capability common to fields and containers, and form metadata.

use serde::{Deserialize, Serialize};

/// Enumerated field-type tags with their wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    NumberInput,
    TextInput,
    Checkbox,
    Button,
    Panel,
}

impl FieldType {
    /// Wire string emitted in the exported JSON, e.g. `number-input`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::NumberInput => "number-input",
            FieldType::TextInput => "text-input",
            FieldType::Checkbox => "checkbox",
            FieldType::Button => "button",
            FieldType::Panel => "panel",
        }
    }

    /// Parse an authored field-type override. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<FieldType> {
        match s {
            "number-input" => Some(FieldType::NumberInput),
            "text-input" => Some(FieldType::TextInput),
            "checkbox" => Some(FieldType::Checkbox),
            "button" => Some(FieldType::Button),
            "panel" => Some(FieldType::Panel),
            _ => None,
        }
    }
}

/// Capability shared by every form component model.
///
/// Variants diverge deliberately in how they answer: fields and panels
/// read `enabled`/`visible` from authored content, while the form container
/// fixes them as structural facts. The defaults here are the baseline;
/// each variant supplies its own answers.
pub trait FormComponent {
    /// Unique identifier, when the component carries one.
    fn id(&self) -> Option<&str> {
        None
    }

    /// The component's field type. `None` for components that structurally
    /// have no field type (the form container).
    fn field_type(&self) -> Option<FieldType>;

    fn enabled(&self) -> bool {
        true
    }

    fn visible(&self) -> bool {
        true
    }
}

/// Form metadata referenced by a container. Owned separately from the
/// container model and never derived from its value map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormMetaData {
    /// Version of the form model definition.
    pub version: String,
    /// Expression grammar the form's rules are written in.
    pub grammar: String,
}

impl Default for FormMetaData {
    fn default() -> Self {
        Self {
            version: "0.0.1".to_string(),
            grammar: "json-formula-1.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_wire_round_trip() {
        for ft in [
            FieldType::NumberInput,
            FieldType::TextInput,
            FieldType::Checkbox,
            FieldType::Button,
            FieldType::Panel,
        ] {
            assert_eq!(FieldType::parse(ft.as_str()), Some(ft));
        }
        assert_eq!(FieldType::parse("data-grid"), None);
    }

    #[test]
    fn test_field_type_serde_uses_wire_string() {
        let json = serde_json::to_string(&FieldType::NumberInput).unwrap();
        assert_eq!(json, "\"number-input\"");
    }
}
