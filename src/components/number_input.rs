//! Number input field model.

use crate::components::FieldBase;
use crate::content::{Resource, PN_FRAC_DIGITS, PN_LEAD_DIGITS};
use crate::domain::{FieldType, FormComponent};
use serde_json::Value;

/// Model for the number input component: the shared field base plus the
/// numeric digit-count properties. All accessors are total pass-throughs
/// over possibly-absent authored data.
#[derive(Debug, Clone)]
pub struct NumberInput {
    base: FieldBase,
    lead_digits: Option<i32>,
    frac_digits: Option<i32>,
}

impl NumberInput {
    pub fn from_resource(resource: &Resource) -> Self {
        Self {
            base: FieldBase::from_resource(resource),
            lead_digits: resource.properties.get_i32(PN_LEAD_DIGITS),
            frac_digits: resource.properties.get_i32(PN_FRAC_DIGITS),
        }
    }

    fn default_field_type() -> FieldType {
        FieldType::NumberInput
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn minimum(&self) -> Option<i64> {
        self.base.minimum()
    }

    pub fn maximum(&self) -> Option<i64> {
        self.base.maximum()
    }

    pub fn exclusive_minimum(&self) -> Option<i64> {
        self.base.exclusive_minimum()
    }

    pub fn exclusive_maximum(&self) -> Option<i64> {
        self.base.exclusive_maximum()
    }

    pub fn lead_digits(&self) -> Option<i32> {
        self.lead_digits
    }

    pub fn frac_digits(&self) -> Option<i32> {
        self.frac_digits
    }

    /// Fresh map per call: the base bag plus `leadDigits`/`fracDigits` when
    /// authored. Mutating one returned map never affects another.
    pub fn custom_properties(&self) -> serde_json::Map<String, Value> {
        let mut custom_properties = self.base.custom_properties();
        if let Some(lead_digits) = self.lead_digits {
            custom_properties.insert(PN_LEAD_DIGITS.to_string(), Value::from(lead_digits));
        }
        if let Some(frac_digits) = self.frac_digits {
            custom_properties.insert(PN_FRAC_DIGITS.to_string(), Value::from(frac_digits));
        }
        custom_properties
    }
}

impl FormComponent for NumberInput {
    fn field_type(&self) -> Option<FieldType> {
        Some(self.base.field_type_or(Self::default_field_type()))
    }

    fn enabled(&self) -> bool {
        self.base.enabled()
    }

    fn visible(&self) -> bool {
        self.base.visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PN_MAXIMUM, PN_MINIMUM, PN_PROPERTIES};
    use serde_json::json;

    fn resource() -> Resource {
        Resource::new("/content/forms/demo/jcr:content/amount", "rt")
    }

    #[test]
    fn test_absent_properties_are_none() {
        let model = NumberInput::from_resource(&resource());
        assert_eq!(model.lead_digits(), None);
        assert_eq!(model.frac_digits(), None);
        assert_eq!(model.minimum(), None);
        assert_eq!(model.maximum(), None);
        assert_eq!(model.exclusive_minimum(), None);
        assert_eq!(model.exclusive_maximum(), None);
    }

    #[test]
    fn test_authored_values_returned_exactly() {
        let r = resource()
            .with_property(PN_LEAD_DIGITS, json!(2))
            .with_property(PN_FRAC_DIGITS, json!(4))
            .with_property(PN_MINIMUM, json!(-10))
            .with_property(PN_MAXIMUM, json!(10));
        let model = NumberInput::from_resource(&r);
        assert_eq!(model.lead_digits(), Some(2));
        assert_eq!(model.frac_digits(), Some(4));
        assert_eq!(model.minimum(), Some(-10));
        assert_eq!(model.maximum(), Some(10));
    }

    #[test]
    fn test_custom_properties_merge_digits_conditionally() {
        let r = resource()
            .with_property(PN_PROPERTIES, json!({"fd:path": "/demo"}))
            .with_property(PN_LEAD_DIGITS, json!(2));
        let model = NumberInput::from_resource(&r);

        let props = model.custom_properties();
        assert_eq!(props.get("fd:path"), Some(&json!("/demo")));
        assert_eq!(props.get(PN_LEAD_DIGITS), Some(&json!(2)));
        assert!(!props.contains_key(PN_FRAC_DIGITS));
    }

    #[test]
    fn test_custom_properties_calls_are_independent() {
        let r = resource().with_property(PN_FRAC_DIGITS, json!(3));
        let model = NumberInput::from_resource(&r);

        let mut first = model.custom_properties();
        first.insert("extra".to_string(), json!("x"));
        let second = model.custom_properties();
        assert_eq!(second.get(PN_FRAC_DIGITS), Some(&json!(3)));
        assert!(!second.contains_key("extra"));
    }

    #[test]
    fn test_default_field_type() {
        let model = NumberInput::from_resource(&resource());
        assert_eq!(model.field_type(), Some(FieldType::NumberInput));
    }
}
