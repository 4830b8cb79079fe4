//! Panel container model: the container variant that, unlike the form
//! container, carries a field type and authored enablement/visibility.

use crate::components::FieldBase;
use crate::content::Resource;
use crate::domain::{FieldType, FormComponent};

#[derive(Debug, Clone)]
pub struct Panel {
    base: FieldBase,
    item_names: Vec<String>,
}

impl Panel {
    pub fn from_resource(resource: &Resource) -> Self {
        Self {
            base: FieldBase::from_resource(resource),
            item_names: resource
                .children
                .iter()
                .map(|child| child.name().to_string())
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn title(&self) -> &str {
        self.base.title()
    }

    pub fn description(&self) -> &str {
        self.base.description()
    }

    /// Names of the child components laid out inside the panel.
    pub fn item_names(&self) -> &[String] {
        &self.item_names
    }
}

impl FormComponent for Panel {
    fn field_type(&self) -> Option<FieldType> {
        Some(self.base.field_type_or(FieldType::Panel))
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
    use crate::content::{PN_ENABLED, PN_VISIBLE};
    use serde_json::json;

    #[test]
    fn test_panel_carries_a_field_type() {
        let panel = Panel::from_resource(&Resource::new("/f/jcr:content/address", "rt"));
        assert_eq!(panel.field_type(), Some(FieldType::Panel));
    }

    #[test]
    fn test_panel_honors_authored_flags() {
        let resource = Resource::new("/f/jcr:content/address", "rt")
            .with_property(PN_ENABLED, json!(false))
            .with_property(PN_VISIBLE, json!(false));
        let panel = Panel::from_resource(&resource);
        assert!(!panel.enabled());
        assert!(!panel.visible());
    }

    #[test]
    fn test_item_names_from_children() {
        let resource = Resource::new("/f/jcr:content/address", "rt")
            .with_child(Resource::new("/f/jcr:content/address/street", "rt"))
            .with_child(Resource::new("/f/jcr:content/address/zip", "rt"));
        let panel = Panel::from_resource(&resource);
        assert_eq!(panel.item_names(), ["street", "zip"]);
    }
}
