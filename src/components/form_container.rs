//! Form container model: the form root.

use crate::content::{
    DocumentResolver, Resource, PN_DESCRIPTION, PN_DOR_TEMPLATE_REF, PN_DOR_TYPE,
    PN_RUNTIME_DOCUMENT_PATH, PN_THANK_YOU_MESSAGE, PN_THANK_YOU_PAGE, PN_TITLE,
};
use crate::domain::{FieldType, FormComponent, FormMetaData};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::Value;

/// Model for the form container component.
///
/// `field_type`, `enabled` and `visible` are structural facts here, not
/// authored content: a form has no field type and is always enabled and
/// visible, unlike a panel. The constructor never reads those properties
/// from the value map, so no authored override is possible.
#[derive(Debug, Clone)]
pub struct FormContainer {
    meta_data: FormMetaData,
    id: Option<String>,
    title: String,
    description: String,
    model: serde_json::Map<String, Value>,
    document_path: Option<String>,
    encoded_current_page_path: String,
    thank_you_message: String,
    thank_you_page: String,
    form_data: String,
    dor_template_ref: String,
    dor_type: String,
}

impl FormContainer {
    /// Binds the container from its resource and the per-request inputs the
    /// model needs beyond the value map.
    ///
    /// Model sourcing: the document at `formModelDocumentPath` wins when the
    /// property is authored and the document resolves; otherwise the
    /// resource's inline child items are used. A resolution failure is
    /// logged and degrades to the inline items, never an error.
    pub fn from_resource(
        resource: &Resource,
        current_page_path: &str,
        meta_data: FormMetaData,
        resolver: Option<&dyn DocumentResolver>,
        form_data: Option<String>,
    ) -> Self {
        let vm = &resource.properties;
        let document_path = vm.get_str(PN_RUNTIME_DOCUMENT_PATH).map(str::to_string);
        let model = Self::source_model(resource, document_path.as_deref(), resolver);
        Self {
            meta_data,
            id: None,
            title: vm.get_string_or(PN_TITLE, ""),
            description: vm.get_string_or(PN_DESCRIPTION, ""),
            model,
            document_path,
            encoded_current_page_path: BASE64.encode(current_page_path),
            thank_you_message: vm.get_string_or(PN_THANK_YOU_MESSAGE, ""),
            thank_you_page: vm.get_string_or(PN_THANK_YOU_PAGE, ""),
            form_data: form_data.unwrap_or_default(),
            dor_template_ref: vm.get_string_or(PN_DOR_TEMPLATE_REF, ""),
            dor_type: vm.get_string_or(PN_DOR_TYPE, ""),
        }
    }

    fn source_model(
        resource: &Resource,
        document_path: Option<&str>,
        resolver: Option<&dyn DocumentResolver>,
    ) -> serde_json::Map<String, Value> {
        if let (Some(path), Some(resolver)) = (document_path, resolver) {
            match resolver.resolve(path) {
                Ok(model) => return model,
                Err(e) => {
                    tracing::warn!(
                        "Failed to resolve form model document '{}' for {}: {}",
                        path,
                        resource.path,
                        e
                    );
                }
            }
        }
        Self::model_from_items(resource)
    }

    /// Inline-items model: the child components under the container, each
    /// rendered as its value map plus a `name` entry.
    fn model_from_items(resource: &Resource) -> serde_json::Map<String, Value> {
        if resource.children.is_empty() {
            return serde_json::Map::new();
        }
        let items: Vec<Value> = resource
            .children
            .iter()
            .map(|child| {
                let mut item = match child.properties.to_value() {
                    Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };
                item.entry("name".to_string())
                    .or_insert_with(|| Value::String(child.name().to_string()));
                Value::Object(item)
            })
            .collect();
        let mut model = serde_json::Map::new();
        model.insert("items".to_string(), Value::Array(items));
        model
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn meta_data(&self) -> &FormMetaData {
        &self.meta_data
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The derived form model, sourced from the referenced document or the
    /// inline items. Empty when neither is present.
    pub fn model(&self) -> &serde_json::Map<String, Value> {
        &self.model
    }

    pub fn document_path(&self) -> Option<&str> {
        self.document_path.as_deref()
    }

    /// Base64-encoded current page path.
    pub fn encoded_current_page_path(&self) -> &str {
        &self.encoded_current_page_path
    }

    pub fn thank_you_message(&self) -> &str {
        &self.thank_you_message
    }

    pub fn thank_you_page(&self) -> &str {
        &self.thank_you_page
    }

    /// Serialized prefill/submission data.
    pub fn form_data(&self) -> &str {
        &self.form_data
    }

    pub fn dor_template_ref(&self) -> &str {
        &self.dor_template_ref
    }

    pub fn dor_type(&self) -> &str {
        &self.dor_type
    }
}

impl FormComponent for FormContainer {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    // A form container has no field type; containers like panel do.
    fn field_type(&self) -> Option<FieldType> {
        None
    }

    fn enabled(&self) -> bool {
        true
    }

    fn visible(&self) -> bool {
        true
    }
}
