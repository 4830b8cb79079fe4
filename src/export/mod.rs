//! Explicit view-scoped JSON export.
//!
//! The export surface is spelled out per model instead of being derived from
//! the model's fields: properties the rendering pipeline consumes internally
//! (`id`, `model`, `documentPath`, `encodedCurrentPagePath`,
//! `thankYouMessage`, `thankYouPage`) never reach the exported JSON, and
//! author-only properties are included solely under [`ExportView::Author`].

use crate::components::{FormContainer, NumberInput, Panel};
use crate::domain::FormComponent;
use serde_json::{json, Map, Value};

/// Audience of an export: `Default` is the published/runtime view, `Author`
/// additionally carries authoring-only properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportView {
    Default,
    Author,
}

/// View-filtered JSON projection of a model.
pub trait JsonExport {
    fn export_json(&self, view: ExportView) -> Value;
}

impl JsonExport for NumberInput {
    fn export_json(&self, _view: ExportView) -> Value {
        let mut out = Map::new();
        out.insert("name".to_string(), json!(self.name()));
        if let Some(field_type) = self.field_type() {
            out.insert("fieldType".to_string(), json!(field_type.as_str()));
        }
        out.insert("enabled".to_string(), json!(self.enabled()));
        out.insert("visible".to_string(), json!(self.visible()));
        // absent constraints are omitted, not null
        if let Some(v) = self.minimum() {
            out.insert("minimum".to_string(), json!(v));
        }
        if let Some(v) = self.maximum() {
            out.insert("maximum".to_string(), json!(v));
        }
        if let Some(v) = self.exclusive_minimum() {
            out.insert("exclusiveMinimum".to_string(), json!(v));
        }
        if let Some(v) = self.exclusive_maximum() {
            out.insert("exclusiveMaximum".to_string(), json!(v));
        }
        let properties = self.custom_properties();
        if !properties.is_empty() {
            out.insert("properties".to_string(), Value::Object(properties));
        }
        Value::Object(out)
    }
}

impl JsonExport for FormContainer {
    fn export_json(&self, view: ExportView) -> Value {
        let meta = self.meta_data();
        let mut out = Map::new();
        out.insert(
            "metadata".to_string(),
            json!({ "version": meta.version, "grammar": meta.grammar }),
        );
        out.insert("title".to_string(), json!(self.title()));
        out.insert("description".to_string(), json!(self.description()));
        out.insert("data".to_string(), json!(self.form_data()));
        if view == ExportView::Author {
            out.insert("dorTemplateRef".to_string(), json!(self.dor_template_ref()));
            out.insert("dorType".to_string(), json!(self.dor_type()));
        }
        Value::Object(out)
    }
}

impl JsonExport for Panel {
    fn export_json(&self, _view: ExportView) -> Value {
        let mut out = Map::new();
        out.insert("name".to_string(), json!(self.name()));
        if let Some(field_type) = self.field_type() {
            out.insert("fieldType".to_string(), json!(field_type.as_str()));
        }
        out.insert("enabled".to_string(), json!(self.enabled()));
        out.insert("visible".to_string(), json!(self.visible()));
        out.insert("title".to_string(), json!(self.title()));
        out.insert("description".to_string(), json!(self.description()));
        if !self.item_names().is_empty() {
            out.insert("items".to_string(), json!(self.item_names()));
        }
        Value::Object(out)
    }
}
