//! Resource-type dispatch: resolves an authored resource to the component
//! model registered for its structural type.

use crate::components::{FormContainer, NumberInput, Panel};
use crate::content::{DocumentResolver, Resource};
use crate::domain::FormMetaData;
use crate::export::{ExportView, JsonExport};
use serde_json::Value;
use std::collections::HashMap;

mod error;

pub use error::AdaptError;

pub const RT_NUMBER_INPUT: &str = "core/fd/components/form/numberinput/v1/numberinput";
pub const RT_FORM_CONTAINER: &str = "core/fd/components/form/formcontainer/v1/formcontainer";
pub const RT_PANEL: &str = "core/fd/components/form/panelcontainer/v1/panelcontainer";

/// Per-request inputs the models need beyond the resource itself.
#[derive(Default)]
pub struct AdaptContext<'a> {
    /// Path of page currently being rendered; containers expose it base64
    /// encoded.
    pub current_page_path: String,
    /// Metadata handed to container models. Owned by the caller's request
    /// scope, never derived from the value map.
    pub meta_data: FormMetaData,
    /// Resolver for externally stored form model documents.
    pub resolver: Option<&'a dyn DocumentResolver>,
    /// Serialized prefill/submission data for container models.
    pub form_data: Option<String>,
}

/// The model kinds a resource type can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    NumberInput,
    FormContainer,
    Panel,
}

/// A populated model produced by adaptation.
#[derive(Debug, Clone)]
pub enum AdaptedModel {
    NumberInput(NumberInput),
    FormContainer(FormContainer),
    Panel(Panel),
}

impl JsonExport for AdaptedModel {
    fn export_json(&self, view: ExportView) -> Value {
        match self {
            AdaptedModel::NumberInput(model) => model.export_json(view),
            AdaptedModel::FormContainer(model) => model.export_json(view),
            AdaptedModel::Panel(model) => model.export_json(view),
        }
    }
}

/// Registry mapping resource types onto component models.
pub struct ComponentRegistry {
    bindings: HashMap<String, ComponentKind>,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };
        registry.register(RT_NUMBER_INPUT, ComponentKind::NumberInput);
        registry.register(RT_FORM_CONTAINER, ComponentKind::FormContainer);
        registry.register(RT_PANEL, ComponentKind::Panel);
        registry
    }
}

impl ComponentRegistry {
    /// Registers (or re-registers) a resource type binding; later component
    /// versions map their own resource type onto an existing kind.
    pub fn register(&mut self, resource_type: impl Into<String>, kind: ComponentKind) {
        self.bindings.insert(resource_type.into(), kind);
    }

    /// Adapts the resource to the model registered for its resource type.
    pub fn adapt(
        &self,
        resource: &Resource,
        ctx: &AdaptContext<'_>,
    ) -> Result<AdaptedModel, AdaptError> {
        let kind = self
            .bindings
            .get(resource.resource_type.as_str())
            .copied()
            .ok_or_else(|| AdaptError::UnknownResourceType {
                resource_type: resource.resource_type.clone(),
                path: resource.path.clone(),
            })?;
        tracing::debug!("Adapting {} as {:?}", resource.path, kind);
        Ok(match kind {
            ComponentKind::NumberInput => AdaptedModel::NumberInput(NumberInput::from_resource(resource)),
            ComponentKind::FormContainer => AdaptedModel::FormContainer(FormContainer::from_resource(
                resource,
                &ctx.current_page_path,
                ctx.meta_data.clone(),
                ctx.resolver,
                ctx.form_data.clone(),
            )),
            ComponentKind::Panel => AdaptedModel::Panel(Panel::from_resource(resource)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapt_known_resource_types() {
        let registry = ComponentRegistry::default();
        let ctx = AdaptContext::default();

        let field = registry
            .adapt(&Resource::new("/f/jcr:content/amount", RT_NUMBER_INPUT), &ctx)
            .unwrap();
        assert!(matches!(field, AdaptedModel::NumberInput(_)));

        let form = registry
            .adapt(&Resource::new("/f/jcr:content", RT_FORM_CONTAINER), &ctx)
            .unwrap();
        assert!(matches!(form, AdaptedModel::FormContainer(_)));

        let panel = registry
            .adapt(&Resource::new("/f/jcr:content/address", RT_PANEL), &ctx)
            .unwrap();
        assert!(matches!(panel, AdaptedModel::Panel(_)));
    }

    #[test]
    fn test_unknown_resource_type_is_an_error() {
        let registry = ComponentRegistry::default();
        let resource = Resource::new("/f/jcr:content/custom", "acme/components/custom");
        let err = registry.adapt(&resource, &AdaptContext::default()).unwrap_err();
        match err {
            AdaptError::UnknownResourceType { resource_type, path } => {
                assert_eq!(resource_type, "acme/components/custom");
                assert_eq!(path, "/f/jcr:content/custom");
            }
        }
    }

    #[test]
    fn test_register_additional_version() {
        let mut registry = ComponentRegistry::default();
        registry.register(
            "core/fd/components/form/numberinput/v2/numberinput",
            ComponentKind::NumberInput,
        );
        let resource = Resource::new(
            "/f/jcr:content/amount",
            "core/fd/components/form/numberinput/v2/numberinput",
        );
        let model = registry.adapt(&resource, &AdaptContext::default()).unwrap();
        assert!(matches!(model, AdaptedModel::NumberInput(_)));
    }
}
