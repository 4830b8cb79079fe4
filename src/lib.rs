//! # formcore - form component content models
//!
//! formcore is the server-side model layer of a forms system: it projects
//! authored component content (a repository resource's value map) onto typed,
//! read-only view models and exports them to JSON under audience-scoped views.
//!
//! ## Features
//!
//! - **Typed models**: `NumberInput`, `FormContainer`, `Panel` with explicit
//!   per-property defaults instead of reflection-driven binding
//! - **Optional everywhere**: a missing authored property is `None` or a
//!   documented default, never an error
//! - **View-scoped export**: `Default` and `Author` export views control which
//!   properties reach the emitted JSON
//! - **Resource-type dispatch**: a registry adapts an opaque resource to the
//!   model registered for its resource type
//!
//! ## Quick Start
//!
//! ```rust
//! use formcore::adapters::{AdaptContext, ComponentRegistry};
//! use formcore::content::Resource;
//! use formcore::export::{ExportView, JsonExport};
//!
//! let resource = Resource::new(
//!     "/content/forms/demo/jcr:content/numberinput",
//!     formcore::adapters::RT_NUMBER_INPUT,
//! );
//! let registry = ComponentRegistry::default();
//! let model = registry.adapt(&resource, &AdaptContext::default())?;
//! let json = model.export_json(ExportView::Default);
//! # let _ = json;
//! # Ok::<(), formcore::adapters::AdaptError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Content**: the value-map source and resource shape (inbound data)
//! - **Domain**: shared component capability and metadata types
//! - **Components**: concrete field and container models
//! - **Export**: explicit view-filtered JSON projection
//! - **Adapters**: resource-type dispatch on top of everything else

pub mod adapters;
pub mod components;
pub mod content;
pub mod domain;
pub mod export;
