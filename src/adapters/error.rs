//! Adaptation layer error types

use thiserror::Error;

/// Errors that can occur when adapting a resource to a component model.
#[derive(Debug, Error)]
pub enum AdaptError {
    /// No model is registered for the resource's structural type
    #[error("No component model registered for resource type '{resource_type}' at {path}")]
    UnknownResourceType { resource_type: String, path: String },
}
