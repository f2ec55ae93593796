//! Component invocation errors.

/// Error raised when a host invocation cannot be resolved to markup.
///
/// Rendering a props struct directly never fails; these errors only come
/// from looking up components by name and mapping attributes onto props.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComponentError {
    /// No component is registered under this name.
    #[error("Unknown component: {0}")]
    UnknownComponent(String),
    /// A required attribute was not supplied.
    #[error("Component {component} requires attribute `{attribute}`")]
    MissingAttribute {
        /// Component name (e.g., "`HeroBanner`").
        component: String,
        /// Attribute key (e.g., "title").
        attribute: String,
    },
    /// The invocation is not a `<Name ... />` tag.
    #[error("Invalid component tag: {0}")]
    InvalidTag(String),
}
