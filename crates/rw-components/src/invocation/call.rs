//! Component tag parsing: `<Name key="value" />`.

use super::ComponentArgs;
use crate::error::ComponentError;

/// A parsed component invocation.
///
/// # Example
///
/// ```
/// use rw_components::ComponentCall;
///
/// let call = ComponentCall::parse(r#"<HeroBanner title="Hello" />"#).unwrap();
/// assert_eq!(call.name, "HeroBanner");
/// assert_eq!(call.args.get("title"), Some("Hello"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentCall {
    /// Component name from the tag.
    pub name: String,
    /// Attributes from the tag.
    pub args: ComponentArgs,
}

impl ComponentCall {
    /// Parse a self-closing (`<Name ... />`) or open (`<Name ...>`) tag.
    pub fn parse(tag: &str) -> Result<Self, ComponentError> {
        let invalid = || ComponentError::InvalidTag(tag.to_owned());

        let inner = tag.trim().strip_prefix('<').ok_or_else(invalid)?;
        let inner = inner
            .strip_suffix("/>")
            .or_else(|| inner.strip_suffix('>'))
            .ok_or_else(invalid)?
            .trim();

        let name_end = inner.find(char::is_whitespace).unwrap_or(inner.len());
        let name = &inner[..name_end];
        if !is_component_name(name) {
            return Err(invalid());
        }

        Ok(Self {
            name: name.to_owned(),
            args: ComponentArgs::parse(&inner[name_end..]),
        })
    }
}

/// Component names start with a letter and contain letters, digits, `-` or `_`.
fn is_component_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
