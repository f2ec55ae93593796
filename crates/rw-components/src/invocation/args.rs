//! Component attribute parsing.
//!
//! Parses the `key="value" key='value' key=value` syntax used inside a
//! component tag.

use std::collections::HashMap;

use crate::error::ComponentError;

/// Attributes supplied to a component invocation.
///
/// # Example
///
/// ```
/// use rw_components::ComponentArgs;
///
/// let args = ComponentArgs::parse(r#"title="Hello World" btnLink='/start' level=2"#);
/// assert_eq!(args.get("title"), Some("Hello World"));
/// assert_eq!(args.get("btnLink"), Some("/start"));
/// assert_eq!(args.get("level"), Some("2"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentArgs {
    /// Key-value attributes.
    pub attrs: HashMap<String, String>,
}

impl ComponentArgs {
    /// Parse an attribute string into structured arguments.
    ///
    /// Later occurrences of a key replace earlier ones. Bare words without a
    /// value are ignored.
    #[must_use]
    pub fn parse(attrs_str: &str) -> Self {
        let mut args = Self::default();
        let mut remaining = attrs_str.trim();

        while !remaining.is_empty() {
            if let Some((key, value, rest)) = parse_key_value(remaining) {
                args.attrs.insert(key.to_owned(), value.to_owned());
                remaining = rest.trim_start();
            } else {
                // Skip the unrecognized token
                let end = remaining
                    .find(char::is_whitespace)
                    .unwrap_or(remaining.len());
                remaining = remaining[end..].trim_start();
            }
        }

        args
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Get an attribute that the component cannot render without.
    ///
    /// An attribute that is present but empty is returned as-is.
    pub fn require(&self, component: &str, key: &str) -> Result<&str, ComponentError> {
        self.get(key).ok_or_else(|| ComponentError::MissingAttribute {
            component: component.to_owned(),
            attribute: key.to_owned(),
        })
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ComponentArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attrs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse a key-value pair from the front of the attributes string.
///
/// Supports: `key="value"`, `key='value'`, `key=value`
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let key_end = s.find(|c: char| c == '=' || c.is_whitespace())?;
    let key = &s[..key_end];
    if key.is_empty() {
        return None;
    }

    let after_eq = s[key_end..].trim_start().strip_prefix('=')?.trim_start();

    if let Some(stripped) = after_eq.strip_prefix('"') {
        let end_quote = stripped.find('"')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else if let Some(stripped) = after_eq.strip_prefix('\'') {
        let end_quote = stripped.find('\'')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else {
        let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
        Some((key, &after_eq[..end], &after_eq[end..]))
    }
}
