//! Markup fragments and HTML escaping.
//!
//! Every string a component receives is escaped on the way out, with one
//! exception: values wrapped in [`Markup`] are written verbatim. Wrapping a
//! string in [`Markup::trusted`] is the caller asserting that it is safe.

use std::fmt;

/// A fragment of markup that is emitted without escaping.
///
/// Component render output is returned as `Markup`, and pre-rendered content
/// handed to a component (such as the demo output panel) must be converted
/// into `Markup` explicitly.
///
/// # Example
///
/// ```
/// use rw_components::Markup;
///
/// let output = Markup::trusted("<b>2</b>");
/// assert_eq!(output.as_str(), "<b>2</b>");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(transparent))]
pub struct Markup(String);

impl Markup {
    /// Wrap a string the caller vouches for as safe markup.
    #[must_use]
    pub fn trusted(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Escape plain text into markup.
    #[must_use]
    pub fn text(s: &str) -> Self {
        Self(escape_html(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

/// Escape text for use in HTML element content and quoted attribute values.
///
/// # Example
///
/// ```
/// use rw_components::escape_html;
///
/// assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Treat empty optional strings the same as absent ones.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("\"hello\""), "&quot;hello&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_trusted_is_verbatim() {
        let markup = Markup::trusted("<em>x</em>");
        assert_eq!(markup.to_string(), "<em>x</em>");
    }

    #[test]
    fn test_text_is_escaped() {
        let markup = Markup::text("<em>x</em>");
        assert_eq!(markup.as_str(), "&lt;em&gt;x&lt;/em&gt;");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("x")), Some("x"));
    }
}
