//! Code demo block: a titled code sample with an optional output panel.

use std::fmt::Write;

use crate::markup::{Markup, escape_html, non_empty};

/// Language tag used when a demo does not name one.
pub const DEFAULT_LANGUAGE: &str = "typescript";

/// Properties for a code demo block.
///
/// # Example
///
/// ```
/// use rw_components::{DemoBlock, Markup};
///
/// let html = DemoBlock::new("Add", "1+1")
///     .with_output(Markup::trusted("<b>2</b>"))
///     .render();
/// assert!(html.as_str().contains(r#"<div class="output-content"><b>2</b></div>"#));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct DemoBlock {
    pub title: String,
    pub code: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Language tag for the code; [`DEFAULT_LANGUAGE`] when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub language: Option<String>,
    /// Pre-rendered output, embedded verbatim.
    #[cfg_attr(feature = "serde", serde(default))]
    pub output: Option<Markup>,
}

impl DemoBlock {
    #[must_use]
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: Markup) -> Self {
        self.output = Some(output);
        self
    }

    /// Language tag written into the code element's class.
    #[must_use]
    pub fn resolved_language(&self) -> &str {
        non_empty(self.language.as_deref()).unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Render the demo block.
    #[must_use]
    pub fn render(&self) -> Markup {
        let mut html = String::with_capacity(256 + self.code.len());

        html.push_str(r#"<div class="code-demo"><div class="code-demo-header">"#);
        let _ = write!(
            html,
            r#"<h3 class="code-demo-title">{}</h3>"#,
            escape_html(&self.title)
        );
        if let Some(description) = non_empty(self.description.as_deref()) {
            let _ = write!(
                html,
                r#"<p class="code-demo-desc">{}</p>"#,
                escape_html(description)
            );
        }
        html.push_str("</div>");

        let _ = write!(
            html,
            r#"<div class="code-demo-content"><pre class="code-demo-code"><code class="language-{}">{}</code></pre>"#,
            escape_html(self.resolved_language()),
            escape_html(&self.code)
        );
        if let Some(output) = self.output.as_ref().filter(|o| !o.is_empty()) {
            let _ = write!(
                html,
                r#"<div class="code-demo-output"><span class="output-label">Output:</span><div class="output-content">{output}</div></div>"#
            );
        }
        html.push_str("</div></div>");

        Markup::trusted(html)
    }
}
