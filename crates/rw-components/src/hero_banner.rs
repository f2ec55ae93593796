//! Hero banner with an optional subtitle and call-to-action.

use std::fmt::Write;

use crate::markup::{Markup, escape_html, non_empty};

/// Properties for a page hero banner.
///
/// The call-to-action is rendered only when both `btn_text` and `btn_link`
/// are non-empty.
///
/// # Example
///
/// ```
/// use rw_components::HeroBanner;
///
/// let html = HeroBanner::new("Welcome")
///     .with_subtitle("Docs for everyone")
///     .with_button("Get started", "/start")
///     .render();
/// assert!(html.as_str().contains(r#"<a href="/start" class="btn btn-primary">Get started</a>"#));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct HeroBanner {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtitle: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub btn_text: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub btn_link: Option<String>,
}

impl HeroBanner {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_button(mut self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.btn_text = Some(text.into());
        self.btn_link = Some(link.into());
        self
    }

    /// Text and target of the call-to-action, if both are present.
    #[must_use]
    pub fn call_to_action(&self) -> Option<(&str, &str)> {
        non_empty(self.btn_text.as_deref()).zip(non_empty(self.btn_link.as_deref()))
    }

    /// Render the banner.
    #[must_use]
    pub fn render(&self) -> Markup {
        let mut html = String::with_capacity(192);

        let _ = write!(
            html,
            r#"<section class="hero"><h1 class="hero-title">{}</h1>"#,
            escape_html(&self.title)
        );
        if let Some(subtitle) = non_empty(self.subtitle.as_deref()) {
            let _ = write!(
                html,
                r#"<p class="hero-subtitle">{}</p>"#,
                escape_html(subtitle)
            );
        }
        if let Some((text, link)) = self.call_to_action() {
            let _ = write!(
                html,
                r#"<div class="hero-actions"><a href="{}" class="btn btn-primary">{}</a></div>"#,
                escape_html(link),
                escape_html(text)
            );
        }
        html.push_str("</section>");

        Markup::trusted(html)
    }
}
