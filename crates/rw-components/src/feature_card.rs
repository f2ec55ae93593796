//! Feature card: an icon, title and description tile.

use std::fmt::Write;

use crate::markup::{Markup, escape_html, non_empty};

/// Properties for a feature card.
///
/// When `link` is set the tile is wrapped in a single anchor; the tile
/// itself is identical either way.
///
/// # Example
///
/// ```
/// use rw_components::FeatureCard;
///
/// let html = FeatureCard::new("⚡", "Fast", "Renders quickly")
///     .with_link("/guide")
///     .render();
/// assert!(html.as_str().starts_with(r#"<a href="/guide" class="feature-card-link">"#));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct FeatureCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub link: Option<String>,
}

impl FeatureCard {
    #[must_use]
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
            link: None,
        }
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Render the card, wrapped in an anchor when a link is set.
    #[must_use]
    pub fn render(&self) -> Markup {
        let tile = self.render_tile();

        match non_empty(self.link.as_deref()) {
            Some(link) => {
                let mut html = String::with_capacity(tile.len() + link.len() + 48);
                let _ = write!(
                    html,
                    r#"<a href="{}" class="feature-card-link">{tile}</a>"#,
                    escape_html(link)
                );
                Markup::trusted(html)
            }
            None => Markup::trusted(tile),
        }
    }

    fn render_tile(&self) -> String {
        let mut html = String::with_capacity(160);
        let _ = write!(
            html,
            r#"<div class="feature-card"><span class="feature-icon">{}</span><h3 class="feature-title">{}</h3><p class="feature-desc">{}</p></div>"#,
            escape_html(&self.icon),
            escape_html(&self.title),
            escape_html(&self.description)
        );
        html
    }
}
