//! Name-based component lookup for the page-composition host.

use std::collections::HashMap;

use super::component::{
    BuiltinOptions, Component, DemoBlockComponent, FeatureCardComponent, HeroBannerComponent,
};
use super::{ComponentArgs, ComponentCall};
use crate::error::ComponentError;
use crate::markup::Markup;

/// Registry of components addressable by name.
///
/// Registries hold no per-render state, so one instance can be shared across
/// threads rendering different pages.
///
/// # Example
///
/// ```
/// use rw_components::{BuiltinOptions, ComponentRegistry};
///
/// let registry = ComponentRegistry::new().with_builtins(&BuiltinOptions::default());
/// let html = registry
///     .render_tag(r#"<HeroBanner title="Hello" btnText="Start" />"#)
///     .unwrap();
/// assert_eq!(
///     html.as_str(),
///     r#"<section class="hero"><h1 class="hero-title">Hello</h1></section>"#
/// );
/// ```
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<String, Box<dyn Component>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component, replacing any component with the same name.
    #[must_use]
    pub fn with_component<C: Component + 'static>(mut self, component: C) -> Self {
        self.components
            .insert(component.name().to_owned(), Box::new(component));
        self
    }

    /// Register `DemoBlock`, `FeatureCard` and `HeroBanner`.
    #[must_use]
    pub fn with_builtins(self, options: &BuiltinOptions) -> Self {
        self.with_component(DemoBlockComponent {
            default_language: options.default_language.clone(),
        })
        .with_component(FeatureCardComponent)
        .with_component(HeroBannerComponent)
    }

    /// Whether a component is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered component names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Render the component registered under `name`.
    pub fn render(&self, name: &str, args: &ComponentArgs) -> Result<Markup, ComponentError> {
        let Some(component) = self.components.get(name) else {
            tracing::warn!(component = name, "Unknown component");
            return Err(ComponentError::UnknownComponent(name.to_owned()));
        };

        let markup = component.render(args)?;
        tracing::debug!(component = name, len = markup.as_str().len(), "Rendered component");
        Ok(markup)
    }

    /// Parse a `<Name ... />` tag and render it.
    pub fn render_tag(&self, tag: &str) -> Result<Markup, ComponentError> {
        let call = ComponentCall::parse(tag)?;
        self.render(&call.name, &call.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape_html;
    use pretty_assertions::assert_eq;

    struct Badge;

    impl Component for Badge {
        fn name(&self) -> &'static str {
            "Badge"
        }

        fn render(&self, args: &ComponentArgs) -> Result<Markup, ComponentError> {
            Ok(Markup::trusted(format!(
                "<span>{}</span>",
                escape_html(args.get("text").unwrap_or_default())
            )))
        }
    }

    fn builtins() -> ComponentRegistry {
        ComponentRegistry::new().with_builtins(&BuiltinOptions::default())
    }

    #[test]
    fn test_empty_registry() {
        let registry = ComponentRegistry::new();
        assert!(registry.names().is_empty());
        assert_eq!(
            registry.render("HeroBanner", &ComponentArgs::default()),
            Err(ComponentError::UnknownComponent("HeroBanner".to_owned()))
        );
    }

    #[test]
    fn test_builtin_names() {
        assert_eq!(
            builtins().names(),
            vec!["DemoBlock", "FeatureCard", "HeroBanner"]
        );
    }

    #[test]
    fn test_custom_component() {
        let registry = builtins().with_component(Badge);
        assert!(registry.contains("Badge"));
        let html = registry.render_tag(r#"<Badge text="a<b" />"#).unwrap();
        assert_eq!(html.as_str(), "<span>a&lt;b</span>");
    }

    #[test]
    fn test_replace_component() {
        struct Plain;

        impl Component for Plain {
            fn name(&self) -> &'static str {
                "HeroBanner"
            }

            fn render(&self, _args: &ComponentArgs) -> Result<Markup, ComponentError> {
                Ok(Markup::trusted("<header></header>"))
            }
        }

        let registry = builtins().with_component(Plain);
        assert_eq!(registry.names().len(), 3);
        let html = registry.render_tag("<HeroBanner />").unwrap();
        assert_eq!(html.as_str(), "<header></header>");
    }

    #[test]
    fn test_render_tag_demo_block_output_unescaped() {
        let html = builtins()
            .render_tag(r#"<DemoBlock title="Add" code="1+1" output="<b>2</b>" />"#)
            .unwrap();
        assert!(
            html.as_str()
                .contains(r#"<div class="output-content"><b>2</b></div>"#)
        );
    }

    #[test]
    fn test_render_tag_feature_card_wrapped() {
        let html = builtins()
            .render_tag(r#"<FeatureCard icon="*" title="T" description="D" link="/x" />"#)
            .unwrap();
        assert!(html.as_str().starts_with(r#"<a href="/x" class="feature-card-link"><div class="feature-card">"#));
        assert!(html.as_str().ends_with("</div></a>"));
    }

    #[test]
    fn test_render_tag_unknown_component() {
        assert_eq!(
            builtins().render_tag("<Carousel />"),
            Err(ComponentError::UnknownComponent("Carousel".to_owned()))
        );
    }

    #[test]
    fn test_render_tag_missing_attribute() {
        let err = builtins().render_tag("<HeroBanner />").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Component HeroBanner requires attribute `title`"
        );
    }

    #[test]
    fn test_render_tag_invalid() {
        assert!(matches!(
            builtins().render_tag("HeroBanner title=x"),
            Err(ComponentError::InvalidTag(_))
        ));
    }

    #[test]
    fn test_render_is_idempotent() {
        let registry = builtins();
        let tag = r#"<HeroBanner title="T" subtitle="S" btnText="Go" btnLink="/go" />"#;
        assert_eq!(
            registry.render_tag(tag).unwrap(),
            registry.render_tag(tag).unwrap()
        );
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ComponentRegistry>();
    }
}
