//! Component trait and the built-in component adapters.

use super::ComponentArgs;
use crate::demo_block::{DEFAULT_LANGUAGE, DemoBlock};
use crate::error::ComponentError;
use crate::feature_card::FeatureCard;
use crate::hero_banner::HeroBanner;
use crate::markup::{Markup, non_empty};

/// A component the host can invoke by name.
///
/// Implementations map attributes onto their props and render them. Lookups
/// may happen from several page renders at once, so handlers are `Send + Sync`
/// and take `&self`.
///
/// # Example
///
/// ```
/// use rw_components::{Component, ComponentArgs, ComponentError, Markup, escape_html};
///
/// struct Badge;
///
/// impl Component for Badge {
///     fn name(&self) -> &str { "Badge" }
///
///     fn render(&self, args: &ComponentArgs) -> Result<Markup, ComponentError> {
///         let text = args.require(self.name(), "text")?;
///         Ok(Markup::trusted(format!(r#"<span class="badge">{}</span>"#, escape_html(text))))
///     }
/// }
///
/// let html = Badge.render(&ComponentArgs::parse(r#"text="new""#)).unwrap();
/// assert_eq!(html.as_str(), r#"<span class="badge">new</span>"#);
/// ```
pub trait Component: Send + Sync {
    /// Name matched against the invocation tag: `<Name ... />`.
    fn name(&self) -> &str;

    /// Render the component from invocation attributes.
    fn render(&self, args: &ComponentArgs) -> Result<Markup, ComponentError>;
}

/// Host-level options for the built-in components.
#[derive(Clone, Debug)]
pub struct BuiltinOptions {
    /// Language used for `DemoBlock` when the tag has no `language` attribute.
    pub default_language: String,
}

impl Default for BuiltinOptions {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

fn optional(args: &ComponentArgs, key: &str) -> Option<String> {
    args.get(key).map(str::to_owned)
}

/// `<DemoBlock title code [description] [language] [output] />`
///
/// The `output` attribute is embedded without escaping.
pub(crate) struct DemoBlockComponent {
    pub(crate) default_language: String,
}

impl Component for DemoBlockComponent {
    fn name(&self) -> &'static str {
        "DemoBlock"
    }

    fn render(&self, args: &ComponentArgs) -> Result<Markup, ComponentError> {
        let block = DemoBlock {
            title: args.require(self.name(), "title")?.to_owned(),
            code: args.require(self.name(), "code")?.to_owned(),
            description: optional(args, "description"),
            language: Some(
                non_empty(args.get("language"))
                    .unwrap_or(self.default_language.as_str())
                    .to_owned(),
            ),
            output: args.get("output").map(Markup::trusted),
        };
        Ok(block.render())
    }
}

/// `<FeatureCard icon title description [link] />`
pub(crate) struct FeatureCardComponent;

impl Component for FeatureCardComponent {
    fn name(&self) -> &'static str {
        "FeatureCard"
    }

    fn render(&self, args: &ComponentArgs) -> Result<Markup, ComponentError> {
        let card = FeatureCard {
            icon: args.require(self.name(), "icon")?.to_owned(),
            title: args.require(self.name(), "title")?.to_owned(),
            description: args.require(self.name(), "description")?.to_owned(),
            link: optional(args, "link"),
        };
        Ok(card.render())
    }
}

/// `<HeroBanner title [subtitle] [btnText] [btnLink] />`
pub(crate) struct HeroBannerComponent;

impl Component for HeroBannerComponent {
    fn name(&self) -> &'static str {
        "HeroBanner"
    }

    fn render(&self, args: &ComponentArgs) -> Result<Markup, ComponentError> {
        let banner = HeroBanner {
            title: args.require(self.name(), "title")?.to_owned(),
            subtitle: optional(args, "subtitle"),
            btn_text: optional(args, "btnText"),
            btn_link: optional(args, "btnLink"),
        };
        Ok(banner.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn demo() -> DemoBlockComponent {
        DemoBlockComponent {
            default_language: DEFAULT_LANGUAGE.to_owned(),
        }
    }

    #[test]
    fn test_demo_block_matches_props_render() {
        let args = ComponentArgs::parse(r#"title="Add" code="1+1" output="<b>2</b>""#);
        let expected = DemoBlock::new("Add", "1+1")
            .with_output(Markup::trusted("<b>2</b>"))
            .render();
        assert_eq!(demo().render(&args).unwrap(), expected);
    }

    #[test]
    fn test_demo_block_configured_default_language() {
        let component = DemoBlockComponent {
            default_language: "rust".to_owned(),
        };
        let html = component
            .render(&ComponentArgs::parse(r#"title="T" code="c""#))
            .unwrap();
        assert!(html.as_str().contains(r#"<code class="language-rust">"#));
    }

    #[test]
    fn test_demo_block_language_attribute_wins() {
        let component = DemoBlockComponent {
            default_language: "rust".to_owned(),
        };
        let html = component
            .render(&ComponentArgs::parse(r#"title="T" code="c" language="python""#))
            .unwrap();
        assert!(html.as_str().contains(r#"<code class="language-python">"#));
    }

    #[test]
    fn test_demo_block_empty_language_uses_default() {
        let component = DemoBlockComponent {
            default_language: "rust".to_owned(),
        };
        let html = component
            .render(&ComponentArgs::parse(r#"title="T" code="c" language="""#))
            .unwrap();
        assert!(html.as_str().contains(r#"<code class="language-rust">"#));
    }

    #[test]
    fn test_demo_block_requires_code() {
        let err = demo()
            .render(&ComponentArgs::parse(r#"title="T""#))
            .unwrap_err();
        assert_eq!(
            err,
            ComponentError::MissingAttribute {
                component: "DemoBlock".to_owned(),
                attribute: "code".to_owned(),
            }
        );
    }

    #[test]
    fn test_feature_card_with_link() {
        let args = ComponentArgs::parse(r#"icon="*" title="T" description="D" link="/x""#);
        let html = FeatureCardComponent.render(&args).unwrap();
        assert_eq!(
            html,
            FeatureCard::new("*", "T", "D").with_link("/x").render()
        );
    }

    #[test]
    fn test_feature_card_requires_description() {
        let args = ComponentArgs::parse(r#"icon="*" title="T""#);
        assert!(matches!(
            FeatureCardComponent.render(&args),
            Err(ComponentError::MissingAttribute { attribute, .. }) if attribute == "description"
        ));
    }

    #[test]
    fn test_hero_banner_camel_case_attributes() {
        let args = ComponentArgs::parse(r#"title="T" btnText="Go" btnLink="/go""#);
        let html = HeroBannerComponent.render(&args).unwrap();
        assert!(html.as_str().contains(r#"<a href="/go" class="btn btn-primary">Go</a>"#));
    }

    #[test]
    fn test_hero_banner_empty_title_renders() {
        let html = HeroBannerComponent
            .render(&ComponentArgs::parse(r#"title="""#))
            .unwrap();
        assert_eq!(
            html.as_str(),
            r#"<section class="hero"><h1 class="hero-title"></h1></section>"#
        );
    }
}
