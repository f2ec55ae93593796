//! Presentational HTML components for RW documentation pages.
//!
//! Each component is a props struct with a pure `render` method that returns
//! a [`Markup`] fragment:
//!
//! - [`DemoBlock`]: titled code sample with an optional rendered output panel
//! - [`FeatureCard`]: icon, title and description tile, optionally linked
//! - [`HeroBanner`]: page banner with an optional subtitle and call-to-action
//!
//! Optional fields that are absent or empty omit their region. All text is
//! HTML-escaped except [`DemoBlock::output`], which is [`Markup`] the caller
//! has vouched for.
//!
//! The [`invocation`] module lets a page host render components from
//! `<Name attr="..." />` tags through a [`ComponentRegistry`].
//!
//! # Example
//!
//! ```
//! use rw_components::HeroBanner;
//!
//! let html = HeroBanner::new("RW").with_subtitle("Documentation engine").render();
//! assert_eq!(
//!     html.as_str(),
//!     r#"<section class="hero"><h1 class="hero-title">RW</h1><p class="hero-subtitle">Documentation engine</p></section>"#
//! );
//! ```

mod demo_block;
mod error;
mod feature_card;
mod hero_banner;
pub mod invocation;
mod markup;

pub use demo_block::{DEFAULT_LANGUAGE, DemoBlock};
pub use error::ComponentError;
pub use feature_card::FeatureCard;
pub use hero_banner::HeroBanner;
pub use invocation::{BuiltinOptions, Component, ComponentArgs, ComponentCall, ComponentRegistry};
pub use markup::{Markup, escape_html};
