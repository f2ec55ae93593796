//! Host invocation of components by name.
//!
//! Pages embed components as self-closing tags:
//!
//! ```text
//! <HeroBanner title="Welcome" subtitle="Start here" btnText="Read" btnLink="/guide" />
//! ```
//!
//! [`ComponentCall`] parses the tag, [`ComponentArgs`] holds its attributes and
//! [`ComponentRegistry`] dispatches to a registered [`Component`].

mod args;
mod call;
mod component;
mod registry;

pub use args::ComponentArgs;
pub use call::ComponentCall;
pub use component::{BuiltinOptions, Component};
pub use registry::ComponentRegistry;
