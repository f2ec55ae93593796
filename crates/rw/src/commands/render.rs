//! `rw render` command implementation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::Args;
use rw_components::{ComponentArgs, ComponentCall};

use super::load_registry;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Component tag (`<HeroBanner title="Hi" />`) or component name.
    component: String,

    /// Attribute as key=value (repeatable, overrides tag and props file).
    #[arg(short, long = "attr", value_parser = parse_attr)]
    attrs: Vec<(String, String)>,

    /// JSON file with an object of string attributes.
    #[arg(long)]
    props: Option<PathBuf>,

    /// Default code demo language (overrides config).
    #[arg(short, long)]
    language: Option<String>,

    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let registry = load_registry(self.config.as_deref(), self.language)?;
        let call = build_call(&self.component, self.props.as_deref(), self.attrs)?;

        let markup = registry.render(&call.name, &call.args)?;
        output.write(markup.as_str())?;
        Ok(())
    }
}

/// Combine the tag or name with props file and `--attr` values.
///
/// Later sources win: tag attributes, then the props file, then `--attr`.
fn build_call(
    component: &str,
    props: Option<&Path>,
    attrs: Vec<(String, String)>,
) -> Result<ComponentCall, CliError> {
    let mut call = if component.trim_start().starts_with('<') {
        ComponentCall::parse(component)?
    } else {
        ComponentCall {
            name: component.trim().to_owned(),
            args: ComponentArgs::default(),
        }
    };

    if let Some(path) = props {
        let content = std::fs::read_to_string(path)?;
        let values: HashMap<String, String> = serde_json::from_str(&content)?;
        call.args.attrs.extend(values);
    }
    call.args.attrs.extend(attrs);

    Ok(call)
}

/// Parse a `key=value` command-line attribute.
fn parse_attr(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("expected key=value, got `{s}`")),
    }
}
