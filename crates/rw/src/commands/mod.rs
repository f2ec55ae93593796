//! CLI command implementations.

pub(crate) mod list;
pub(crate) mod render;

pub(crate) use list::ListArgs;
pub(crate) use render::RenderArgs;

use std::path::Path;

use rw_components::{BuiltinOptions, ComponentRegistry};
use rw_config::{CliSettings, Config};

use crate::error::CliError;

/// Load configuration and build the component registry from it.
pub(crate) fn load_registry(
    config_path: Option<&Path>,
    language: Option<String>,
) -> Result<ComponentRegistry, CliError> {
    let cli_settings = CliSettings {
        default_language: language,
    };
    let config = Config::load(config_path, Some(&cli_settings))?;

    if let Some(path) = &config.config_path {
        tracing::info!(path = %path.display(), "Loaded configuration");
    }

    let options = BuiltinOptions {
        default_language: config.components.default_language,
    };
    Ok(ComponentRegistry::new().with_builtins(&options))
}
