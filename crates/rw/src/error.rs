//! CLI error types.

use rw_components::ComponentError;
use rw_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Component(#[from] ComponentError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid props file: {0}")]
    Props(#[from] serde_json::Error),
}
