use std::path::Path;
use tracing::info;

use crate::error::UserDeskError;
use crate::models::Config;

/// Load configuration with CLI overrides.
///
/// An explicit `config_path` must exist; otherwise `userdesk.toml` in
/// `dir` is used when present, falling back to defaults.
pub fn load_config(
    dir: &Path,
    config_path: Option<&Path>,
    url: Option<String>,
    timeout: Option<u64>,
) -> Result<Config, UserDeskError> {
    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(dir)?,
    };
    let config = config.with_overrides(url, timeout);
    config.validate()?;

    info!(
        "Configuration loaded: url={}, resource={}, timeout={}s",
        config.backend.url, config.backend.resource, config.backend.timeout_seconds
    );

    Ok(config)
}
