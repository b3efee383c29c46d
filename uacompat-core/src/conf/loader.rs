use crate::conf::{ConfigError, UacompatConfig};
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "uacompat.hcl";

pub fn load_config(path: &Path) -> Result<UacompatConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: UacompatConfig = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is used
/// when present and built-in defaults otherwise.
pub fn resolve_config(explicit: Option<&Path>) -> Result<UacompatConfig, ConfigError> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.is_file() {
                load_config(path)
            } else {
                Ok(UacompatConfig::default())
            }
        }
    }
}
