use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Optional TOML config for the serve binary. Flags override file values,
/// and anything left unset falls back to the built-in defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub listen: Option<String>,
    #[serde(default)]
    pub sqlite: Option<PathBuf>,
}

impl ServerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&raw)?)
    }
}
