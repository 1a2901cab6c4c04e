use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-check settings read from the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JournaldConfig {
    /// Overrides the journal directory; the `--path` flag still wins.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Configuration handle handed to every check invocation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckConfig {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub journald: JournaldConfig,
}

impl CheckConfig {
    /// Load configuration from `path`; an absent file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: CheckConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
