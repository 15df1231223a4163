//! kilnlog configuration.
//!
//! Loaded from `~/.kilnlog/config.toml`. Every field is optional; a
//! missing file means defaults.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::model::Cone;

/// kilnlog configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Target cone assumed when `--cone` is omitted on `firing log`.
    pub default_cone: Cone,

    /// Clay bodies listed for reference in help output. Purely advisory;
    /// any clay name is accepted on the command line.
    pub clay_bodies: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_cone: Cone::C6,
            clay_bodies: [
                "Cone 6 Stoneware",
                "Porcelain",
                "Buff Stoneware",
                "White Stoneware",
                "Speckled Stoneware",
                "Dark Stoneware",
                "Earthenware",
                "Custom Mix",
            ]
            .map(String::from)
            .into(),
        }
    }
}

impl Config {
    /// Load config from `~/.kilnlog/config.toml`, falling back to defaults
    /// when the file is missing.
    pub fn load() -> Result<Self, String> {
        let path = Self::path().ok_or("could not determine home directory")?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.kilnlog/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".kilnlog").join("config.toml"))
    }
}
