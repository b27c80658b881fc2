//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use tc_core::drying::DEFAULT_PREFIX;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File read by `tc scan` when no path is given.
    pub scan_path: PathBuf,

    /// Name prefix for objects added in `tc dry`.
    pub object_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("Space_Corrected.csv"),
            object_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location, an optional explicit
    /// file, then `TC_*` environment variables, later sources winning.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // TC_SCAN_PATH, TC_OBJECT_PREFIX
        figment = figment.merge(Env::prefixed("TC_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for tc.
///
/// On Linux: `~/.config/tc`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tc"))
}
