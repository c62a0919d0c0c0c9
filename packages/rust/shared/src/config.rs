//! Application configuration for titlepatch.
//!
//! User config lives at `~/.titlepatch/titlepatch.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TitlePatchError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "titlepatch.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".titlepatch";

/// Directory patched when neither the CLI nor the config names one.
pub const DEFAULT_TARGET_DIR: &str = "pages/api";

/// Extension (without the dot) of the files a pass considers.
pub const DEFAULT_EXTENSION: &str = "md";

// ---------------------------------------------------------------------------
// Config structs (matching titlepatch.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Directory whose Markdown files get a title header.
    #[serde(default = "default_target_dir")]
    pub target_dir: String,

    /// File extension to match, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            target_dir: default_target_dir(),
            extension: default_extension(),
        }
    }
}

fn default_target_dir() -> String {
    DEFAULT_TARGET_DIR.into()
}
fn default_extension() -> String {
    DEFAULT_EXTENSION.into()
}

// ---------------------------------------------------------------------------
// Patch options (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime options for a directory pass — merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// File extension to match, without the leading dot.
    pub extension: String,
    /// Report what would change without writing anything.
    pub dry_run: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            dry_run: false,
        }
    }
}

impl From<&AppConfig> for PatchOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            extension: config.defaults.extension.clone(),
            dry_run: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.titlepatch/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| TitlePatchError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.titlepatch/titlepatch.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
/// An undeterminable home directory also yields defaults.
pub fn load_config() -> Result<AppConfig> {
    load_config_or_default(config_file_path())
}

fn load_config_or_default(path: Result<PathBuf>) -> Result<AppConfig> {
    let path = match path {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!(error = %e, "no config location, using defaults");
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| TitlePatchError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        TitlePatchError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let path = config_file_path()?;
    init_config_at(&path)?;
    Ok(path)
}

/// Write the default config to `path`, creating parent directories.
pub fn init_config_at(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| TitlePatchError::io(dir, e))?;
    }

    let content = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| TitlePatchError::config(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| TitlePatchError::io(path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(())
}
