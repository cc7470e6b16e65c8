//! Layered settings resolution.
//!
//! Later layers win:
//! 1. Compiled defaults
//! 2. Global config file: `$XDG_CONFIG_HOME/rstoc/rstoc.toml`
//! 3. Environment variables with the `RSTOC_` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::arena::DEFAULT_LANG;
use crate::errors::OutlineError;

/// Unified configuration for rstoc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Language tag stamped on generated TOCs when the source has no
    /// `lang:` header (default: "en")
    pub default_lang: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_lang: DEFAULT_LANG.to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", so an empty file never clobbers lower layers).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_lang: Option<String>,
}

/// True for a two-letter lowercase language code like "en" or "fr".
pub fn is_lang_code(tag: &str) -> bool {
    tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_lowercase())
}

/// Get the XDG config directory for rstoc.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rstoc").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rstoc.toml"))
}

/// Read one TOML file into RawSettings so the layers can merge field by
/// field.
fn load_raw_settings(path: &Path) -> Result<RawSettings, OutlineError> {
    let content = std::fs::read_to_string(path).map_err(|e| OutlineError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| OutlineError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Resolve settings across all layers, later layers winning:
    /// compiled defaults, then the global config file, then `RSTOC_*`
    /// environment variables.
    ///
    /// The effective `default_lang` must be a two-letter code; anything
    /// else is rejected here instead of surfacing later in the markup.
    pub fn load() -> Result<Self, OutlineError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                if let Some(lang) = raw.default_lang {
                    current.default_lang = lang;
                }
            }
        }

        current = Self::apply_env_overrides(current)?;

        if !is_lang_code(&current.default_lang) {
            return Err(OutlineError::Config {
                message: format!(
                    "default_lang {:?} is not a two-letter language code",
                    current.default_lang
                ),
            });
        }

        Ok(current)
    }

    /// Apply RSTOC_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, OutlineError> {
        // The config crate only handles the env source here
        let builder = Config::builder().add_source(Environment::with_prefix("RSTOC"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("default_lang") {
            settings.default_lang = val;
        }

        Ok(settings)
    }

    /// Effective configuration rendered as TOML.
    pub fn to_toml(&self) -> Result<String, OutlineError> {
        toml::to_string_pretty(self).map_err(|e| OutlineError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Starter config file content, every knob commented out.
    pub fn template() -> String {
        r#"# rstoc configuration
#
# Layers, later ones winning:
#   Global: ~/.config/rstoc/rstoc.toml
#   Env:    RSTOC_* environment variables (explicit overrides)
#   Flags:  --lang on the command line wins over everything

# Language tag stamped on generated TOCs when the outline source
# has no lang: header. Two lowercase letters.
# default_lang = "en"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> OutlineError {
    OutlineError::Config {
        message: e.to_string(),
    }
}
