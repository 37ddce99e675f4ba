//! Display and logging preferences, stored as TOML.
//!
//! `keyspan` looks for its settings in one place: the `--config` path if one
//! was given, otherwise `config.toml` under the per-user config directory
//! (`%APPDATA%\Keyspan` on Windows, `$XDG_CONFIG_HOME/keyspan` or
//! `~/.config/keyspan` on Linux, `~/Library/Application Support/Keyspan` on
//! macOS).  A full file looks like this:
//!
//! ```toml
//! [general]
//! log_level = "warn"
//!
//! [output]
//! format = "text"
//! verbose = false
//! prompt = "keyspan> "
//! ```
//!
//! Any key or table may be left out; the missing parts take their defaults.
//! Command-line flags are applied on top of the loaded values by `main`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::render::OutputFormat;

/// Why the settings file could not be read or written.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No per-user config directory is known on this system.
    #[error("no per-user config directory on this system")]
    NoPlatformConfigDir,

    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `init` refused to overwrite an existing file.
    #[error("{0} already exists; not overwriting it")]
    AlreadyExists(PathBuf),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot encode config as TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Process-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// `tracing` filter used when `RUST_LOG` is unset: `"error"`, `"warn"`,
    /// `"info"`, `"debug"`, `"trace"`, or any `EnvFilter` directive.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// How results are printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Print one line per selection above the result (text format only).
    #[serde(default)]
    pub verbose: bool,
    /// Prompt shown by the interactive session.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_prompt() -> String {
    "keyspan> ".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            verbose: false,
            prompt: default_prompt(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// The per-user directory holding `config.toml`.
///
/// # Errors
///
/// [`ConfigError::NoPlatformConfigDir`] if the environment names no such
/// directory (for example `HOME` unset on Linux).
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// The default settings file, `<config_dir>/config.toml`.
///
/// # Errors
///
/// See [`config_dir`].
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from the platform config file, returning
/// `AppConfig::default()` if the file does not exist or no platform directory
/// is known.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = match config_file_path() {
        Ok(path) => path,
        Err(ConfigError::NoPlatformConfigDir) => return Ok(AppConfig::default()),
        Err(e) => return Err(e),
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Loads `AppConfig` from an explicit path.
///
/// Unlike [`load_config`], a missing file is an error: the user asked for it.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a default config file at `path` unless one already exists.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyExists`] if `path` exists, otherwise the
/// errors of [`save_config_to`].
pub fn init_config_at(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    save_config_to(path, &AppConfig::default())
}

/// `<per-user config base>/keyspan`, spelled the way each OS spells app folders.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Keyspan"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("keyspan"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Keyspan")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
