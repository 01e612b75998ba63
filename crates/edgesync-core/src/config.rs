//! Configuration directory and persisted render settings.
//!
//! Settings live in `settings.json` under the configuration directory.
//! Colors can be forced off for a process with `NO_COLOR` or
//! `EDGESYNC_NO_COLOR=1`.

use directories::{BaseDirs, ProjectDirs};
use eyre::{eyre, Context, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::RenderOptions;

const SETTINGS_FILE: &str = "settings.json";
const NO_COLOR_ENV: &str = "NO_COLOR";
const DISABLE_COLOR_ENV: &str = "EDGESYNC_NO_COLOR";

static CONFIG_DIR_OVERRIDE: Lazy<RwLock<Option<PathBuf>>> = Lazy::new(|| RwLock::new(None));

/// Point settings lookups at `path` (the CLI's `--config-dir`); the last
/// call wins.
pub fn set_config_dir<P: AsRef<Path>>(path: P) {
    *CONFIG_DIR_OVERRIDE.write() = Some(path.as_ref().to_path_buf());
}

/// Go back to the platform configuration directory.
pub fn clear_config_dir_override() {
    CONFIG_DIR_OVERRIDE.write().take();
}

pub fn config_dir_override() -> Option<PathBuf> {
    CONFIG_DIR_OVERRIDE.read().clone()
}

/// Directory holding `settings.json`: the `--config-dir` override if set,
/// else the platform config dir, else `~/.config/edgesync`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(path) = CONFIG_DIR_OVERRIDE.read().clone() {
        return Ok(path);
    }

    if let Some(proj) = ProjectDirs::from("com", "EdgeSync", "EdgeSync") {
        return Ok(proj.config_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".config").join("edgesync"));
    }

    Err(eyre!(
        "no configuration directory for edgesync settings; pass --config-dir"
    ))
}

pub fn settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SETTINGS_FILE))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Colorize rendered reports.
    pub colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// Read persisted settings, falling back to defaults when none were stored.
pub fn load_settings() -> Result<Settings> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse settings file {}", path.display()))
}

pub fn store_settings(settings: &Settings) -> Result<PathBuf> {
    let path = settings_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("failed to create configuration directory {}", parent.display())
        })?;
    }
    let json = serde_json::to_string_pretty(settings).context("serialize settings")?;
    fs::write(&path, json)
        .with_context(|| format!("failed to write settings file {}", path.display()))?;
    log::debug!("stored settings at {}", path.display());
    Ok(path)
}

/// Whether the environment asks for colorless output.
pub fn colors_disabled_by_env() -> bool {
    env_disables_colors(env::var_os(NO_COLOR_ENV), env::var_os(DISABLE_COLOR_ENV))
}

fn env_disables_colors(no_color: Option<OsString>, disable: Option<OsString>) -> bool {
    if no_color.is_some_and(|val| !val.is_empty()) {
        return true;
    }
    disable
        .and_then(|val| val.into_string().ok())
        .map(|val| val == "1" || val.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Pick render options: explicit flag, then environment, then stored settings.
pub fn resolve_render_options(settings: &Settings, colors_flag: Option<bool>) -> RenderOptions {
    let colors = match colors_flag {
        Some(colors) => colors,
        None if colors_disabled_by_env() => false,
        None => settings.colors,
    };
    RenderOptions { colors }
}
