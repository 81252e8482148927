use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::geometry::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "pixelreel";
const APP_CONFIG_FILE: &str = "config.json";

const DEFAULT_GRID_SIZE: u32 = 32;
const DEFAULT_DISPLAY_HEIGHT: u32 = 512;
const DEFAULT_COLOR: &str = "#000000";

/// Editor settings from `config.json`. The grid size is fixed for the
/// lifetime of a session; the display height only feeds the rendering
/// scale handed to frontends.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid_size: u32,
    pub display_height: u32,
    pub history_depth: Option<usize>,
    pub default_color: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            history_depth: None,
            default_color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl EditorConfig {
    /// Screen pixels per grid cell for the display collaborator.
    pub fn cell_scale(&self) -> u32 {
        (self.display_height / self.grid_size.max(1)).max(1)
    }

    /// The configured starting color, falling back to black on a malformed
    /// hex value.
    pub fn starting_color(&self) -> Rgba {
        Rgba::from_hex(&self.default_color).unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid default_color in config; using black");
            Rgba::opaque(0, 0, 0)
        })
    }

    fn sanitized(mut self) -> Self {
        if self.grid_size == 0 {
            tracing::warn!("grid_size 0 in config; using default");
            self.grid_size = DEFAULT_GRID_SIZE;
        }
        self
    }
}

pub fn load_editor_config() -> EditorConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_editor_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_editor_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> EditorConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return EditorConfig::default(),
    };
    if !path.exists() {
        return EditorConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str::<EditorConfig>(&contents)
            .map(EditorConfig::sanitized)
            .unwrap_or_else(|err| {
                tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
                EditorConfig::default()
            }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            EditorConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
