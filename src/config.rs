//! User configuration
//!
//! Stored in `~/.config/colordinate/config.yaml`:
//!
//! ```yaml
//! save_path: ~/.vim/colors
//! preview_name: colordinate
//! render_mode: gui
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::host::RenderMode;
use crate::session::DEFAULT_PREVIEW_NAME;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColordinateConfig {
    /// Directory colorscheme files are saved to (current directory if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_path: Option<PathBuf>,

    /// `g:colors_name` while previewing edits
    #[serde(default = "default_preview_name")]
    pub preview_name: String,

    /// Attribute set read from the live highlight table
    #[serde(default)]
    pub render_mode: RenderMode,
}

fn default_preview_name() -> String {
    DEFAULT_PREVIEW_NAME.to_string()
}

impl Default for ColordinateConfig {
    fn default() -> Self {
        Self {
            save_path: None,
            preview_name: default_preview_name(),
            render_mode: RenderMode::default(),
        }
    }
}

impl ColordinateConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// `<save_path>/<colors_name>.vim`
    pub fn scheme_path(&self, colors_name: &str) -> PathBuf {
        let file = format!("{}.vim", colors_name);
        match &self.save_path {
            Some(dir) => expand_home(dir).join(file),
            None => PathBuf::from(file),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}
