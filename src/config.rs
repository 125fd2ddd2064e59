//! Layout configuration persistence
//!
//! Stores user preferences in `~/.config/codexmonitor/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Layout configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// End an active drag when the window loses focus, since the pointer
    /// release may happen outside the window and never be delivered
    #[serde(default = "default_end_drag_on_focus_loss")]
    pub end_drag_on_focus_loss: bool,

    /// Logical pixels on each side of a panel border that grab its handle
    #[serde(default = "default_handle_hit_zone")]
    pub handle_hit_zone: f64,
}

fn default_end_drag_on_focus_loss() -> bool {
    true
}

fn default_handle_hit_zone() -> f64 {
    4.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            end_drag_on_focus_loss: default_end_drag_on_focus_loss(),
            handle_hit_zone: default_handle_hit_zone(),
        }
    }
}

impl LayoutConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
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

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
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

    /// Replace values that would make the handles unusable
    fn sanitized(mut self) -> Self {
        if !self.handle_hit_zone.is_finite() || self.handle_hit_zone <= 0.0 {
            tracing::warn!(
                "Invalid handle_hit_zone {}, using {}",
                self.handle_hit_zone,
                default_handle_hit_zone()
            );
            self.handle_hit_zone = default_handle_hit_zone();
        }
        self
    }
}
