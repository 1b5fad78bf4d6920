// config.rs - Renderer configuration loaded from JSON
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::shared::Cell;

/// Largest accepted target width or height in pixels
pub const MAX_TARGET_DIMENSION: u32 = 16_384;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    #[serde(default = "default_label")]
    pub label: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub targets: Vec<TargetConfig>,
    /// Color every target is cleared to at the start of a frame
    pub clear_color: Cell,
}

fn default_label() -> String {
    "main".to_string()
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            targets: vec![TargetConfig {
                label: default_label(),
                width: 800,
                height: 600,
            }],
            clear_color: [0, 0, 0, 255],
        }
    }
}

impl RendererConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        if let Some(target) = self.targets.iter().find(|t| t.width == 0 || t.height == 0) {
            return Err(ConfigError::ZeroSizedTarget {
                label: target.label.clone(),
            });
        }
        if let Some(target) = self
            .targets
            .iter()
            .find(|t| t.width > MAX_TARGET_DIMENSION || t.height > MAX_TARGET_DIMENSION)
        {
            return Err(ConfigError::TargetTooLarge {
                label: target.label.clone(),
                width: target.width,
                height: target.height,
            });
        }
        Ok(())
    }
}
