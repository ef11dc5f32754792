use std::path::Path;

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::LightingError;

/// Step cap for shadow sphere tracing. Rays that neither reach their
/// target nor hit an occluder within this many steps count as occluded.
pub const DEFAULT_RAYMARCH_STEPS: u32 = 32;

/// Capacity used by `StorageCapability::fixed()` on constrained platforms.
pub const DEFAULT_FIXED_CAPACITY: usize = 64;

/// How the host can store per-frame light lists.
///
/// Platforms with storage buffers keep lights in a growable list. Platforms
/// limited to uniform buffers get a fixed number of slots; lights past the
/// capacity are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum StorageCapability {
    #[default]
    Growable,
    Fixed { capacity: usize },
}

impl StorageCapability {
    pub fn fixed() -> Self {
        StorageCapability::Fixed {
            capacity: DEFAULT_FIXED_CAPACITY,
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        match self {
            StorageCapability::Growable => None,
            StorageCapability::Fixed { capacity } => Some(*capacity),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub storage: StorageCapability,
    pub max_raymarch_steps: u32,
    /// Texel resolution of the baked occluder distance field.
    pub field_resolution: UVec2,
    /// Worker threads for the resolve pass. `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            storage: StorageCapability::default(),
            max_raymarch_steps: DEFAULT_RAYMARCH_STEPS,
            field_resolution: UVec2::new(256, 256),
            threads: None,
        }
    }
}

impl LightingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, LightingError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LightingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LightingError::io(path, e))?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded lighting config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = LightingConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LightingConfig::default());
        assert_eq!(config.max_raymarch_steps, 32);
        assert_eq!(config.storage, StorageCapability::Growable);
    }

    #[test]
    fn test_fixed_storage_from_json() {
        let config = LightingConfig::from_json_str(
            r#"{ "storage": { "kind": "fixed", "capacity": 128 }, "max_raymarch_steps": 64 }"#,
        )
        .unwrap();
        assert_eq!(config.storage.capacity(), Some(128));
        assert_eq!(config.max_raymarch_steps, 64);
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let err = LightingConfig::from_json_str(r#"{ "storage": 3 }"#).unwrap_err();
        assert!(matches!(err, LightingError::Parse(_)));
    }
}
