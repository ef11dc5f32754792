use std::path::Path;

use glam::UVec2;
use penumbra_core::{LightingConfig, LightingError, camera::Camera2d};
use penumbra_lighting::GridDistanceField;
use serde::{Deserialize, Serialize};

pub mod extract;
pub mod light;
pub mod occluder;

pub use extract::{ExtractedLights, extract_lights};
pub use light::{AmbientLight2d, PointLight2d, SpotLight2d};
pub use occluder::{Occluder2d, bake_distance_field};

/// A 2D scene as stored on disk: a camera, lights and the occluders that
/// cast shadows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub camera: Camera2d,
    pub ambient: AmbientLight2d,
    pub point_lights: Vec<PointLight2d>,
    pub spot_lights: Vec<SpotLight2d>,
    pub occluders: Vec<Occluder2d>,
}

impl Scene {
    pub fn from_json_str(json: &str) -> Result<Self, LightingError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LightingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LightingError::io(path, e))?;
        let scene = Self::from_json_str(&json)?;
        log::info!(
            "Loaded scene {}: {} point lights, {} spot lights, {} occluders",
            path.display(),
            scene.point_lights.len(),
            scene.spot_lights.len(),
            scene.occluders.len()
        );
        Ok(scene)
    }

    /// Everything the resolve pass needs for one frame besides the view.
    pub fn prepare_frame(
        &self,
        config: &LightingConfig,
        viewport: UVec2,
    ) -> Result<(ExtractedLights, GridDistanceField), LightingError> {
        let lights = extract_lights(self, config.storage);
        let field =
            bake_distance_field(&self.occluders, &self.camera, viewport, config.field_resolution)?;
        Ok((lights, field))
    }
}
