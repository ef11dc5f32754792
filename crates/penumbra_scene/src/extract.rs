use glam::Vec2;
use penumbra_core::StorageCapability;
use penumbra_lighting::{AmbientLight, LightList, PointLight, SpotLight};

use crate::{
    Scene,
    light::{AmbientLight2d, PointLight2d, SpotLight2d},
};

/// Per-frame light data handed to the resolve pass.
#[derive(Clone, Debug)]
pub struct ExtractedLights {
    pub ambient: AmbientLight,
    pub point_lights: LightList<PointLight>,
    pub spot_lights: LightList<SpotLight>,
}

pub fn extract_ambient_light(ambient: &AmbientLight2d) -> AmbientLight {
    AmbientLight::new(ambient.color * ambient.brightness)
}

pub fn extract_point_light(light: &PointLight2d) -> PointLight {
    PointLight {
        center: light.position,
        radius: light.radius,
        color: light.color,
        intensity: light.intensity,
        falloff: light.falloff,
        cast_shadows: light.cast_shadows as u32,
    }
}

pub fn extract_spot_light(light: &SpotLight2d) -> SpotLight {
    SpotLight {
        center: light.position,
        radius: light.radius,
        color: light.color,
        intensity: light.intensity,
        falloff: light.falloff,
        direction: Vec2::from_angle(light.direction.to_radians()),
        inner_angle: light.inner_angle.to_radians(),
        outer_angle: light.outer_angle.to_radians(),
        source_width: light.source_width,
        cast_shadows: light.cast_shadows as u32,
    }
}

/// Collects the scene's visible lights into lists laid out for `capability`.
///
/// Lights that fail validation are skipped with a warning instead of
/// failing the frame.
pub fn extract_lights(scene: &Scene, capability: StorageCapability) -> ExtractedLights {
    let mut point_lights = LightList::for_capability(capability);
    for (i, light) in scene.point_lights.iter().enumerate() {
        if !light.visible {
            continue;
        }
        let extracted = extract_point_light(light);
        if let Err(e) = extracted.validate() {
            log::warn!("Skipping point light {i}: {e}");
            continue;
        }
        point_lights.push(extracted);
    }

    let mut spot_lights = LightList::for_capability(capability);
    for (i, light) in scene.spot_lights.iter().enumerate() {
        if !light.visible {
            continue;
        }
        let extracted = extract_spot_light(light);
        if let Err(e) = extracted.validate() {
            log::warn!("Skipping spot light {i}: {e}");
            continue;
        }
        spot_lights.push(extracted);
    }

    log::trace!(
        "Extracted {} point and {} spot lights",
        point_lights.count(),
        spot_lights.count()
    );

    ExtractedLights {
        ambient: extract_ambient_light(&scene.ambient),
        point_lights,
        spot_lights,
    }
}
