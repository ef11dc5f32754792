//! Authoring-side light descriptions, as they appear in scene files.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// How much ambient light to apply to the scene.
///
/// - For a darker scene, use a brightness value between `0.0` and `1.0`.
/// - For a brighter scene, use a brightness greater than `1.0`.
/// - A brightness value of `0.0` results in a completely black scene outside
///   of direct light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientLight2d {
    /// Linear RGB tint.
    pub color: Vec3,
    /// Multiplied against `color`.
    pub brightness: f32,
}

impl Default for AmbientLight2d {
    /// White at full brightness, which is the same as having no lighting at all.
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            brightness: 1.0,
        }
    }
}

/// A light that provides illumination in all directions.
///
/// Attenuation is a variation of inverse square falloff; the light only
/// reaches as far as its radius.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLight2d {
    pub position: Vec2,
    /// The light's color tint.
    pub color: Vec3,
    /// Attenuation is multiplied by this value.
    pub intensity: f32,
    /// Illumination only occurs within the radius.
    pub radius: f32,
    /// A higher falloff gives less illumination towards the radius.
    pub falloff: f32,
    pub cast_shadows: bool,
    /// Hidden lights are not extracted.
    pub visible: bool,
}

impl Default for PointLight2d {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            color: Vec3::ONE,
            intensity: 1.0,
            radius: 0.5,
            falloff: 0.0,
            cast_shadows: false,
            visible: true,
        }
    }
}

/// A light that shines a beam in one direction.
///
/// The parameters shared with [`PointLight2d`] behave the same way. Angles
/// are in degrees: `direction` is where the cone's axis points, and the
/// beam tapers from full strength at `inner_angle` to nothing at
/// `outer_angle`, both measured from the axis. `source_width` is the length
/// of the emitting segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotLight2d {
    pub position: Vec2,
    pub color: Vec3,
    pub intensity: f32,
    pub radius: f32,
    pub falloff: f32,
    pub direction: f32,
    pub inner_angle: f32,
    pub outer_angle: f32,
    pub source_width: f32,
    pub cast_shadows: bool,
    pub visible: bool,
}

impl Default for SpotLight2d {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            color: Vec3::ONE,
            intensity: 1.0,
            radius: 0.5,
            falloff: 0.0,
            direction: -90.0,
            inner_angle: 0.0,
            outer_angle: 45.0,
            source_width: 1.0,
            cast_shadows: false,
            visible: true,
        }
    }
}
