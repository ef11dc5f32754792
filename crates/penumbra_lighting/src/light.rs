use glam::{Vec2, Vec3};
use penumbra_core::LightingError;

/// Uniform base illumination, added to every pixel regardless of occlusion.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3, // linear RGB
}

impl AmbientLight {
    pub fn new(color: Vec3) -> Self {
        Self { color }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLight {
    pub center: Vec2,
    pub radius: f32,
    pub color: Vec3,
    pub intensity: f32,
    pub falloff: f32,
    pub cast_shadows: u32, // 0 = off, anything else = on
}

impl PointLight {
    pub fn new(center: Vec2, radius: f32, color: Vec3, intensity: f32) -> Self {
        Self {
            center,
            radius,
            color,
            intensity,
            falloff: 0.0,
            cast_shadows: 0,
        }
    }

    pub fn with_falloff(mut self, falloff: f32) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn with_shadows(mut self, cast_shadows: bool) -> Self {
        self.cast_shadows = cast_shadows as u32;
        self
    }

    pub fn casts_shadows(&self) -> bool {
        self.cast_shadows != 0
    }

    /// The resolve pass divides by the radius, so it has to be checked
    /// before lights reach it.
    pub fn validate(&self) -> Result<(), LightingError> {
        validate_radius(self.radius)
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLight {
    pub center: Vec2,
    pub radius: f32,
    pub color: Vec3,
    pub intensity: f32,
    pub falloff: f32,
    /// Cone axis. Does not need to be normalized.
    pub direction: Vec2,
    /// Cone half-angles in radians, `0 <= inner_angle <= outer_angle <= PI`.
    pub inner_angle: f32,
    pub outer_angle: f32,
    /// Width of the emitting bar, perpendicular to `direction`. Zero makes
    /// this a point source.
    pub source_width: f32,
    pub cast_shadows: u32,
}

impl SpotLight {
    pub fn new(center: Vec2, direction: Vec2, radius: f32, color: Vec3, intensity: f32) -> Self {
        Self {
            center,
            radius,
            color,
            intensity,
            falloff: 0.0,
            direction,
            inner_angle: 0.0,
            outer_angle: std::f32::consts::FRAC_PI_4,
            source_width: 0.0,
            cast_shadows: 0,
        }
    }

    pub fn with_angles(mut self, inner_angle: f32, outer_angle: f32) -> Self {
        self.inner_angle = inner_angle;
        self.outer_angle = outer_angle;
        self
    }

    pub fn with_source_width(mut self, source_width: f32) -> Self {
        self.source_width = source_width;
        self
    }

    pub fn with_falloff(mut self, falloff: f32) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn with_shadows(mut self, cast_shadows: bool) -> Self {
        self.cast_shadows = cast_shadows as u32;
        self
    }

    pub fn casts_shadows(&self) -> bool {
        self.cast_shadows != 0
    }

    /// The cone mask is only monotonic when `inner_angle <= outer_angle`.
    /// The kernel does not correct inverted cones, so callers reject them here.
    pub fn validate(&self) -> Result<(), LightingError> {
        validate_radius(self.radius)?;
        if self.inner_angle > self.outer_angle {
            return Err(LightingError::InvertedCone {
                inner: self.inner_angle,
                outer: self.outer_angle,
            });
        }
        Ok(())
    }
}

fn validate_radius(radius: f32) -> Result<(), LightingError> {
    // NaN fails this too
    if radius > 0.0 {
        Ok(())
    } else {
        Err(LightingError::InvalidRadius { radius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_have_no_padding() {
        assert_eq!(std::mem::size_of::<PointLight>(), 36);
        assert_eq!(std::mem::size_of::<SpotLight>(), 56);
    }

    #[test]
    fn test_zero_radius_is_rejected() {
        let light = PointLight::new(Vec2::ZERO, 0.0, Vec3::ONE, 1.0);
        assert!(matches!(
            light.validate(),
            Err(LightingError::InvalidRadius { .. })
        ));
    }

    #[test]
    fn test_inverted_cone_is_rejected() {
        let light = SpotLight::new(Vec2::ZERO, Vec2::Y, 5.0, Vec3::ONE, 1.0).with_angles(1.0, 0.5);
        assert!(matches!(
            light.validate(),
            Err(LightingError::InvertedCone { .. })
        ));

        let light = light.with_angles(0.5, 1.0);
        assert!(light.validate().is_ok());
    }

    #[test]
    fn test_shadow_flag_is_an_integer() {
        let light = PointLight::new(Vec2::ZERO, 1.0, Vec3::ONE, 1.0).with_shadows(true);
        assert_eq!(light.cast_shadows, 1);
        assert!(light.casts_shadows());
    }
}
