use std::time::Instant;

use glam::{UVec2, Vec2, Vec3, Vec4};
use penumbra_core::{DEFAULT_RAYMARCH_STEPS, LightingConfig, camera::View2d, rayon::prelude::*};

use crate::{
    attenuation::attenuation,
    distance_field::DistanceField,
    light::{AmbientLight, PointLight, SpotLight},
    raymarch::raymarch,
    spot::{effective_center, spot_mask},
    storage::LightList,
};

/// Everything one resolve pass reads. Built once per frame and shared,
/// read-only, by every pixel.
pub struct LightingContext<'a, D: DistanceField + ?Sized> {
    pub view: &'a View2d,
    pub ambient: AmbientLight,
    pub point_lights: &'a LightList<PointLight>,
    pub spot_lights: &'a LightList<SpotLight>,
    pub distance_field: &'a D,
    pub max_raymarch_steps: u32,
}

impl<'a, D: DistanceField + ?Sized> LightingContext<'a, D> {
    pub fn new(
        view: &'a View2d,
        ambient: AmbientLight,
        point_lights: &'a LightList<PointLight>,
        spot_lights: &'a LightList<SpotLight>,
        distance_field: &'a D,
    ) -> Self {
        Self {
            view,
            ambient,
            point_lights,
            spot_lights,
            distance_field,
            max_raymarch_steps: DEFAULT_RAYMARCH_STEPS,
        }
    }

    pub fn with_config(mut self, config: &LightingConfig) -> Self {
        self.max_raymarch_steps = config.max_raymarch_steps;
        self
    }

    fn visible(&self, casts_shadows: bool, pos: Vec2, light_pos: Vec2) -> bool {
        !casts_shadows
            || raymarch(self.distance_field, pos, light_pos, self.max_raymarch_steps) > 0.0
    }

    fn point_contribution(&self, light: &PointLight, pos: Vec2) -> Vec3 {
        let dist = light.center.distance(pos);
        // False for a NaN distance, which then skips the light
        let in_range = dist < light.radius;
        if !in_range || !self.visible(light.casts_shadows(), pos, light.center) {
            return Vec3::ZERO;
        }
        light.color * attenuation(dist, light.radius, light.intensity, light.falloff)
    }

    fn spot_contribution(&self, light: &SpotLight, pos: Vec2) -> Vec3 {
        let center = effective_center(light, pos);
        let dist = center.distance(pos);
        let in_range = dist < light.radius;
        if !in_range {
            return Vec3::ZERO;
        }

        let mask = spot_mask(light, pos, center);
        if mask <= 0.0 || !self.visible(light.casts_shadows(), pos, center) {
            return Vec3::ZERO;
        }
        light.color * attenuation(dist, light.radius, light.intensity, light.falloff) * mask
    }

    /// Final color at a world position. Alpha is always 1.
    pub fn resolve_at(&self, pos: Vec2) -> Vec4 {
        // Inside an occluder: ambient only
        if self.distance_field.sample_distance(pos) <= 0.0 {
            return self.ambient.color.extend(1.0);
        }

        let mut color = self.ambient.color;
        for light in self.point_lights {
            color += self.point_contribution(light, pos);
        }
        for light in self.spot_lights {
            color += self.spot_contribution(light, pos);
        }
        color.extend(1.0)
    }

    pub fn resolve_pixel(&self, pixel: UVec2) -> Vec4 {
        self.resolve_at(self.view.pixel_to_world(pixel))
    }

    /// Resolves every pixel of the view, rows in parallel.
    pub fn resolve_frame(&self) -> LitFrame {
        let start = Instant::now();
        let size = self.view.size;
        let mut pixels = vec![Vec4::ZERO; self.view.pixel_count()];

        if size.x > 0 {
            pixels
                .par_chunks_mut(size.x as usize)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, out) in row.iter_mut().enumerate() {
                        *out = self.resolve_pixel(UVec2::new(x as u32, y as u32));
                    }
                });
        }

        log::debug!(
            "Resolved {}x{} frame ({} point, {} spot lights) in {:.2?}",
            size.x,
            size.y,
            self.point_lights.count(),
            self.spot_lights.count(),
            start.elapsed()
        );

        LitFrame {
            width: size.x,
            height: size.y,
            pixels,
        }
    }
}

/// Output of a resolve pass: linear RGBA, row-major, row 0 at the top.
#[derive(Clone, Debug)]
pub struct LitFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec4>,
}

impl LitFrame {
    pub fn get(&self, x: u32, y: u32) -> Option<Vec4> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// 8-bit RGBA, channels clamped to `[0, 1]`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| {
                let c = (p.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
                [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
            })
            .collect()
    }
}
