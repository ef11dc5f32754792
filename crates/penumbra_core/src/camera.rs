use glam::{Mat4, UVec2, Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Depth range of the orthographic projection. 2D lighting only uses the
/// xy plane, so any range containing z = 0 works.
const NEAR: f32 = -1000.0;
const FAR: f32 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera2d {
    /// World position at the center of the viewport.
    pub position: Vec2,
    /// World units covered by one pixel.
    pub scale: f32,
}

impl Default for Camera2d {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl Camera2d {
    pub fn new(position: Vec2, scale: f32) -> Self {
        Self { position, scale }
    }

    /// Computes the "Projection Matrix" (World -> Clip)
    pub fn compute_projection_matrix(&self, size: UVec2) -> Mat4 {
        let half = size.as_vec2() * self.scale * 0.5;
        let min = self.position - half;
        let max = self.position + half;
        Mat4::orthographic_rh(min.x, max.x, min.y, max.y, NEAR, FAR)
    }

    /// Bakes the camera into a view for a viewport of `size` pixels.
    pub fn view(&self, size: UVec2) -> View2d {
        View2d {
            world_from_clip: self.compute_projection_matrix(size).inverse(),
            size,
        }
    }
}

/// Per-frame view data the resolve pass reads to recover world positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View2d {
    pub world_from_clip: Mat4,
    pub size: UVec2,
}

impl View2d {
    /// Maps a fragment coordinate (pixel units, origin top-left, y down)
    /// to a world-space position.
    pub fn frag_to_world(&self, frag: Vec2) -> Vec2 {
        let uv = frag / self.size.as_vec2();
        // Flip Y because texture coordinates go down, but the world goes up
        let ndc = Vec2::new(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0);
        let world = self.world_from_clip * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        world.truncate().truncate() / world.w
    }

    /// World position of the center of `pixel`.
    pub fn pixel_to_world(&self, pixel: UVec2) -> Vec2 {
        self.frag_to_world(pixel.as_vec2() + Vec2::splat(0.5))
    }

    pub fn pixel_count(&self) -> usize {
        self.size.x as usize * self.size.y as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_center_pixel_maps_to_camera_position() {
        let camera = Camera2d::new(Vec2::new(3.0, -2.0), 0.5);
        let view = camera.view(UVec2::new(5, 5));
        assert!(approx(view.pixel_to_world(UVec2::new(2, 2)), camera.position));
    }

    #[test]
    fn test_pixel_rows_go_down_in_world() {
        let view = Camera2d::default().view(UVec2::new(4, 4));
        let top = view.pixel_to_world(UVec2::new(0, 0));
        let bottom = view.pixel_to_world(UVec2::new(0, 3));
        assert!(approx(top, Vec2::new(-1.5, 1.5)));
        assert!(approx(bottom, Vec2::new(-1.5, -1.5)));
    }

    #[test]
    fn test_scale_is_world_units_per_pixel() {
        let view = Camera2d::new(Vec2::ZERO, 2.0).view(UVec2::new(10, 10));
        let a = view.pixel_to_world(UVec2::new(4, 4));
        let b = view.pixel_to_world(UVec2::new(5, 4));
        assert!(((b - a).x - 2.0).abs() < 1e-4);
    }
}
