use glam::{UVec2, Vec2};
use penumbra_core::{LightingError, camera::Camera2d};
use penumbra_lighting::{FieldBounds, GridDistanceField};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "shape")]
pub enum Occluder2d {
    Rectangle { center: Vec2, half_size: Vec2 },
}

impl Occluder2d {
    /// Exact signed distance from `p` to the occluder's outline.
    pub fn distance(&self, p: Vec2) -> f32 {
        match self {
            Occluder2d::Rectangle { center, half_size } => {
                let q = (p - *center).abs() - *half_size;
                q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0)
            }
        }
    }
}

/// Bakes `occluders` into a grid covering what `camera` sees through a
/// viewport of `viewport` pixels.
///
/// With no occluders every texel holds the diagonal of the covered area,
/// which no shadow ray inside it can exceed.
pub fn bake_distance_field(
    occluders: &[Occluder2d],
    camera: &Camera2d,
    viewport: UVec2,
    resolution: UVec2,
) -> Result<GridDistanceField, LightingError> {
    let half_size = viewport.as_vec2() * camera.scale * 0.5;
    let bounds = FieldBounds::from_center_half_size(camera.position, half_size);
    let empty = bounds.size().length();

    log::debug!(
        "Baking {} occluders into a {}x{} field over {:?}",
        occluders.len(),
        resolution.x,
        resolution.y,
        bounds
    );

    GridDistanceField::from_fn(resolution, bounds, |p| {
        occluders
            .iter()
            .map(|o| o.distance(p))
            .fold(empty, f32::min)
    })
}
