use glam::{UVec2, Vec2};
use penumbra_core::LightingError;

/// The read path into an occluder distance field.
///
/// Values `<= 0` are on or inside an occluder. Positive values are a lower
/// bound on the distance to the nearest occluder surface, not necessarily
/// the exact euclidean distance.
pub trait DistanceField: Sync {
    fn sample_distance(&self, world_pos: Vec2) -> f32;
}

/// Axis-aligned world-space rectangle covered by a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl FieldBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_size(center: Vec2, half_size: Vec2) -> Self {
        Self::new(center - half_size, center + half_size)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// World -> normalized field coordinates, `[0, 1]` inside the bounds.
    pub fn world_to_uv(&self, world_pos: Vec2) -> Vec2 {
        (world_pos - self.min) / self.size()
    }

    pub fn uv_to_world(&self, uv: Vec2) -> Vec2 {
        self.min + uv * self.size()
    }
}

/// A distance field stored as a grid of texels, sampled with bilinear
/// filtering and clamp-to-edge addressing.
#[derive(Clone, Debug)]
pub struct GridDistanceField {
    size: UVec2,
    bounds: FieldBounds,
    texels: Vec<f32>, // row-major, row 0 at bounds.min.y
}

impl GridDistanceField {
    pub fn new(size: UVec2, bounds: FieldBounds, texels: Vec<f32>) -> Result<Self, LightingError> {
        if size.x == 0 || size.y == 0 {
            return Err(LightingError::EmptyField);
        }
        let extent = bounds.size();
        if !(extent.x > 0.0 && extent.y > 0.0) {
            return Err(LightingError::DegenerateBounds);
        }
        let expected = size.x as usize * size.y as usize;
        if texels.len() != expected {
            return Err(LightingError::FieldSize {
                expected,
                actual: texels.len(),
            });
        }

        Ok(Self {
            size,
            bounds,
            texels,
        })
    }

    /// Bakes a field by evaluating `f` at every texel center.
    pub fn from_fn(
        size: UVec2,
        bounds: FieldBounds,
        f: impl Fn(Vec2) -> f32,
    ) -> Result<Self, LightingError> {
        let texel = Vec2::ONE / size.as_vec2();
        let mut texels = Vec::with_capacity(size.x as usize * size.y as usize);
        for y in 0..size.y {
            for x in 0..size.x {
                let uv = (Vec2::new(x as f32, y as f32) + 0.5) * texel;
                texels.push(f(bounds.uv_to_world(uv)));
            }
        }
        Self::new(size, bounds, texels)
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn bounds(&self) -> FieldBounds {
        self.bounds
    }

    /// The stored distance at texel `(x, y)`, `None` outside the grid.
    pub fn texel(&self, x: u32, y: u32) -> Option<f32> {
        (x < self.size.x && y < self.size.y).then(|| self.at(x, y))
    }

    fn at(&self, x: u32, y: u32) -> f32 {
        self.texels[(y * self.size.x + x) as usize]
    }

    fn sample_uv(&self, uv: Vec2) -> f32 {
        // Texel centers sit at (i + 0.5) / size
        let max = (self.size - UVec2::ONE).as_vec2();
        let p = (uv * self.size.as_vec2() - 0.5).clamp(Vec2::ZERO, max);

        let x0 = p.x.floor() as u32;
        let y0 = p.y.floor() as u32;
        let x1 = (x0 + 1).min(self.size.x - 1);
        let y1 = (y0 + 1).min(self.size.y - 1);
        let w = p - p.floor();

        let top = self.at(x0, y0) * (1.0 - w.x) + self.at(x1, y0) * w.x;
        let bot = self.at(x0, y1) * (1.0 - w.x) + self.at(x1, y1) * w.x;
        top * (1.0 - w.y) + bot * w.y
    }
}

impl DistanceField for GridDistanceField {
    fn sample_distance(&self, world_pos: Vec2) -> f32 {
        self.sample_uv(self.bounds.world_to_uv(world_pos))
    }
}

/// The same distance everywhere. Positive values describe an empty scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantDistanceField(pub f32);

impl DistanceField for ConstantDistanceField {
    fn sample_distance(&self, _world_pos: Vec2) -> f32 {
        self.0
    }
}

/// An analytic field.
pub struct FnDistanceField<F>(pub F);

impl<F> DistanceField for FnDistanceField<F>
where
    F: Fn(Vec2) -> f32 + Sync,
{
    fn sample_distance(&self, world_pos: Vec2) -> f32 {
        (self.0)(world_pos)
    }
}

impl<D: DistanceField + ?Sized> DistanceField for &D {
    fn sample_distance(&self, world_pos: Vec2) -> f32 {
        (**self).sample_distance(world_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bounds() -> FieldBounds {
        FieldBounds::new(Vec2::ZERO, Vec2::new(2.0, 2.0))
    }

    #[test]
    fn test_texel_centers_return_stored_values() {
        let field =
            GridDistanceField::new(UVec2::new(2, 2), unit_bounds(), vec![1.0, 2.0, 3.0, 4.0])
                .unwrap();
        // 2x2 texels over a 2x2 world: centers at 0.5 and 1.5
        assert_eq!(field.sample_distance(Vec2::new(0.5, 0.5)), 1.0);
        assert_eq!(field.sample_distance(Vec2::new(1.5, 0.5)), 2.0);
        assert_eq!(field.sample_distance(Vec2::new(0.5, 1.5)), 3.0);
        assert_eq!(field.sample_distance(Vec2::new(1.5, 1.5)), 4.0);
    }

    #[test]
    fn test_texel_lookup_stays_inside_grid() {
        let field =
            GridDistanceField::new(UVec2::new(2, 2), unit_bounds(), vec![1.0, 2.0, 3.0, 4.0])
                .unwrap();
        assert_eq!(field.texel(1, 0), Some(2.0));
        assert_eq!(field.texel(0, 1), Some(3.0));
        // One past the row end must not wrap into the next row
        assert_eq!(field.texel(2, 0), None);
        assert_eq!(field.texel(0, 2), None);
        assert_eq!(field.texel(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_bilinear_between_texels() {
        let field =
            GridDistanceField::new(UVec2::new(2, 2), unit_bounds(), vec![1.0, 2.0, 3.0, 4.0])
                .unwrap();
        assert!((field.sample_distance(Vec2::new(1.0, 0.5)) - 1.5).abs() < 1e-6);
        assert!((field.sample_distance(Vec2::new(1.0, 1.0)) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_outside_bounds_clamps_to_edge() {
        let field =
            GridDistanceField::new(UVec2::new(2, 2), unit_bounds(), vec![1.0, 2.0, 3.0, 4.0])
                .unwrap();
        assert_eq!(field.sample_distance(Vec2::new(-10.0, -10.0)), 1.0);
        assert_eq!(field.sample_distance(Vec2::new(10.0, 10.0)), 4.0);
    }

    #[test]
    fn test_from_fn_reproduces_linear_field() {
        let bounds = FieldBounds::new(Vec2::new(-4.0, -4.0), Vec2::new(4.0, 4.0));
        let field = GridDistanceField::from_fn(UVec2::new(16, 16), bounds, |p| p.x).unwrap();
        // Bilinear filtering is exact on linear functions away from the edges
        for x in [-2.0, -0.3, 0.0, 1.7] {
            let d = field.sample_distance(Vec2::new(x, 0.9));
            assert!((d - x).abs() < 1e-4, "{d} vs {x}");
        }
    }

    #[test]
    fn test_rejects_bad_construction() {
        assert!(matches!(
            GridDistanceField::new(UVec2::new(2, 2), unit_bounds(), vec![0.0; 3]),
            Err(LightingError::FieldSize {
                expected: 4,
                actual: 3
            })
        ));
        assert!(matches!(
            GridDistanceField::new(UVec2::new(0, 2), unit_bounds(), vec![]),
            Err(LightingError::EmptyField)
        ));
        assert!(matches!(
            GridDistanceField::new(
                UVec2::new(1, 1),
                FieldBounds::new(Vec2::ONE, Vec2::ONE),
                vec![0.0]
            ),
            Err(LightingError::DegenerateBounds)
        ));
    }
}
