use glam::Vec2;

use crate::distance_field::DistanceField;

/// Sphere traces from `origin` towards `target` through `field`.
///
/// Returns `1.0` when the ray reaches the target and `0.0` when it lands on
/// an occluder. Each step advances by the sampled distance, which is safe
/// because the field never overestimates the distance to a surface. A ray
/// that runs out of steps counts as occluded: distant lights lose some
/// light rather than leak it through thin walls.
pub fn raymarch<D: DistanceField + ?Sized>(
    field: &D,
    origin: Vec2,
    target: Vec2,
    max_steps: u32,
) -> f32 {
    let to_target = target - origin;
    let target_dist_sq = to_target.length_squared();
    // A zero-length ray has nothing to cross and resolves on the first step
    let dir = to_target.normalize_or_zero();

    let mut marched = 0.0f32;
    for _ in 0..max_steps {
        let pos = origin + dir * marched;

        if marched * marched >= target_dist_sq {
            return 1.0;
        }

        let dist = field.sample_distance(pos);
        if dist <= 0.0 {
            return 0.0;
        }

        marched += dist;
    }

    0.0
}

#[cfg(test)]
mod tests {
    use penumbra_core::DEFAULT_RAYMARCH_STEPS;

    use super::*;
    use crate::distance_field::{ConstantDistanceField, FnDistanceField};

    /// A vertical wall of half-thickness 0.5 at `x = 5`.
    fn wall() -> FnDistanceField<impl Fn(Vec2) -> f32 + Sync> {
        FnDistanceField(|p: Vec2| (p.x - 5.0).abs() - 0.5)
    }

    #[test]
    fn test_empty_scene_is_visible() {
        let field = ConstantDistanceField(100.0);
        let v = raymarch(&field, Vec2::ZERO, Vec2::new(30.0, -40.0), DEFAULT_RAYMARCH_STEPS);
        assert_eq!(v, 1.0);
    }

    #[test]
    fn test_wall_on_path_blocks() {
        let v = raymarch(&wall(), Vec2::ZERO, Vec2::new(10.0, 0.0), DEFAULT_RAYMARCH_STEPS);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_wall_beside_path_does_not_block() {
        let v = raymarch(&wall(), Vec2::ZERO, Vec2::new(0.0, 10.0), DEFAULT_RAYMARCH_STEPS);
        assert_eq!(v, 1.0);
    }

    #[test]
    fn test_target_before_wall_is_visible() {
        let v = raymarch(&wall(), Vec2::ZERO, Vec2::new(3.0, 0.0), DEFAULT_RAYMARCH_STEPS);
        assert_eq!(v, 1.0);
    }

    #[test]
    fn test_step_exhaustion_counts_as_occluded() {
        // Each step advances 1 unit, 32 steps cannot cover 100 units
        let field = ConstantDistanceField(1.0);
        let v = raymarch(&field, Vec2::ZERO, Vec2::new(100.0, 0.0), DEFAULT_RAYMARCH_STEPS);
        assert_eq!(v, 0.0);

        let v = raymarch(&field, Vec2::ZERO, Vec2::new(100.0, 0.0), 128);
        assert_eq!(v, 1.0);
    }

    #[test]
    fn test_zero_length_ray_is_visible() {
        let field = ConstantDistanceField(1.0);
        assert_eq!(raymarch(&field, Vec2::ONE, Vec2::ONE, DEFAULT_RAYMARCH_STEPS), 1.0);
    }
}
