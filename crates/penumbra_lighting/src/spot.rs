use glam::Vec2;

use crate::light::SpotLight;

/// Nearest emitting point of a spot light to `frag_pos`.
///
/// A spot light with a `source_width` emits from a bar centered on `center`
/// and perpendicular to `direction`. Shading from the closest point on that
/// bar keeps the light continuous across the bar's ends. A width of zero is
/// a plain point source.
pub fn effective_center(light: &SpotLight, frag_pos: Vec2) -> Vec2 {
    if light.source_width <= 0.0 {
        return light.center;
    }

    let axis = light.direction.perp().normalize_or_zero();
    let half_width = light.source_width * 0.5;
    let along = (frag_pos - light.center)
        .dot(axis)
        .clamp(-half_width, half_width);
    light.center + axis * along
}

/// Angular weight of `pos` inside the light's cone, in `[0, 1]`.
///
/// 1 inside `inner_angle`, 0 past `outer_angle`, smooth in between.
pub fn spot_mask(light: &SpotLight, pos: Vec2, effective_center: Vec2) -> f32 {
    debug_assert!(
        light.inner_angle <= light.outer_angle,
        "spot light cone is inverted: inner {} > outer {}",
        light.inner_angle,
        light.outer_angle
    );

    let to_pos = pos - effective_center;
    if to_pos == Vec2::ZERO {
        // On the emitter itself
        return 1.0;
    }

    let cos_theta = (-to_pos.normalize()).dot(light.direction.normalize_or_zero());
    let cos_inner = light.inner_angle.cos();
    let cos_outer = light.outer_angle.cos();
    smoothstep(cos_outer, cos_inner, cos_theta)
}

/// Hermite interpolation between `edge0` and `edge1`, clamped to `[0, 1]`.
/// Equal edges give a hard step at the edge.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x >= edge0 { 1.0 } else { 0.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
