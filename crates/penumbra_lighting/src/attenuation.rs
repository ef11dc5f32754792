/// Smooth distance attenuation with a hard cutoff at `radius`.
///
/// `intensity * (1 - s²)² / (1 + falloff * s²)` with `s = dist / radius`.
/// The curve and its slope both reach zero at the radius, so lights fade out
/// without a visible edge. `falloff` concentrates the light towards the
/// center without moving the cutoff.
///
/// See [A better point light attenuation function][lisyarus].
///
/// [lisyarus]: https://lisyarus.github.io/blog/posts/point-light-attenuation.html
///
/// `radius` must be strictly positive.
#[inline]
pub fn attenuation(dist: f32, radius: f32, intensity: f32, falloff: f32) -> f32 {
    let s = dist / radius;
    if s > 1.0 {
        return 0.0;
    }
    let s2 = s * s;
    let f = 1.0 - s2;
    intensity * f * f / (1.0 + falloff * s2)
}
