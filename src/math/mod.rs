mod aabb;
mod ray;
mod rect;

pub use aabb::AABB;
pub use ray::{intersect_aabb, Ray};
pub use rect::Rect;

/// Clamps `x` into `[a, b]`, with NaN mapped to `a`
pub fn clamp(x: f32, a: f32, b: f32) -> f32 {
    if x.is_nan() {
        return a;
    }
    x.max(a).min(b)
}
