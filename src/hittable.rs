use crate::materials::Material;
use crate::math::*;

/// A primitive that can be tested against a ray and shaded.
///
/// `intersect` returns the distance along the ray to the closest non-negative intersection,
/// or `None` when the ray misses or only hits behind its origin.
/// The ray direction is expected to be unit length.
pub trait Hittable {
    fn intersect(&self, r: Ray) -> Option<f32>;
    /// unit surface normal at a point that lies on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;
    fn material(&self) -> &Material;
}
