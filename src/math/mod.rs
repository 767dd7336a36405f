mod vec;

pub use std::f32::INFINITY;
pub use vec::Vec3;

/// rays whose direction is closer than this to lying within a plane are treated as parallel to it.
pub const PARALLEL_EPSILON: f32 = 0.0001;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(&self, time: f32) -> Vec3 {
        self.origin + self.direction * time
    }
}
