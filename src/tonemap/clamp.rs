use crate::math::Vec3;

use super::{Tonemapper, MAX_COLOR_VALUE};

/// saturates a channel into [0, 1]. NaN is treated as black.
pub fn clamp(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

pub fn clamp_color(color: Vec3) -> Vec3 {
    Vec3::new(clamp(color.x), clamp(color.y), clamp(color.z))
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Clamp;

impl Clamp {
    pub fn new() -> Self {
        Clamp
    }
}

impl Tonemapper for Clamp {
    fn map(&self, color: Vec3) -> [u8; 3] {
        let clamped = clamp_color(color);
        [
            (clamped.x * MAX_COLOR_VALUE) as u8,
            (clamped.y * MAX_COLOR_VALUE) as u8,
            (clamped.z * MAX_COLOR_VALUE) as u8,
        ]
    }
}
