mod clamp;

pub use clamp::{clamp, clamp_color, Clamp};

use crate::math::Vec3;

pub const MAX_COLOR_VALUE: f32 = 255.0;

/// maps an internal [0, 1] color to display bytes.
pub trait Tonemapper: Send + Sync {
    fn map(&self, color: Vec3) -> [u8; 3];
}
