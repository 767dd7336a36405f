mod direct;

pub use direct::DirectLightingIntegrator;

use crate::math::*;
use crate::profile::Profile;
use crate::world::World;

use thiserror::Error;

/// Structural problems found while rendering. These abort the render.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("scene has no camera, nothing to render from")]
    MissingCamera,
    #[error("object {index} ({kind}) was hit but is not a shadeable surface")]
    NotASurface { index: usize, kind: &'static str },
}

pub trait SamplerIntegrator: Sync + Send {
    /// the scene every ray of this integrator is traced against.
    fn world(&self) -> &World;
    /// color seen along a camera ray, in [0, 1] per channel.
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> Result<Vec3, RenderError>;
}
