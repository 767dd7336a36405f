pub use crate::camera::Camera;
pub use crate::geometry::{Plane, SceneObject, Sphere};
pub use crate::hittable::Hittable;
pub use crate::integrator::{DirectLightingIntegrator, RenderError, SamplerIntegrator};
pub use crate::lights::Light;
pub use crate::materials::Material;
pub use crate::math::*;
pub use crate::parsing::config::{Config, OutputFormat, RenderSettings, Resolution};
pub use crate::parsing::{load_scene, LoadError};
pub use crate::profile::Profile;
pub use crate::renderer::{Film, NaiveRenderer, Renderer, Vec2D};
pub use crate::tonemap::{Clamp, Tonemapper};
pub use crate::world::{SceneError, World, MAX_OBJECTS};
