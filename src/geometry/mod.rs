mod plane;
mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;

use crate::camera::Camera;
use crate::hittable::Hittable;
use crate::math::*;

/// Everything that can occupy a slot in the scene's object list.
/// Lights are kept separately by the world.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneObject {
    Camera(Camera),
    Sphere(Sphere),
    Plane(Plane),
}

impl SceneObject {
    pub fn kind(&self) -> &'static str {
        match self {
            SceneObject::Camera(_) => "camera",
            SceneObject::Sphere(_) => "sphere",
            SceneObject::Plane(_) => "plane",
        }
    }

    /// the geometric view of this object. cameras have none.
    pub fn as_hittable(&self) -> Option<&dyn Hittable> {
        match self {
            SceneObject::Camera(_) => None,
            SceneObject::Sphere(sphere) => Some(sphere),
            SceneObject::Plane(plane) => Some(plane),
        }
    }

    pub fn intersect(&self, r: Ray) -> Option<f32> {
        self.as_hittable().and_then(|hittable| hittable.intersect(r))
    }
}

impl From<Camera> for SceneObject {
    fn from(data: Camera) -> Self {
        SceneObject::Camera(data)
    }
}

impl From<Sphere> for SceneObject {
    fn from(data: Sphere) -> Self {
        SceneObject::Sphere(data)
    }
}

impl From<Plane> for SceneObject {
    fn from(data: Plane) -> Self {
        SceneObject::Plane(data)
    }
}
