pub use crate::camera::Camera;
pub use crate::geometry::*;
pub use crate::lights::Light;

use crate::math::*;
use crate::tonemap::clamp;

use thiserror::Error;
use tracing::{info, warn};

/// hard limit on the number of objects (and separately, lights) in a scene.
pub const MAX_OBJECTS: usize = 128;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("scene has no camera")]
    MissingCamera,
    #[error("object {index} is a second camera, only one camera is supported")]
    DuplicateCamera { index: usize },
    #[error("scene has {count} objects, at most {} are supported", MAX_OBJECTS)]
    TooManyObjects { count: usize },
    #[error("scene has {count} lights, at most {} are supported", MAX_OBJECTS)]
    TooManyLights { count: usize },
    #[error("object {index} ({kind}): {reason}")]
    InvalidObject {
        index: usize,
        kind: &'static str,
        reason: String,
    },
    #[error("light {index}: {reason}")]
    InvalidLight { index: usize, reason: String },
}

/// the result of a nearest-object search.
#[derive(Copy, Clone, Debug)]
pub struct Hit<'a> {
    /// position of the object in the scene's object list
    pub index: usize,
    pub object: &'a SceneObject,
    pub time: f32,
}

/// The frozen scene. Built and validated once, then only read while rendering.
#[derive(Clone, Debug)]
pub struct World {
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
}

fn color_in_range(color: Vec3) -> bool {
    [color.x, color.y, color.z]
        .iter()
        .all(|&c| c.is_finite() && clamp(c) == c)
}

fn check_color(color: Vec3, what: &str) -> Result<(), String> {
    if color_in_range(color) {
        Ok(())
    } else {
        Err(format!("{} {:?} has a component outside of [0, 1]", what, color))
    }
}

fn validate_object(index: usize, object: &SceneObject) -> Result<(), SceneError> {
    let invalid = |reason: String| SceneError::InvalidObject {
        index,
        kind: object.kind(),
        reason,
    };
    match object {
        SceneObject::Camera(camera) => {
            if !(camera.width > 0.0) || !camera.width.is_finite() {
                return Err(invalid(format!("width must be positive, got {}", camera.width)));
            }
            if !(camera.height > 0.0) || !camera.height.is_finite() {
                return Err(invalid(format!("height must be positive, got {}", camera.height)));
            }
        }
        SceneObject::Sphere(sphere) => {
            if !(sphere.radius > 0.0) || !sphere.radius.is_finite() {
                return Err(invalid(format!("radius must be positive, got {}", sphere.radius)));
            }
            if !sphere.center.is_finite() {
                return Err(invalid(String::from("center must be finite")));
            }
            check_color(sphere.material.diffuse_color, "diffuse color").map_err(invalid)?;
            check_color(sphere.material.specular_color, "specular color").map_err(invalid)?;
        }
        SceneObject::Plane(plane) => {
            if !plane.normal().is_finite() {
                return Err(invalid(String::from("normal must be finite and non-zero")));
            }
            if !plane.position.is_finite() {
                return Err(invalid(String::from("position must be finite")));
            }
            check_color(plane.material.diffuse_color, "diffuse color").map_err(invalid)?;
            check_color(plane.material.specular_color, "specular color").map_err(invalid)?;
        }
    }
    Ok(())
}

fn validate_light(index: usize, light: &Light) -> Result<(), SceneError> {
    let invalid = |reason: String| SceneError::InvalidLight { index, reason };
    check_color(light.color, "color").map_err(invalid)?;
    if !light.position.is_finite() {
        return Err(invalid(String::from("position must be finite")));
    }
    if let Some(direction) = light.direction {
        if !direction.is_finite() {
            return Err(invalid(String::from("direction must be finite and non-zero")));
        }
    }
    if !(light.theta >= 0.0 && light.theta <= 180.0) {
        return Err(invalid(format!("theta must be in [0, 180], got {}", light.theta)));
    }
    // a negative exponent would make the spot brighter off its axis
    if !(light.angular_a0 >= 0.0) || !light.angular_a0.is_finite() {
        return Err(invalid(format!(
            "angular_a0 must be finite and non-negative, got {}",
            light.angular_a0
        )));
    }
    for (name, coefficient) in [
        ("radial_a0", light.radial_a0),
        ("radial_a1", light.radial_a1),
        ("radial_a2", light.radial_a2),
    ] {
        if !coefficient.is_finite() {
            return Err(invalid(format!("{} must be finite, got {}", name, coefficient)));
        }
    }
    Ok(())
}

impl World {
    pub fn new(objects: Vec<SceneObject>, lights: Vec<Light>) -> Result<Self, SceneError> {
        if objects.len() > MAX_OBJECTS {
            return Err(SceneError::TooManyObjects {
                count: objects.len(),
            });
        }
        if lights.len() > MAX_OBJECTS {
            return Err(SceneError::TooManyLights {
                count: lights.len(),
            });
        }
        let mut camera_index = None;
        for (index, object) in objects.iter().enumerate() {
            validate_object(index, object)?;
            if let SceneObject::Camera(_) = object {
                if camera_index.is_some() {
                    return Err(SceneError::DuplicateCamera { index });
                }
                camera_index = Some(index);
            }
        }
        if camera_index.is_none() {
            return Err(SceneError::MissingCamera);
        }
        for (index, light) in lights.iter().enumerate() {
            validate_light(index, light)?;
        }
        if lights.is_empty() {
            warn!("scene has no lights, every surface will render black");
        }
        info!(
            "built world with {} objects and {} lights",
            objects.len(),
            lights.len()
        );
        Ok(World { objects, lights })
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.objects.iter().find_map(|object| match object {
            SceneObject::Camera(camera) => Some(camera),
            _ => None,
        })
    }

    /// Finds the closest object hit by `r` at a strictly positive distance.
    ///
    /// `exclude` skips one object by identity, so a surface never occludes itself.
    /// `max_distance` is an exclusive bound, hits at or beyond it are ignored.
    /// Ties keep the earliest object in the list.
    pub fn nearest_hit(
        &self,
        r: Ray,
        exclude: Option<&SceneObject>,
        max_distance: Option<f32>,
    ) -> Option<Hit<'_>> {
        let mut closest_so_far: f32 = max_distance.unwrap_or(INFINITY);
        let mut hit: Option<Hit<'_>> = None;
        for (index, object) in self.objects.iter().enumerate() {
            if exclude.is_some_and(|excluded| std::ptr::eq(excluded, object)) {
                continue;
            }
            let time = match object.intersect(r) {
                Some(time) => time,
                None => continue,
            };
            if time > 0.0 && time < closest_so_far {
                closest_so_far = time;
                hit = Some(Hit {
                    index,
                    object,
                    time,
                });
            }
        }
        hit
    }
}
