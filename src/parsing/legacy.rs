//! The older scene format: a flat JSON array where every entry is tagged with
//! a lowercase `type` and lights sit in the same list as objects.
//!
//! ```json
//! [
//!   { "type": "camera", "width": 1.0, "height": 1.0 },
//!   { "type": "sphere", "color": [1, 0, 0], "position": [0, 0, -5], "radius": 1 },
//!   { "type": "light", "color": [1, 1, 1], "position": [0, 5, -5], "radial-a2": 0.1 }
//! ]
//! ```

use super::LoadError;

use crate::materials::Material;
use crate::math::*;
use crate::world::{Camera, Light, Plane, SceneObject, Sphere, World};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CameraEntry {
    width: f32,
    height: f32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereEntry {
    position: Vec3,
    radius: f32,
    #[serde(default, alias = "color")]
    diffuse_color: Vec3,
    #[serde(default)]
    specular_color: Vec3,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaneEntry {
    position: Vec3,
    normal: Vec3,
    #[serde(default, alias = "color")]
    diffuse_color: Vec3,
    #[serde(default)]
    specular_color: Vec3,
}

fn one() -> f32 {
    1.0
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct LightEntry {
    color: Vec3,
    position: Vec3,
    direction: Option<Vec3>,
    #[serde(default = "one")]
    radial_a0: f32,
    #[serde(default)]
    radial_a1: f32,
    #[serde(default)]
    radial_a2: f32,
    #[serde(default)]
    angular_a0: f32,
    #[serde(default)]
    theta: f32,
}

impl From<LightEntry> for Light {
    fn from(entry: LightEntry) -> Self {
        let mut light = Light::point(entry.color, entry.position).with_radial(
            entry.radial_a0,
            entry.radial_a1,
            entry.radial_a2,
        );
        light.direction = entry.direction.map(|direction| direction.normalized());
        light.angular_a0 = entry.angular_a0;
        light.theta = entry.theta;
        light
    }
}

fn parse_entry<T: DeserializeOwned>(index: usize, kind: &str, entry: Value) -> Result<T, LoadError> {
    serde_json::from_value(entry).map_err(|source| LoadError::InvalidEntry {
        index,
        kind: kind.to_string(),
        source,
    })
}

/// Parses a legacy JSON scene and builds the world from it.
/// Objects keep their relative order, and so do lights.
pub fn parse_legacy_scene(input: &str) -> Result<World, LoadError> {
    let entries: Vec<Value> = serde_json::from_str(input)?;
    let mut objects = Vec::new();
    let mut lights = Vec::new();

    for (index, mut entry) in entries.into_iter().enumerate() {
        let kind = match entry.as_object_mut().and_then(|map| map.remove("type")) {
            Some(Value::String(kind)) => kind,
            _ => return Err(LoadError::MissingType { index }),
        };
        debug!("entry {} is a {}", index, kind);
        match kind.as_str() {
            "camera" => {
                let camera: CameraEntry = parse_entry(index, &kind, entry)?;
                objects.push(Camera::new(camera.width, camera.height).into());
            }
            "sphere" => {
                let sphere: SphereEntry = parse_entry(index, &kind, entry)?;
                objects.push(SceneObject::from(Sphere::new(
                    sphere.radius,
                    sphere.position,
                    Material::new(sphere.diffuse_color, sphere.specular_color),
                )));
            }
            "plane" => {
                let plane: PlaneEntry = parse_entry(index, &kind, entry)?;
                objects.push(SceneObject::from(Plane::new(
                    plane.position,
                    plane.normal,
                    Material::new(plane.diffuse_color, plane.specular_color),
                )));
            }
            "light" => {
                let light: LightEntry = parse_entry(index, &kind, entry)?;
                lights.push(Light::from(light));
            }
            _ => return Err(LoadError::UnknownObjectType { index, kind }),
        }
    }

    Ok(World::new(objects, lights)?)
}
