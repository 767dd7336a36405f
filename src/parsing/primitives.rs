use crate::materials::Material;
use crate::math::*;
use crate::world::{Camera, Light, Plane, SceneObject, Sphere};

use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ObjectData {
    Camera {
        width: f32,
        height: f32,
    },
    Sphere {
        center: Vec3,
        radius: f32,
        diffuse_color: Vec3,
        specular_color: Option<Vec3>,
    },
    Plane {
        position: Vec3,
        normal: Vec3,
        diffuse_color: Vec3,
        specular_color: Option<Vec3>,
    },
}

impl From<ObjectData> for SceneObject {
    fn from(data: ObjectData) -> Self {
        match data {
            ObjectData::Camera { width, height } => Camera::new(width, height).into(),
            ObjectData::Sphere {
                center,
                radius,
                diffuse_color,
                specular_color,
            } => Sphere::new(
                radius,
                center,
                Material::new(diffuse_color, specular_color.unwrap_or(Vec3::ZERO)),
            )
            .into(),
            ObjectData::Plane {
                position,
                normal,
                diffuse_color,
                specular_color,
            } => Plane::new(
                position,
                normal,
                Material::new(diffuse_color, specular_color.unwrap_or(Vec3::ZERO)),
            )
            .into(),
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct LightData {
    pub color: Vec3,
    pub position: Vec3,
    pub direction: Option<Vec3>,
    pub radial_a0: Option<f32>,
    pub radial_a1: Option<f32>,
    pub radial_a2: Option<f32>,
    pub angular_a0: Option<f32>,
    pub theta: Option<f32>,
}

impl From<LightData> for Light {
    fn from(data: LightData) -> Self {
        let mut light = Light::point(data.color, data.position).with_radial(
            data.radial_a0.unwrap_or(1.0),
            data.radial_a1.unwrap_or(0.0),
            data.radial_a2.unwrap_or(0.0),
        );
        light.direction = data.direction.map(|direction| direction.normalized());
        light.angular_a0 = data.angular_a0.unwrap_or(0.0);
        light.theta = data.theta.unwrap_or(0.0);
        light
    }
}
