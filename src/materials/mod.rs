mod phong;

pub use phong::{diffuse, specular, DEFAULT_SHININESS};

use crate::math::*;

/// Surface colors for the local illumination model. Components are in [0, 1].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Material {
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
}

impl Material {
    pub fn new(diffuse_color: Vec3, specular_color: Vec3) -> Material {
        Material {
            diffuse_color,
            specular_color,
        }
    }

    pub fn matte(diffuse_color: Vec3) -> Material {
        Material::new(diffuse_color, Vec3::ZERO)
    }

    /// contribution of a single unoccluded light, before attenuation.
    /// all direction vectors are unit length, `to_light` and `to_viewer` point away from the surface.
    pub fn shade(
        &self,
        normal: Vec3,
        to_light: Vec3,
        to_viewer: Vec3,
        light_color: Vec3,
        shininess: f32,
    ) -> Vec3 {
        let reflected = (-to_light).reflect(normal);
        diffuse(normal, to_light, light_color, self.diffuse_color)
            + specular(
                shininess,
                to_light,
                reflected,
                normal,
                to_viewer,
                self.specular_color,
                light_color,
            )
    }
}
