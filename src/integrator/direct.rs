use super::{RenderError, SamplerIntegrator};

use crate::hittable::Hittable;
use crate::materials::DEFAULT_SHININESS;
use crate::math::*;
use crate::profile::Profile;
use crate::tonemap::clamp_color;
use crate::world::{Hit, World};

use std::sync::Arc;

/// Single bounce local illumination with hard shadows.
///
/// Every light gets one shadow ray from the hit point. Unoccluded lights add
/// their diffuse and specular terms scaled by radial and angular attenuation,
/// occluded lights add nothing.
pub struct DirectLightingIntegrator {
    pub world: Arc<World>,
    pub shininess: f32,
    pub background: Vec3,
}

impl DirectLightingIntegrator {
    pub fn new(world: Arc<World>) -> Self {
        DirectLightingIntegrator {
            world,
            shininess: DEFAULT_SHININESS,
            background: Vec3::ZERO,
        }
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_background(mut self, background: Vec3) -> Self {
        self.background = background;
        self
    }

    /// accumulated, unclamped light arriving at a primary hit.
    pub fn shade(
        &self,
        camera_ray: Ray,
        hit: Hit<'_>,
        profile: &mut Profile,
    ) -> Result<Vec3, RenderError> {
        let surface: &dyn Hittable =
            hit.object
                .as_hittable()
                .ok_or_else(|| RenderError::NotASurface {
                    index: hit.index,
                    kind: hit.object.kind(),
                })?;
        let point = camera_ray.point_at_parameter(hit.time);
        let normal = surface.normal_at(point);
        let to_viewer = -camera_ray.direction;
        let material = surface.material();

        let mut color = Vec3::ZERO;
        for light in self.world.lights() {
            let to_light = light.position - point;
            let distance_to_light = to_light.norm();
            if distance_to_light <= crate::lights::COINCIDENT_LIGHT_DISTANCE {
                // no usable direction toward a light sitting on the surface
                continue;
            }
            let to_light = to_light / distance_to_light;
            let shadow_ray = Ray::new(point, to_light);

            profile.shadow_rays += 1;
            if self
                .world
                .nearest_hit(shadow_ray, Some(hit.object), Some(distance_to_light))
                .is_some()
            {
                profile.occluded_rays += 1;
                continue;
            }

            let contribution =
                material.shade(normal, to_light, to_viewer, light.color, self.shininess);
            color += contribution
                * light.radial_attenuation(distance_to_light)
                * light.angular_attenuation(-to_light);
        }
        Ok(color)
    }
}

impl SamplerIntegrator for DirectLightingIntegrator {
    fn world(&self) -> &World {
        &self.world
    }

    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> Result<Vec3, RenderError> {
        profile.camera_rays += 1;
        match self.world.nearest_hit(camera_ray, None, None) {
            Some(hit) => {
                profile.primary_hits += 1;
                Ok(clamp_color(self.shade(camera_ray, hit, profile)?))
            }
            None => Ok(clamp_color(self.background)),
        }
    }
}
