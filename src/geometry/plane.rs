use crate::hittable::Hittable;
use crate::materials::Material;
use crate::math::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    pub position: Vec3,
    normal: Vec3,
    pub material: Material,
}

impl Plane {
    /// `normal` does not need to be unit length, it is normalized here.
    pub fn new(position: Vec3, normal: Vec3, material: Material) -> Plane {
        Plane {
            position,
            normal: normal.normalized(),
            material,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn intersect(&self, r: Ray) -> Option<f32> {
        let vd = self.normal * r.direction;
        if vd.abs() < PARALLEL_EPSILON {
            return None;
        }
        let time = ((self.position - r.origin) * self.normal) / vd;
        if time < 0.0 {
            return None;
        }
        Some(time)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
