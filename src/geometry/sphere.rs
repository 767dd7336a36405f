use crate::hittable::Hittable;
use crate::materials::Material;
use crate::math::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub center: Vec3,
    pub material: Material,
}

impl Sphere {
    pub fn new(radius: f32, center: Vec3, material: Material) -> Sphere {
        Sphere {
            radius,
            center,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, r: Ray) -> Option<f32> {
        let oc: Vec3 = r.origin - self.center;
        // direction is unit length, so the quadratic's leading coefficient is 1
        let b = 2.0 * (r.direction * oc);
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        let mut time = (-b - discriminant_sqrt) / 2.0;
        if time < 0.0 {
            time = (-b + discriminant_sqrt) / 2.0;
        }
        if time < 0.0 {
            // both intersections are behind the ray origin
            return None;
        }
        Some(time)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalized()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(1.0, center, Material::default())
    }

    #[test]
    fn test_hit_from_outside() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let t = sphere.intersect(ray).unwrap();
        assert!((t - 4.0).abs() < 1e-5, "{}", t);
        let normal = sphere.normal_at(ray.point_at_parameter(t));
        assert!((normal - Vec3::Z).norm() < 1e-5);
    }

    #[test]
    fn test_miss_when_pointing_away() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        for direction in [Vec3::Z, Vec3::X, -Vec3::Y, Vec3::new(1.0, 1.0, 1.0).normalized()] {
            let ray = Ray::new(Vec3::ZERO, direction);
            assert_eq!(sphere.intersect(ray), None, "{:?}", direction);
        }
    }

    #[test]
    fn test_miss_when_discriminant_negative() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 3.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert_eq!(sphere.intersect(ray), None);
    }

    #[test]
    fn test_origin_inside_uses_far_root() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = sphere.intersect(ray).unwrap();
        assert!((t - 1.0).abs() < 1e-5, "{}", t);
    }

    #[test]
    fn test_origin_on_surface_aimed_outward() {
        // grazing the surface going outward: the far root is ~0 and the result is either
        // a zero distance hit or a miss, never a positive distance.
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::X, Vec3::X);
        match sphere.intersect(ray) {
            Some(t) => assert!(t.abs() < 1e-5, "{}", t),
            None => {}
        }
    }

    #[test]
    fn test_tangent_ray() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 1.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let t = sphere.intersect(ray).unwrap();
        assert!((t - 5.0).abs() < 1e-3, "{}", t);
    }
}
