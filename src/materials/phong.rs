use crate::math::*;

pub const DEFAULT_SHININESS: f32 = 20.0;

/// Lambertian term: `(Kd ⊙ Il) * (N·L)` when the surface faces the light, black otherwise.
pub fn diffuse(normal: Vec3, to_light: Vec3, light_color: Vec3, object_color: Vec3) -> Vec3 {
    let n_dot_l = normal * to_light;
    if n_dot_l > 0.0 {
        object_color.hadamard(light_color) * n_dot_l
    } else {
        Vec3::ZERO
    }
}

/// Phong highlight: `(Ks ⊙ Il) * (V·R)^ns`.
///
/// `reflected` is the mirror of `to_light` about `normal`. Both the viewer
/// alignment and the facing condition must hold, otherwise the term is black.
pub fn specular(
    shininess: f32,
    to_light: Vec3,
    reflected: Vec3,
    normal: Vec3,
    to_viewer: Vec3,
    specular_color: Vec3,
    light_color: Vec3,
) -> Vec3 {
    let v_dot_r = to_viewer * reflected;
    let n_dot_l = normal * to_light;
    if v_dot_r > 0.0 && n_dot_l > 0.0 {
        specular_color.hadamard(light_color) * v_dot_r.powf(shininess)
    } else {
        Vec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffuse_never_negative() {
        let normal = Vec3::Y;
        let color = Vec3::new(0.8, 0.5, 0.2);
        for to_light in [
            -Vec3::Y,
            Vec3::X,
            Vec3::new(0.0, -1.0, 1.0).normalized(),
            Vec3::new(1.0, -0.001, 0.0).normalized(),
        ] {
            assert_eq!(diffuse(normal, to_light, Vec3::ONE, color), Vec3::ZERO);
        }
    }

    #[test]
    fn test_diffuse_scales_with_cosine() {
        let to_light = Vec3::new(1.0, 1.0, 0.0).normalized();
        let result = diffuse(Vec3::Y, to_light, Vec3::new(1.0, 0.5, 1.0), Vec3::new(1.0, 1.0, 0.0));
        let cosine = std::f32::consts::FRAC_1_SQRT_2;
        assert!((result.x - cosine).abs() < 1e-6);
        assert!((result.y - 0.5 * cosine).abs() < 1e-6);
        assert_eq!(result.z, 0.0);
    }

    #[test]
    fn test_specular_requires_both_conditions() {
        let to_light = Vec3::new(1.0, 1.0, 0.0).normalized();
        let reflected = (-to_light).reflect(Vec3::Y);
        let ks = Vec3::ONE;
        // viewer sitting on the mirror direction sees the full highlight
        let peak = specular(20.0, to_light, reflected, Vec3::Y, reflected, ks, Vec3::ONE);
        assert!((peak - Vec3::ONE).norm() < 1e-4, "{:?}", peak);
        // viewer on the wrong side
        let away = specular(20.0, to_light, reflected, Vec3::Y, -reflected, ks, Vec3::ONE);
        assert_eq!(away, Vec3::ZERO);
        // light behind the surface
        let behind = specular(20.0, -to_light, reflected, Vec3::Y, reflected, ks, Vec3::ONE);
        assert_eq!(behind, Vec3::ZERO);
    }

    #[test]
    fn test_specular_falls_off_with_shininess() {
        let to_light = Vec3::Y;
        let reflected = Vec3::Y;
        let viewer = Vec3::new(0.3, 1.0, 0.0).normalized();
        let soft = specular(2.0, to_light, reflected, Vec3::Y, viewer, Vec3::ONE, Vec3::ONE);
        let sharp = specular(50.0, to_light, reflected, Vec3::Y, viewer, Vec3::ONE, Vec3::ONE);
        assert!(sharp.x < soft.x);
        assert!(sharp.x > 0.0);
    }
}
