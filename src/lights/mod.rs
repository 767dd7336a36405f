use crate::math::*;

/// below this distance a light is considered coincident with the point it illuminates.
pub const COINCIDENT_LIGHT_DISTANCE: f32 = 0.000001;

/// A point light, optionally turned into a spot light by giving it a direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub color: Vec3,
    pub position: Vec3,
    /// unit axis of the spot cone. `None` for omnidirectional lights.
    pub direction: Option<Vec3>,
    pub radial_a0: f32,
    pub radial_a1: f32,
    pub radial_a2: f32,
    /// falloff exponent applied to the cosine between the spot axis and the light->surface direction.
    pub angular_a0: f32,
    /// half angle of the spot cone in degrees. 0 disables the hard cutoff.
    pub theta: f32,
}

impl Light {
    pub fn point(color: Vec3, position: Vec3) -> Light {
        Light {
            color,
            position,
            direction: None,
            radial_a0: 1.0,
            radial_a1: 0.0,
            radial_a2: 0.0,
            angular_a0: 0.0,
            theta: 0.0,
        }
    }

    pub fn spot(color: Vec3, position: Vec3, direction: Vec3, angular_a0: f32, theta: f32) -> Light {
        Light {
            direction: Some(direction.normalized()),
            angular_a0,
            theta,
            ..Light::point(color, position)
        }
    }

    pub fn with_radial(mut self, a0: f32, a1: f32, a2: f32) -> Self {
        self.radial_a0 = a0;
        self.radial_a1 = a1;
        self.radial_a2 = a2;
        self
    }

    /// `1 / (a0 + a1*d + a2*d^2)`.
    ///
    /// a light sitting on the surface, or coefficients that would make the
    /// denominator non-positive, give an attenuation of 1 instead of inf or NaN.
    pub fn radial_attenuation(&self, distance: f32) -> f32 {
        if distance <= COINCIDENT_LIGHT_DISTANCE {
            return 1.0;
        }
        let denominator =
            self.radial_a0 + self.radial_a1 * distance + self.radial_a2 * distance * distance;
        if !(denominator > 0.0) || !denominator.is_finite() {
            return 1.0;
        }
        1.0 / denominator
    }

    /// spot light falloff for a unit vector pointing from the light toward the surface.
    /// always 1 for omnidirectional lights.
    pub fn angular_attenuation(&self, light_to_surface: Vec3) -> f32 {
        let axis = match self.direction {
            Some(axis) => axis,
            None => return 1.0,
        };
        let cosine = axis * light_to_surface;
        if cosine <= 0.0 {
            return 0.0;
        }
        if self.theta > 0.0 && cosine < self.theta.to_radians().cos() {
            return 0.0;
        }
        cosine.powf(self.angular_a0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_radial_is_unity() {
        let light = Light::point(Vec3::ONE, Vec3::ZERO);
        for d in [0.0, 0.5, 1.0, 100.0] {
            assert_eq!(light.radial_attenuation(d), 1.0);
        }
    }

    #[test]
    fn test_radial_falloff() {
        let light = Light::point(Vec3::ONE, Vec3::ZERO).with_radial(1.0, 0.5, 0.25);
        assert_eq!(light.radial_attenuation(2.0), 1.0 / 3.0);
        assert!(light.radial_attenuation(4.0) < light.radial_attenuation(2.0));
    }

    #[test]
    fn test_radial_degenerate_inputs_stay_finite() {
        let zeroed = Light::point(Vec3::ONE, Vec3::ZERO).with_radial(0.0, 0.0, 1.0);
        assert_eq!(zeroed.radial_attenuation(0.0), 1.0);
        let all_zero = Light::point(Vec3::ONE, Vec3::ZERO).with_radial(0.0, 0.0, 0.0);
        assert_eq!(all_zero.radial_attenuation(3.0), 1.0);
        let negative = Light::point(Vec3::ONE, Vec3::ZERO).with_radial(-1.0, 0.0, 0.0);
        assert_eq!(negative.radial_attenuation(3.0), 1.0);
        let quadratic = Light::point(Vec3::ONE, Vec3::ZERO).with_radial(0.0, 0.0, 1.0);
        assert!(quadratic.radial_attenuation(1e-3).is_finite());
    }

    #[test]
    fn test_omnidirectional_angular_is_unity() {
        let light = Light::point(Vec3::ONE, Vec3::ZERO);
        assert_eq!(light.angular_attenuation(Vec3::X), 1.0);
        assert_eq!(light.angular_attenuation(-Vec3::Y), 1.0);
    }

    #[test]
    fn test_spot_decreases_off_axis() {
        let light = Light::spot(Vec3::ONE, Vec3::ZERO, -Vec3::Y * 3.0, 4.0, 0.0);
        let on_axis = light.angular_attenuation(-Vec3::Y);
        let slightly_off = light.angular_attenuation(Vec3::new(0.2, -1.0, 0.0).normalized());
        let far_off = light.angular_attenuation(Vec3::new(1.0, -1.0, 0.0).normalized());
        assert!((on_axis - 1.0).abs() < 1e-6);
        assert!(on_axis > slightly_off);
        assert!(slightly_off > far_off);
        assert!(far_off > 0.0);
        // behind the spot
        assert_eq!(light.angular_attenuation(Vec3::Y), 0.0);
    }

    #[test]
    fn test_spot_cutoff() {
        let light = Light::spot(Vec3::ONE, Vec3::ZERO, -Vec3::Y, 1.0, 30.0);
        let inside = Vec3::new(0.3, -1.0, 0.0).normalized();
        let outside = Vec3::new(1.0, -1.0, 0.0).normalized();
        assert!(light.angular_attenuation(inside) > 0.0);
        assert_eq!(light.angular_attenuation(outside), 0.0);
    }
}
