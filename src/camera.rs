use crate::math::*;

/// distance from the eye to the view plane along -z.
pub const VIEW_PLANE_DISTANCE: f32 = 1.0;

/// Pinhole camera sitting at the origin, looking down -z.
///
/// `width` and `height` are the extent of the view plane in scene units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Camera {
        Camera { width, height }
    }

    pub fn origin(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// point on the view plane through the center of pixel (`row`, `col`) of a
    /// `film_width` x `film_height` raster. rows go top to bottom.
    pub fn view_plane_point(
        &self,
        row: usize,
        col: usize,
        film_width: usize,
        film_height: usize,
    ) -> Vec3 {
        let pixel_width = self.width / film_width as f32;
        let pixel_height = self.height / film_height as f32;
        Vec3::new(
            -self.width / 2.0 + pixel_width * (col as f32 + 0.5),
            -(-self.height / 2.0 + pixel_height * (row as f32 + 0.5)),
            -VIEW_PLANE_DISTANCE,
        )
    }

    pub fn get_ray(&self, row: usize, col: usize, film_width: usize, film_height: usize) -> Ray {
        let point = self.view_plane_point(row, col, film_width, film_height);
        Ray::new(self.origin(), (point - self.origin()).normalized())
    }
}
