use nalgebra::Affine2;

use crate::math::{Point2, Vector2};

/// Maps curve coordinates to screen pixels, where hit tolerances apply.
pub trait ScreenTransform {
    /// Screen position of a curve-space point.
    fn to_screen(&self, p: &Point2) -> Point2;
}

impl<F> ScreenTransform for F
where
    F: Fn(Point2) -> Point2,
{
    fn to_screen(&self, p: &Point2) -> Point2 {
        self(*p)
    }
}

/// Curve coordinates are screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityTransform;

impl ScreenTransform for IdentityTransform {
    fn to_screen(&self, p: &Point2) -> Point2 {
        *p
    }
}

/// Uniform scale followed by a pixel offset, optionally flipping the y axis
/// for screens whose y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset: Vector2,
    pub flip_y: bool,
}

impl ViewTransform {
    /// Scales by `scale` and then shifts by `offset`, y axis up.
    #[must_use]
    pub fn new(scale: f64, offset: Vector2) -> Self {
        Self {
            scale,
            offset,
            flip_y: false,
        }
    }

    /// Same transform with the y axis pointing down.
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flip_y = true;
        self
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(1.0, Vector2::zeros())
    }
}

impl ScreenTransform for ViewTransform {
    fn to_screen(&self, p: &Point2) -> Point2 {
        let y = if self.flip_y { -p.y } else { p.y };
        Point2::new(p.x * self.scale + self.offset.x, y * self.scale + self.offset.y)
    }
}

impl ScreenTransform for Affine2<f64> {
    fn to_screen(&self, p: &Point2) -> Point2 {
        self.transform_point(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Matrix3;

    #[test]
    fn view_transform_scales_and_offsets() {
        let t = ViewTransform::new(10.0, Vector2::new(5.0, -5.0));
        let s = t.to_screen(&Point2::new(1.0, 2.0));
        assert_relative_eq!(s.x, 15.0);
        assert_relative_eq!(s.y, 15.0);
    }

    #[test]
    fn flipped_view_inverts_y() {
        let t = ViewTransform::new(2.0, Vector2::new(0.0, 100.0)).flipped();
        let s = t.to_screen(&Point2::new(3.0, 10.0));
        assert_relative_eq!(s.x, 6.0);
        assert_relative_eq!(s.y, 80.0);
    }

    #[test]
    fn closures_and_affine_maps_are_transforms() {
        let double = |p: Point2| Point2::new(p.x * 2.0, p.y * 2.0);
        assert_eq!(double.to_screen(&Point2::new(1.0, 3.0)), Point2::new(2.0, 6.0));

        let affine = Affine2::from_matrix_unchecked(Matrix3::new(
            3.0, 0.0, 1.0, //
            0.0, 3.0, 2.0, //
            0.0, 0.0, 1.0,
        ));
        let s = affine.to_screen(&Point2::new(1.0, 1.0));
        assert_relative_eq!(s.x, 4.0);
        assert_relative_eq!(s.y, 5.0);
    }
}
