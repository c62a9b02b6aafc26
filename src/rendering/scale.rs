use crate::annotations::point::Point;

/// Scale factors mapping original-image coordinates onto the overlay
/// surface.
///
/// Recomputed on every render call and never cached: the surface can resize
/// independently of the source image, so detection coordinates stay in image
/// space and are only scaled at draw time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleContext {
    pub scale_x: f32,
    pub scale_y: f32,
}

impl ScaleContext {
    /// A zero-sized source image produces zero scale factors, collapsing
    /// every shape instead of dividing by zero.
    pub fn new(image_width: u32, image_height: u32, surface_width: u32, surface_height: u32) -> Self {
        let scale_x = if image_width == 0 {
            0.0
        } else {
            surface_width as f32 / image_width as f32
        };
        let scale_y = if image_height == 0 {
            0.0
        } else {
            surface_height as f32 / image_height as f32
        };
        ScaleContext { scale_x, scale_y }
    }

    pub fn apply(&self, point: Point) -> Point {
        point.scaled(self.scale_x, self.scale_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_surface_doubles_coordinates() {
        let scale = ScaleContext::new(100, 100, 200, 200);
        assert_eq!(scale.scale_x, 2.0);
        assert_eq!(scale.scale_y, 2.0);
        assert_eq!(
            scale.apply(Point { x: 50.0, y: 40.0 }),
            Point { x: 100.0, y: 80.0 }
        );
    }

    #[test]
    fn axes_scale_independently() {
        let scale = ScaleContext::new(100, 200, 200, 100);
        assert_eq!(scale.scale_x, 2.0);
        assert_eq!(scale.scale_y, 0.5);
    }

    #[test]
    fn zero_sized_image_yields_zero_scale() {
        let scale = ScaleContext::new(0, 0, 200, 200);
        assert_eq!(scale.scale_x, 0.0);
        assert_eq!(scale.scale_y, 0.0);
    }
}
