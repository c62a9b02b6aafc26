use serde::{Deserialize, Serialize};
use std::fmt;

/// A struct representing a simple point.
///
/// Polygon vertices arrive in the coordinate space of the original image that
/// was submitted for inference, with the left side of the image being x=0 and
/// the top of the image being y=0.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn scaled(self, scale_x: f32, scale_y: f32) -> Point {
        Point {
            x: self.x * scale_x,
            y: self.y * scale_y,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point {{ x: {}, y: {} }}", self.x, self.y)
    }
}

/// Arithmetic mean of a sequence of vertices.
///
/// Used to anchor polygon labels. An empty slice yields the origin rather
/// than dividing by zero.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point { x: 0.0, y: 0.0 };
    }
    let count = points.len() as f32;
    Point {
        x: points.iter().map(|p| p.x).sum::<f32>() / count,
        y: points.iter().map(|p| p.y).sum::<f32>() / count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_of_triangle() {
        let points = vec![
            Point { x: 0.0, y: 0.0 },
            Point { x: 30.0, y: 0.0 },
            Point { x: 0.0, y: 30.0 },
        ];
        assert_eq!(centroid(&points), Point { x: 10.0, y: 10.0 });
    }

    #[test]
    fn centroid_of_single_point_is_the_point() {
        let points = vec![Point { x: 4.5, y: 7.0 }];
        assert_eq!(centroid(&points), Point { x: 4.5, y: 7.0 });
    }

    #[test]
    fn centroid_of_nothing_is_origin() {
        assert_eq!(centroid(&[]), Point { x: 0.0, y: 0.0 });
    }
}
