use serde::{Deserialize, Serialize};

/// A struct representing a bounding box.
///
/// A bounding box is the rectangle an object detection model places around an
/// object it recognized. The inference service reports boxes in center
/// format: `x`/`y` name the box center, not a corner, and `width`/`height`
/// are the full extents. All values are in the coordinate space of the
/// original image that was submitted for inference.
///
/// This project uses the standard convention of the left side of the image
/// being x=0 and the top of the image being y=0.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct BoundingBox {
    #[serde(rename = "x")]
    pub center_x: f32,
    #[serde(rename = "y")]
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn left(&self) -> f32 {
        self.center_x - self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center_y - self.height / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center_x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center_y + self.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_derive_from_center_and_extents() {
        let bbox = BoundingBox {
            center_x: 50.0,
            center_y: 50.0,
            width: 20.0,
            height: 20.0,
        };
        assert_eq!(bbox.left(), 40.0);
        assert_eq!(bbox.top(), 40.0);
        assert_eq!(bbox.right(), 60.0);
        assert_eq!(bbox.bottom(), 60.0);
    }

    #[test]
    fn deserializes_from_wire_field_names() {
        let bbox: BoundingBox =
            serde_json::from_str(r#"{"x": 10.0, "y": 20.0, "width": 4.0, "height": 6.0}"#)
                .unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                center_x: 10.0,
                center_y: 20.0,
                width: 4.0,
                height: 6.0
            }
        );
    }
}
