use crate::annotations::bounding_box::BoundingBox;
use crate::annotations::point::Point;
use serde_json::Value;

/// A detection is what is produced as output from an object detection model.
///
/// A detection is an annotation combined with a confidence score: a
/// probability value that encodes the model's belief that the detection is
/// true. The class label is kept raw, exactly as the model returned it;
/// turning it into something presentable is the taxonomy resolver's job.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    pub class_label: String,
    pub confidence: f32,
    pub geometry: Geometry,
}

/// The drawable shape attached to a detection.
///
/// Segmentation workflows return a vertex list alongside the box fields. The
/// vertex list is the more precise shape, so a record carrying both becomes a
/// `Polygon`. Records with no usable shape at all are kept as `Missing`
/// rather than dropped, so detection counts stay honest; the renderer skips
/// them.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Polygon(Vec<Point>),
    Box(BoundingBox),
    Missing,
}

impl Detection {
    /// Builds a detection from one raw response record.
    ///
    /// Total over arbitrary JSON: malformed or partial records degrade field
    /// by field instead of failing the response. A missing or non-numeric
    /// confidence reads as 0, and negative confidences clamp to 0.
    pub fn from_value(record: &Value) -> Detection {
        let class_label = record
            .get("class")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let confidence = record
            .get("confidence")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
            .max(0.0) as f32;
        Detection {
            class_label,
            confidence,
            geometry: Geometry::from_value(record),
        }
    }
}

impl Geometry {
    fn from_value(record: &Value) -> Geometry {
        if let Some(points) = record.get("points") {
            if let Ok(points) = serde_json::from_value::<Vec<Point>>(points.clone()) {
                if !points.is_empty() {
                    return Geometry::Polygon(points);
                }
            }
        }
        match serde_json::from_value::<BoundingBox>(record.clone()) {
            Ok(bounding_box) => Geometry::Box(bounding_box),
            Err(_) => Geometry::Missing,
        }
    }
}
