use crate::annotations::detection::Detection;
use log::debug;
use serde_json::Value;

/// Field under which the inference service reports detection records.
const DETECTIONS_KEY: &str = "predictions";
/// Field wrapping per-step results when the server runs a workflow.
const OUTPUTS_KEY: &str = "outputs";

type ShapeMatcher = fn(&Value) -> Option<&Vec<Value>>;

/// The known response shapes, tried in order. The shape varies with the
/// server-side workflow configuration, so the list ends with an exhaustive
/// search that survives added wrapper levels. First match wins; matches are
/// never merged across shapes.
const SHAPE_MATCHERS: [(&str, ShapeMatcher); 3] = [
    ("direct", match_direct),
    ("workflow-outputs", match_workflow_outputs),
    ("depth-first", match_depth_first),
];

/// Normalizes an inference response document into detections, in input
/// order.
///
/// A document with no recognizable detections field anywhere yields an empty
/// vector, never an error: at this layer "zero detections" and "shape we do
/// not know" are indistinguishable, and whether empty is worth surfacing is
/// the caller's call.
pub fn extract_detections(document: &Value) -> Vec<Detection> {
    for (shape, matcher) in SHAPE_MATCHERS {
        if let Some(records) = matcher(document) {
            debug!(
                "response matched the {} shape with {} record(s)",
                shape,
                records.len()
            );
            return records.iter().map(Detection::from_value).collect();
        }
    }
    debug!("response matched no known shape");
    Vec::new()
}

/// The most common shape: a top-level detections array.
fn match_direct(document: &Value) -> Option<&Vec<Value>> {
    document.get(DETECTIONS_KEY)?.as_array()
}

/// Workflow shape: a top-level array of output records. The first output
/// whose detections field is an array wins; an output may also wrap the
/// array one level deeper inside an object carrying the same field name.
fn match_workflow_outputs(document: &Value) -> Option<&Vec<Value>> {
    let outputs = document.get(OUTPUTS_KEY)?.as_array()?;
    outputs.iter().find_map(|output| {
        let holder = output.get(DETECTIONS_KEY)?;
        if let Some(records) = holder.as_array() {
            return Some(records);
        }
        holder.get(DETECTIONS_KEY)?.as_array()
    })
}

/// Last resort: depth-first search of the whole document for a detections
/// field holding an array. Arrays are searched element by element, objects
/// field by field in declaration order.
fn match_depth_first(document: &Value) -> Option<&Vec<Value>> {
    match document {
        Value::Array(items) => items.iter().find_map(match_depth_first),
        Value::Object(fields) => fields.iter().find_map(|(key, value)| {
            if key == DETECTIONS_KEY {
                if let Some(records) = value.as_array() {
                    return Some(records);
                }
            }
            match_depth_first(value)
        }),
        _ => None,
    }
}
