use crate::annotations::detection::Detection;
use crate::taxonomy::resolver::resolve;
use itertools::Itertools;
use std::fmt;

/// Orders detections by descending confidence.
///
/// The renderer draws in whatever order it is given; callers that want the
/// most confident detection first (for display and for the summary's "best"
/// slot) apply this before rendering.
pub fn sort_by_confidence(detections: Vec<Detection>) -> Vec<Detection> {
    detections
        .into_iter()
        .sorted_by(|a, b| b.confidence.total_cmp(&a.confidence))
        .collect()
}

/// Aggregate statistics over one analysis run.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisSummary {
    pub total_detections: usize,
    /// Highest-confidence detection, if any were found.
    pub best: Option<Detection>,
    /// Mean confidence across all detections; 0 when there are none.
    pub average_confidence: f32,
}

impl AnalysisSummary {
    pub fn from_detections(detections: &[Detection]) -> AnalysisSummary {
        let total_detections = detections.len();
        // First of equals wins, matching the confidence sort's stability.
        let best = detections
            .iter()
            .fold(None::<&Detection>, |best, candidate| match best {
                Some(current) if current.confidence >= candidate.confidence => Some(current),
                _ => Some(candidate),
            })
            .cloned();
        let average_confidence = if detections.is_empty() {
            0.0
        } else {
            detections.iter().map(|d| d.confidence).sum::<f32>() / detections.len() as f32
        };
        AnalysisSummary {
            total_detections,
            best,
            average_confidence,
        }
    }
}

impl fmt::Display for AnalysisSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Objets détectés: {}", self.total_detections)?;
        writeln!(
            f,
            "Confiance moyenne: {:.1}%",
            self.average_confidence * 100.0
        )?;
        if let Some(best) = &self.best {
            let info = resolve(&best.class_label);
            write!(
                f,
                "Meilleure détection: {} {} ({:.1}%)",
                info.emoji,
                info.display_name,
                best.confidence * 100.0
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::detection::Geometry;

    fn detection(class: &str, confidence: f32) -> Detection {
        Detection {
            class_label: class.to_string(),
            confidence,
            geometry: Geometry::Missing,
        }
    }

    #[test]
    fn sorts_by_descending_confidence() {
        let sorted = sort_by_confidence(vec![
            detection("a", 0.2),
            detection("b", 0.9),
            detection("c", 0.5),
        ]);
        let labels: Vec<_> = sorted.iter().map(|d| d.class_label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c", "a"]);
    }

    #[test]
    fn sort_is_stable_for_equal_confidences() {
        let sorted = sort_by_confidence(vec![
            detection("first", 0.5),
            detection("second", 0.5),
        ]);
        assert_eq!(sorted[0].class_label, "first");
        assert_eq!(sorted[1].class_label, "second");
    }

    #[test]
    fn summarizes_totals_best_and_average() {
        let detections = vec![
            detection("apple", 0.8),
            detection("banana", 0.6),
            detection("apple", 0.4),
        ];
        let summary = AnalysisSummary::from_detections(&detections);
        assert_eq!(summary.total_detections, 3);
        assert_eq!(summary.best.as_ref().unwrap().confidence, 0.8);
        assert!((summary.average_confidence - 0.6).abs() < 1.0e-6);
    }

    #[test]
    fn empty_run_has_no_best_and_zero_average() {
        let summary = AnalysisSummary::from_detections(&[]);
        assert_eq!(summary.total_detections, 0);
        assert_eq!(summary.best, None);
        assert_eq!(summary.average_confidence, 0.0);
    }

    #[test]
    fn report_includes_taxonomy_display_values() {
        let summary = AnalysisSummary::from_detections(&[detection("watermelon", 0.925)]);
        let report = summary.to_string();
        assert!(report.contains("Pastèque"));
        assert!(report.contains("92.5%"));
    }
}
