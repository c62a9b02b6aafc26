use ab_glyph::{FontArc, PxScale};
use imageproc::drawing::text_size;

/// Width, in multiples of the font scale, assumed per character when no font
/// is available to measure with.
const FALLBACK_CHAR_WIDTH: f32 = 0.6;

/// Drawing parameters for the annotation renderer.
///
/// The defaults reproduce the house style: 3px outlines, faint fills, and a
/// rounded label chip. A font is optional; without one the label chip is
/// still drawn, sized from a per-character estimate, and only the glyphs are
/// skipped. The renderer never fails for lack of a font file.
#[derive(Clone, Debug)]
pub struct RenderStyle {
    pub stroke_width: f32,
    pub polygon_fill_alpha: u8,
    pub box_fill_alpha: u8,
    pub font: Option<FontArc>,
    pub font_scale: f32,
    pub chip_height: u32,
    pub chip_padding: u32,
    pub chip_corner_radius: i32,
    /// Vertical gap between a box's top edge and its label anchor.
    pub box_label_offset: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            stroke_width: 3.0,
            polygon_fill_alpha: 0x30,
            box_fill_alpha: 0x20,
            font: None,
            font_scale: 14.0,
            chip_height: 24,
            chip_padding: 8,
            chip_corner_radius: 6,
            box_label_offset: 10.0,
        }
    }
}

impl RenderStyle {
    pub fn with_font(font: FontArc) -> Self {
        RenderStyle {
            font: Some(font),
            ..RenderStyle::default()
        }
    }

    /// Pixel width of a label text at the configured scale.
    pub fn measure_text(&self, text: &str) -> u32 {
        match &self.font {
            Some(font) => text_size(PxScale::from(self.font_scale), font, text).0,
            None => (text.chars().count() as f32 * self.font_scale * FALLBACK_CHAR_WIDTH) as u32,
        }
    }
}

/// Label text: resolved display name plus the confidence as a percentage
/// with one decimal. A missing confidence reads "0.0%".
pub fn label_text(display_name: &str, confidence: f32) -> String {
    format!("{} {:.1}%", display_name, confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_text_formats_one_decimal() {
        assert_eq!(label_text("Pomme", 0.8764), "Pomme 87.6%");
        assert_eq!(label_text("Banane", 1.0), "Banane 100.0%");
    }

    #[test]
    fn zero_confidence_still_labels() {
        assert_eq!(label_text("Kiwi", 0.0), "Kiwi 0.0%");
    }

    #[test]
    fn fontless_measurement_grows_with_text() {
        let style = RenderStyle::default();
        assert!(style.measure_text("Pastèque 99.9%") > style.measure_text("Kiwi 0.0%"));
        assert_eq!(style.measure_text(""), 0);
    }
}
