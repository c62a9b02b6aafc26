use image::Rgb;

/// Outline and fill colors for drawn detections.
///
/// Colors are assigned by position in the detection list, cycling through
/// this palette, so adjacent detections stay visually distinct even when
/// they share a class. Re-rendering the same list reassigns the same
/// colors.
pub const SEGMENTATION_COLORS: [Rgb<u8>; 8] = [
    Rgb([0xef, 0x44, 0x44]),
    Rgb([0x3b, 0x82, 0xf6]),
    Rgb([0x10, 0xb9, 0x81]),
    Rgb([0xf5, 0x9e, 0x0b]),
    Rgb([0x8b, 0x5c, 0xf6]),
    Rgb([0x06, 0xb6, 0xd4]),
    Rgb([0xf9, 0x73, 0x16]),
    Rgb([0x84, 0xcc, 0x16]),
];

pub fn color_for_index(index: usize) -> Rgb<u8> {
    SEGMENTATION_COLORS[index % SEGMENTATION_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_indices_get_different_colors() {
        assert_ne!(color_for_index(0), color_for_index(1));
    }

    #[test]
    fn palette_wraps_around() {
        let len = SEGMENTATION_COLORS.len();
        assert_eq!(color_for_index(len), color_for_index(0));
        assert_eq!(color_for_index(len + 3), color_for_index(3));
    }
}
