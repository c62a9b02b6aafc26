use crate::taxonomy::fruit_classes::{
    ClassEntry, FALLBACK_COLOR, FALLBACK_DISPLAY_NAME, FALLBACK_EMOJI, FRUIT_CLASSES,
};
use image::Rgb;

/// Display metadata for a class label. Always populated: unknown labels get
/// the fallback values instead of an error.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassInfo {
    pub emoji: &'static str,
    pub display_name: String,
    pub color: Rgb<u8>,
}

impl From<&ClassEntry> for ClassInfo {
    fn from(entry: &ClassEntry) -> ClassInfo {
        ClassInfo {
            emoji: entry.emoji,
            display_name: entry.display_name.to_string(),
            color: entry.color,
        }
    }
}

/// Maps a raw model class label to display metadata.
///
/// The label is normalized (lower-cased, separators stripped), then resolved
/// against the taxonomy: exact key match first, then the first entry in
/// table order whose key contains the input or is contained by it. Labels
/// that miss every tier keep their raw spelling as the display name; an
/// empty label gets a placeholder instead.
pub fn resolve(raw_class_label: &str) -> ClassInfo {
    let normalized = normalize_class_key(raw_class_label);
    if normalized.is_empty() {
        return fallback("");
    }
    if let Some(entry) = FRUIT_CLASSES.iter().find(|entry| entry.key == normalized) {
        return entry.into();
    }
    if let Some(entry) = FRUIT_CLASSES
        .iter()
        .find(|entry| normalized.contains(entry.key) || entry.key.contains(&normalized))
    {
        return entry.into();
    }
    fallback(raw_class_label)
}

/// Lower-cases a label and strips hyphens, underscores and whitespace, so
/// spelling variants land on the same key.
fn normalize_class_key(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
        .collect()
}

fn fallback(raw_class_label: &str) -> ClassInfo {
    ClassInfo {
        emoji: FALLBACK_EMOJI,
        display_name: if raw_class_label.is_empty() {
            FALLBACK_DISPLAY_NAME.to_string()
        } else {
            raw_class_label.to_string()
        },
        color: FALLBACK_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelling_variants_resolve_identically() {
        let with_separator = resolve("water_melon");
        let plain = resolve("watermelon");
        assert_eq!(with_separator, plain);
        assert_eq!(plain.display_name, "Pastèque");
        assert_eq!(plain.color, Rgb([0x16, 0xa3, 0x4a]));
    }

    #[test]
    fn normalization_handles_case_and_whitespace() {
        assert_eq!(resolve("Water Melon").display_name, "Pastèque");
        assert_eq!(resolve("GRAPES").display_name, "Raisins");
        assert_eq!(resolve("water-melon").display_name, "Pastèque");
    }

    #[test]
    fn partial_match_contains_a_known_key() {
        assert_eq!(resolve("applepie").display_name, "Pomme");
        assert_eq!(resolve("green_kiwi").display_name, "Kiwi");
    }

    #[test]
    fn partial_match_is_contained_in_a_known_key() {
        assert_eq!(resolve("cucumb").display_name, "Concombre");
    }

    #[test]
    fn partial_match_is_table_order_deterministic() {
        // "applepineapple" contains both "apple" and "pineapple"; "apple"
        // comes first in the table, so it wins. The test pins the order, not
        // a semantic preference.
        assert_eq!(resolve("applepineapple").display_name, "Pomme");
    }

    #[test]
    fn unknown_label_keeps_its_raw_spelling() {
        let info = resolve("dragonfruit");
        assert_eq!(info.display_name, "dragonfruit");
        assert_eq!(info.emoji, FALLBACK_EMOJI);
        assert_eq!(info.color, FALLBACK_COLOR);
    }

    #[test]
    fn empty_label_gets_the_placeholder() {
        let info = resolve("");
        assert_eq!(info.display_name, "Fruit inconnu");
        assert_eq!(info.color, FALLBACK_COLOR);

        // Separator-only labels normalize to empty and behave the same.
        assert_eq!(resolve("_-_").display_name, "Fruit inconnu");
    }

    #[test]
    fn exact_match_beats_partial_match() {
        // "pinapple" is its own row; it must not fall through to a substring
        // scan even though "pineapple" contains it.
        assert_eq!(resolve("pinapple").display_name, "Ananas");
    }
}
