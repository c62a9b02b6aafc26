use image::Rgb;

/// One taxonomy row: a known model class key and its display metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassEntry {
    pub key: &'static str,
    pub emoji: &'static str,
    pub display_name: &'static str,
    pub color: Rgb<u8>,
}

const fn entry(
    key: &'static str,
    emoji: &'static str,
    display_name: &'static str,
    color: [u8; 3],
) -> ClassEntry {
    ClassEntry {
        key,
        emoji,
        display_name,
        color: Rgb(color),
    }
}

/// The fruit taxonomy, in resolution order.
///
/// Partial matching takes the first hit in this order, so the order is part
/// of the contract, not an accident of declaration. The model emits a few
/// historical spellings (`pinapple`, `water_melon`) that are kept as their
/// own rows resolving to the same display values as the canonical ones.
pub const FRUIT_CLASSES: [ClassEntry; 14] = [
    entry("apple", "🍎", "Pomme", [0xef, 0x44, 0x44]),
    entry("banana", "🍌", "Banane", [0xea, 0xb3, 0x08]),
    entry("cherry", "🍒", "Cerise", [0xdc, 0x26, 0x26]),
    entry("cucumber", "🥒", "Concombre", [0x16, 0xa3, 0x4a]),
    entry("grapes", "🍇", "Raisins", [0x8b, 0x5c, 0xf6]),
    entry("kiwi", "🥝", "Kiwi", [0x84, 0xcc, 0x16]),
    entry("lemon", "🍋", "Citron", [0xfa, 0xcc, 0x15]),
    entry("mango", "🥭", "Mangue", [0xf9, 0x73, 0x16]),
    entry("orange", "🍊", "Orange", [0xea, 0x58, 0x0c]),
    entry("pinapple", "🍍", "Ananas", [0xea, 0xb3, 0x08]),
    entry("pineapple", "🍍", "Ananas", [0xea, 0xb3, 0x08]),
    entry("tomato", "🍅", "Tomate", [0xef, 0x44, 0x44]),
    entry("water_melon", "🍉", "Pastèque", [0x16, 0xa3, 0x4a]),
    entry("watermelon", "🍉", "Pastèque", [0x16, 0xa3, 0x4a]),
];

/// Display values for classes the taxonomy does not know.
pub const FALLBACK_EMOJI: &str = "🍎";
pub const FALLBACK_DISPLAY_NAME: &str = "Fruit inconnu";
pub const FALLBACK_COLOR: Rgb<u8> = Rgb([0x6b, 0x72, 0x80]);
