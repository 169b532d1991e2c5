//! Fixed categorical palette used for default and replacement colors.

use crate::render::Color;

pub const CATEGORICAL_PALETTE: [Color; 10] = [
    Color::from_rgb_hex(0x51_8d_b9),
    Color::from_rgb_hex(0xe5_8a_3c),
    Color::from_rgb_hex(0x6b_a3_4f),
    Color::from_rgb_hex(0xc9_4f_4f),
    Color::from_rgb_hex(0x8d_6c_b8),
    Color::from_rgb_hex(0x8c_6a_5c),
    Color::from_rgb_hex(0xd9_7f_c0),
    Color::from_rgb_hex(0x7f_7f_7f),
    Color::from_rgb_hex(0xb8_b8_3c),
    Color::from_rgb_hex(0x4f_b8_c4),
];

/// Palette color at `index`, wrapping around.
#[must_use]
pub fn color_at(index: usize) -> Color {
    CATEGORICAL_PALETTE[index % CATEGORICAL_PALETTE.len()]
}

/// First palette color not in `used`; the first palette color once all are taken.
#[must_use]
pub fn next_unused(used: &[Color]) -> Color {
    CATEGORICAL_PALETTE
        .iter()
        .copied()
        .find(|color| !used.contains(color))
        .unwrap_or(CATEGORICAL_PALETTE[0])
}
