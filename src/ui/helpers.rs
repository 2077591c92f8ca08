//! UI helper functions

use ratatui::style::Color;

use crate::models::{ColorEntry, SeedColor};
use crate::theme::TEXT_PRIMARY;
use crate::utils::parse_hex_rgb;

/// Background and readable foreground for a swatch
///
/// The foreground comes from the service's `contrast` field; if that is not
/// a parseable hex value, fall back to a luminance check.
pub fn swatch_colors(color: &ColorEntry) -> (Color, Color) {
    let (r, g, b) = color.rgb_tuple();
    let fg = match parse_hex_rgb(&color.contrast.value) {
        Some((cr, cg, cb)) => Color::Rgb(cr, cg, cb),
        None => readable_on(r, g, b),
    };
    (Color::Rgb(r, g, b), fg)
}

pub fn seed_color(seed: &SeedColor) -> Color {
    let (r, g, b) = seed.rgb();
    Color::Rgb(r, g, b)
}

/// Black or white, whichever reads better on the given background
pub fn readable_on(r: u8, g: u8, b: u8) -> Color {
    // ITU-R BT.601 luma, scaled by 1000
    let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    if luma > 128_000 { Color::Black } else { TEXT_PRIMARY }
}

/// Rows of padding to vertically center `content` lines in `height`
pub fn top_padding(height: u16, content: usize) -> usize {
    (height as usize).saturating_sub(content) / 2
}
