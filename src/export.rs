//! Palette export formats.

use std::fmt::Write;

use crate::models::SchemeResult;

/// CSS custom properties, one per swatch in generation order
pub fn export_css(scheme: &SchemeResult) -> String {
    let mut out = String::from(":root {\n");
    for (i, color) in scheme.colors.iter().enumerate() {
        let _ = writeln!(
            out,
            "  --color-{}: {}; /* {} */",
            i + 1,
            color.hex.value,
            color.name.value
        );
    }
    out.push_str("}\n");
    out
}

/// Plain-text listing used by `--print`
pub fn format_palette(scheme: &SchemeResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} scheme from {} ({} colors)",
        scheme.mode.label(),
        scheme.seed.hex.value,
        scheme.colors.len()
    );
    for (i, color) in scheme.colors.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<8} {:<24} {:<20} {}",
            i + 1,
            color.hex.value,
            color.name.value,
            color.rgb.value,
            color.hsl.value
        );
    }
    out
}
