//! Utility functions for common operations.

/// Braille spinner frames for the loading indicator
const SPINNER_FRAMES: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

/// Parse `RRGGBB` or `#RRGGBB` into components
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

pub fn spinner_frame(tick: u64) -> char {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Truncate to `max_chars` characters, ending with "..." when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    // Safely truncate using character boundaries
    let truncated: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_rgb_with_and_without_hash() {
        assert_eq!(parse_hex_rgb("#FF8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex_rgb("0a0b0c"), Some((10, 11, 12)));
    }

    #[test]
    fn test_parse_hex_rgb_rejects_bad_input() {
        assert_eq!(parse_hex_rgb("#FFF"), None);
        assert_eq!(parse_hex_rgb("#ZZZZZZ"), None);
        assert_eq!(parse_hex_rgb(""), None);
    }

    #[test]
    fn test_spinner_frame_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(8));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Cornflower", 20), "Cornflower");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("Cornflower Blue", 10), "Cornflo...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate("Cornflower", 2), "Co");
    }
}
