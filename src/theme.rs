//! Theme module for chroma-tui
//!
//! Colors for the application chrome. Swatches use the colors the service
//! returns, so everything here stays neutral to keep the palette readable.

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color - panels (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors - Indigo Primary
// ============================================================================

/// Primary indigo accent (#6366f1)
pub const ACCENT_PRIMARY: Color = Color::Rgb(99, 102, 241);

/// Light indigo for highlights (#a5b4fc)
pub const ACCENT_LIGHT: Color = Color::Rgb(165, 180, 252);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Amber warning color (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Borders
// ============================================================================

pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Selected swatch outline
pub const THICK_BORDERS: border::Set = border::THICK;
