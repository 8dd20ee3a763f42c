//! Responsive layout: derives display parameters from the viewport width.
//!
//! The resolver is a pure function over a pixel width. The event loop feeds
//! it the terminal's reported pixel size (or an estimate from the column
//! count) once at startup and on every resize, replacing the whole config.

/// Below this viewport width (pixels) the compact preset applies.
pub(crate) const COMPACT_BREAKPOINT_PX: u32 = 768;

/// Nominal cell width used to estimate pixels when the terminal does not
/// report its window size.
const FALLBACK_CELL_PX: u32 = 8;

/// Style parameters for one viewport class. Regenerated wholesale on each
/// resize; fields are never patched individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LayoutConfig {
    pub compact: bool,
    /// Horizontal padding around the content column, in cells.
    pub h_padding: u16,
    /// Maximum content width in cells; 0 means use the full terminal width.
    pub max_width: u16,
    /// Visible input rows (excluding borders).
    pub input_lines: u16,
    /// Input width as a percentage of the content width.
    pub input_width_pct: u16,
    /// Maximum bubble width as a percentage of the content width.
    pub bubble_width_pct: u16,
    /// Gutter reserved for the bot avatar, in cells.
    pub avatar_width: u16,
}

impl LayoutConfig {
    const COMPACT: Self = Self {
        compact: true,
        h_padding: 1,
        max_width: 0,
        input_lines: 2,
        input_width_pct: 90,
        bubble_width_pct: 75,
        avatar_width: 2,
    };

    const WIDE: Self = Self {
        compact: false,
        h_padding: 2,
        max_width: 120,
        input_lines: 3,
        input_width_pct: 80,
        bubble_width_pct: 75,
        avatar_width: 3,
    };

    /// Resolve the config for a viewport width in pixels. The breakpoint is
    /// strict: exactly 768 is wide.
    pub(crate) fn resolve(viewport_px: u32) -> Self {
        if viewport_px < COMPACT_BREAKPOINT_PX {
            Self::COMPACT
        } else {
            Self::WIDE
        }
    }
}

/// Current viewport width in pixels. Terminals that support it report their
/// window size directly; otherwise estimate from the column count.
pub(crate) fn viewport_width_px(columns: u16) -> u32 {
    match crossterm::terminal::window_size() {
        Ok(size) if size.width > 0 => size.width as u32,
        _ => columns as u32 * FALLBACK_CELL_PX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_is_compact() {
        assert!(LayoutConfig::resolve(500).compact);
    }

    #[test]
    fn wide_viewport_is_not_compact() {
        assert!(!LayoutConfig::resolve(1024).compact);
    }

    #[test]
    fn breakpoint_is_strict_less_than() {
        assert!(!LayoutConfig::resolve(COMPACT_BREAKPOINT_PX).compact);
        assert!(LayoutConfig::resolve(COMPACT_BREAKPOINT_PX - 1).compact);
    }

    #[test]
    fn resolve_returns_whole_presets() {
        assert_eq!(LayoutConfig::resolve(0), LayoutConfig::resolve(767));
        assert_eq!(LayoutConfig::resolve(768), LayoutConfig::resolve(5000));
        assert_ne!(LayoutConfig::resolve(500), LayoutConfig::resolve(1024));
    }
}
