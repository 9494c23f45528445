//! Engine configuration types
//!
//! One configuration object selects the font metrics and per-context
//! glyph-miss fallbacks for a whole display session, instead of each
//! call site re-deciding them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Glyph cell metrics shared by layout and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontMetrics {
    /// Nominal glyph width in pixels (narrow glyphs may use less)
    pub glyph_width: u8,
    /// Glyph height in pixels
    pub glyph_height: u8,
    /// Inter-character spacing in pixels
    pub spacing: u8,
}

impl FontMetrics {
    /// Columns one character cell occupies: glyph width plus spacing
    pub const fn stride(&self) -> i32 {
        self.glyph_width as i32 + self.spacing as i32
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            glyph_width: 3,
            glyph_height: 5,
            spacing: 1,
        }
    }
}

/// Fallback when a character has no catalog entry
///
/// A miss is never an error; it resolves to one of these per-context
/// policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MissPolicy {
    /// Drop the character entirely; the pen does not advance
    #[default]
    Skip,
    /// Render nothing but advance the pen one stride, preserving pitch
    Blank,
}

/// Rendering configuration, fixed per session at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Font cell metrics
    pub metrics: FontMetrics,
    /// Miss fallback for static text
    pub static_miss: MissPolicy,
    /// Miss fallback for scrolling text, where constant pitch matters
    pub scroll_miss: MissPolicy,
    /// Advance the scroll window once every this many ticks (min 1)
    pub scroll_divider: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            metrics: FontMetrics::default(),
            static_miss: MissPolicy::Skip,
            scroll_miss: MissPolicy::Blank,
            scroll_divider: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stride() {
        assert_eq!(FontMetrics::default().stride(), 4);
    }

    #[test]
    fn test_default_miss_policies() {
        let config = RenderConfig::default();
        assert_eq!(config.static_miss, MissPolicy::Skip);
        assert_eq!(config.scroll_miss, MissPolicy::Blank);
        assert_eq!(config.scroll_divider, 1);
    }
}
