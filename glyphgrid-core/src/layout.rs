//! Text bounding boxes and anchor arithmetic
//!
//! Layout depends only on font metrics, never on pixel data. Bounds
//! cover `count` character cells plus a one-spacing border on each axis;
//! anchors place a bound inside the canvas per-axis from a 5-way
//! alignment rule plus padding. All arithmetic is integer-only and
//! truncates toward zero, including at the half-pixel center of an
//! odd-sized grid.

use crate::config::FontMetrics;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-axis anchoring rule
///
/// Lead is the left/top edge, Trail the right/bottom. The `OfCenter`
/// variants anchor the bound against the canvas midline: `LeadOfCenter`
/// starts at center and extends outward, `TrailOfCenter` ends at center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Align {
    /// Anchor at the leading edge (left/top)
    #[default]
    Lead,
    /// Bound starts at the canvas center, extending toward the trail
    LeadOfCenter,
    /// Centered on the canvas midline
    Center,
    /// Anchor at the trailing edge (right/bottom)
    Trail,
    /// Bound ends at the canvas center
    TrailOfCenter,
}

/// Horizontal and vertical alignment with shared padding
///
/// Padding always biases away from the referenced edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alignment {
    /// Rule along the x axis
    pub horizontal: Align,
    /// Rule along the y axis
    pub vertical: Align,
    /// Pixel offset away from the referenced edge
    pub padding: i32,
}

impl Alignment {
    /// Alignment with zero padding
    pub const fn new(horizontal: Align, vertical: Align) -> Self {
        Self {
            horizontal,
            vertical,
            padding: 0,
        }
    }

    /// Same alignment with the given padding
    pub const fn with_padding(self, padding: i32) -> Self {
        Self {
            horizontal: self.horizontal,
            vertical: self.vertical,
            padding,
        }
    }
}

/// Width and height of a laid-out text block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextBounds {
    /// Block width in pixels
    pub width: i32,
    /// Block height in pixels
    pub height: i32,
}

/// Bounding box of `count` character cells
///
/// With the border included, the block reserves one spacing unit of
/// leading/trailing gap per axis; `with_border = false` trims it.
/// `rotated` swaps the axes.
pub fn text_bounds(count: usize, metrics: FontMetrics, rotated: bool, with_border: bool) -> TextBounds {
    let spacing = metrics.spacing as i32;
    let mut width = count as i32 * metrics.stride();
    let mut height = metrics.glyph_height as i32 + 2 * spacing;
    if !with_border {
        width -= 2 * spacing;
        height -= 2 * spacing;
    }
    if rotated {
        TextBounds {
            width: height,
            height: width,
        }
    } else {
        TextBounds { width, height }
    }
}

/// Anchor coordinate of a bound along one axis
pub fn align_axis(align: Align, bound: i32, padding: i32, size: i32) -> i32 {
    match align {
        Align::Lead => padding,
        Align::Trail => size - bound - padding,
        // (size/2 - bound/2) truncated toward zero, in one division
        Align::Center => (size - bound) / 2,
        Align::LeadOfCenter => size / 2 + padding,
        Align::TrailOfCenter => (size - 2 * bound) / 2 - padding,
    }
}

/// Top-left anchor of a bound within a square canvas
pub fn anchor(bounds: TextBounds, alignment: Alignment, size: i32) -> (i32, i32) {
    (
        align_axis(alignment.horizontal, bounds.width, alignment.padding, size),
        align_axis(alignment.vertical, bounds.height, alignment.padding, size),
    )
}
