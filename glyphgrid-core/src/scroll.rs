//! Time-varying scroll-window text
//!
//! The controller keeps one piece of mutable state per display session:
//! an index into a padded, self-repeating copy of the source text
//! (`text + two blank glyphs`, repeated), advanced once per tick modulo
//! the cycle length. Each tick renders the window of characters that
//! fits the canvas at a fixed anchor; the two-blank separator guarantees
//! a seamless wrap at the window boundary. There is no terminal state -
//! scrolling runs for as long as the display session is active.

use heapless::String;

use crate::canvas::Canvas;
use crate::layout::{self, Alignment};
use crate::text::TextRenderer;

/// Maximum scroll source text length in bytes
pub const MAX_SCROLL_TEXT: usize = 128;

/// Blank glyphs separating repetitions of the source text
const SEPARATOR_LEN: usize = 2;

/// Upper bound on the rendered window, in bytes
const MAX_WINDOW: usize = 64;

/// Scrolling text state: source text plus the scroll index
///
/// The index is always in `[0, cycle_len)` and resets to zero whenever
/// the source text changes or an external refresh occurs. A divider
/// greater than one paces scrolling slower than one step per tick.
#[derive(Debug, Clone)]
pub struct ScrollingText {
    text: String<MAX_SCROLL_TEXT>,
    char_count: usize,
    index: usize,
    divider: u8,
    phase: u8,
}

impl Default for ScrollingText {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollingText {
    /// Empty scroller advancing one step per tick
    pub fn new() -> Self {
        Self::with_divider(1)
    }

    /// Empty scroller advancing one step every `divider` ticks
    pub fn with_divider(divider: u8) -> Self {
        Self {
            text: String::new(),
            char_count: 0,
            index: 0,
            divider: divider.max(1),
            phase: 0,
        }
    }

    /// Replace the source text, resetting the scroll if it changed
    ///
    /// Text beyond the buffer capacity is truncated at a character
    /// boundary.
    pub fn set_text(&mut self, text: &str) {
        if self.text.as_str() == text {
            return;
        }
        self.text.clear();
        self.char_count = 0;
        for ch in text.chars() {
            if self.text.push(ch).is_err() {
                break;
            }
            self.char_count += 1;
        }
        self.reset();
    }

    /// Current source text
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Rewind to the start of the cycle (external manual refresh)
    pub fn reset(&mut self) {
        self.index = 0;
        self.phase = 0;
    }

    /// Current scroll index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Ticks per full revolution of the scroll window
    pub fn cycle_len(&self) -> usize {
        self.char_count + SEPARATOR_LEN
    }

    /// Advance one tick; the index moves once every `divider` ticks
    pub fn advance(&mut self) {
        self.phase += 1;
        if self.phase >= self.divider {
            self.phase = 0;
            self.index = (self.index + 1) % self.cycle_len();
        }
    }

    /// Character at a position of the repeating padded text
    fn padded_char(&self, pos: usize) -> char {
        let offset = pos % self.cycle_len();
        self.text.chars().nth(offset).unwrap_or(' ')
    }

    /// Render the visible window and nothing else; state is untouched
    ///
    /// The window holds `N / stride` characters starting at the scroll
    /// index, anchored where the full two-cycle padded text would be.
    /// Misses inside the window resolve with the renderer's scroll
    /// policy (blank substitution by default, keeping pitch constant).
    pub fn render<const N: usize>(
        &self,
        canvas: &mut Canvas<N>,
        renderer: &TextRenderer<'_>,
        alignment: Alignment,
        brightness: u16,
        rotate: bool,
    ) {
        let metrics = renderer.metrics();
        let displayable = N / metrics.stride() as usize;

        let mut window: String<MAX_WINDOW> = String::new();
        for i in 0..displayable {
            if window.push(self.padded_char(self.index + i)).is_err() {
                break;
            }
        }

        // Fixed anchor: the bounds of the full padded text (two cycles),
        // so the window does not drift as the index moves.
        let padded_count = 2 * self.cycle_len();
        let bounds = layout::text_bounds(padded_count, metrics, rotate, false);
        let (x, y) = layout::anchor(bounds, alignment, N as i32);

        let miss = renderer.config().scroll_miss;
        if rotate {
            renderer.draw_rotated_at_with(canvas, window.as_str(), x, y, brightness, miss);
        } else {
            renderer.draw_at_with(canvas, window.as_str(), x, y, brightness, miss);
        }
    }
}
