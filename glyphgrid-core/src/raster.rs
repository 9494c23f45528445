//! Line and rectangle rasterization primitives
//!
//! Integer-only Bresenham in the canonical `dy = -|Δy|` form, valid for
//! any octant. Endpoints are normalized before walking so a line and
//! its reverse rasterize to the same pixel set even at midpoint ties.
//! All writes inherit canvas clipping.

use crate::canvas::Canvas;

impl<const N: usize> Canvas<N> {
    /// Draw a straight line between two points, inclusive of both
    ///
    /// A degenerate call with equal endpoints writes exactly one pixel.
    /// Spans are walked in `i64`, so endpoints anywhere in the `i32`
    /// range clip silently instead of overflowing.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, value: u16) {
        // Canonical endpoint order keeps midpoint tie-breaking identical
        // for a line and its reverse. Afterwards x0 <= x1.
        let ((x0, y0), (x1, y1)) = if (x0, y0) <= (x1, y1) {
            ((x0, y0), (x1, y1))
        } else {
            ((x1, y1), (x0, y0))
        };
        let n = N as i64;
        let (x0, y0) = (x0 as i64, y0 as i64);
        let (x1, y1) = (x1 as i64, y1 as i64);

        // A line whose bounding box misses the grid lights nothing.
        if x1 < 0 || x0 >= n || y0.max(y1) < 0 || y0.min(y1) >= n {
            return;
        }

        // Axis-aligned lines clamp exactly to the grid span.
        if y0 == y1 {
            for x in x0.max(0)..=x1.min(n - 1) {
                self.set(x as i32, y0 as i32, value);
            }
            return;
        }
        if x0 == x1 {
            for y in y0.max(0)..=y1.min(n - 1) {
                self.set(x0 as i32, y as i32, value);
            }
            return;
        }

        let dx = x1 - x0;
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set(x as i32, y as i32, value);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            // Both branches may fire in one iteration (diagonal step)
            if e2 >= dy {
                err += dy;
                x += 1;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill the half-open box [x0, x1) x [y0, y1); the far edge is excluded
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, value: u16) {
        let n = N as i32;
        for x in x0.max(0)..x1.min(n) {
            for y in y0.max(0)..y1.min(n) {
                self.set(x, y, value);
            }
        }
    }

    /// Draw a rectangle outline along the four edges
    ///
    /// Unlike [`fill_rect`](Canvas::fill_rect), the outline includes both
    /// corners at `(x1, y1)`.
    pub fn outline_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, value: u16) {
        self.draw_line(x0, y0, x1, y0, value);
        self.draw_line(x1, y0, x1, y1, value);
        self.draw_line(x1, y1, x0, y1, value);
        self.draw_line(x0, y1, x0, y0, value);
    }
}
