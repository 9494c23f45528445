//! Horizontal and rotated text renderers
//!
//! A renderer borrows a validated catalog and carries the session's
//! [`RenderConfig`]. Static text resolves catalog misses with the
//! configured static policy (skip by default); the scrolling controller
//! reuses the same painting paths with the pitch-preserving policy.

use crate::canvas::Canvas;
use crate::config::{FontMetrics, MissPolicy, RenderConfig};
use crate::font::{Glyph, GlyphCatalog};
use crate::layout::{self, Alignment};

/// Paints strings onto a canvas using a glyph catalog
#[derive(Debug, Clone)]
pub struct TextRenderer<'a> {
    catalog: &'a GlyphCatalog,
    config: RenderConfig,
}

impl<'a> TextRenderer<'a> {
    /// Renderer over a catalog with the given configuration
    pub fn new(catalog: &'a GlyphCatalog, config: RenderConfig) -> Self {
        Self { catalog, config }
    }

    /// Font metrics in effect
    pub fn metrics(&self) -> FontMetrics {
        self.config.metrics
    }

    /// Session configuration in effect
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Copy a glyph's lit bits to the canvas; zero bits leave pixels alone
    fn blit<const N: usize>(&self, canvas: &mut Canvas<N>, glyph: &Glyph, x0: i32, y0: i32, brightness: u16) {
        for y in 0..glyph.height() {
            for x in 0..glyph.width() {
                if glyph.bit(x, y) {
                    canvas.set(x0 + x as i32, y0 + y as i32, brightness);
                }
            }
        }
    }

    pub(crate) fn draw_at_with<const N: usize>(
        &self,
        canvas: &mut Canvas<N>,
        text: &str,
        base_x: i32,
        base_y: i32,
        brightness: u16,
        miss: MissPolicy,
    ) {
        let stride = self.config.metrics.stride();
        let mut cell = 0i32;
        for ch in text.chars() {
            match self.catalog.lookup(ch) {
                Some(glyph) => {
                    self.blit(canvas, glyph, base_x + cell * stride, base_y, brightness);
                    cell += 1;
                }
                None => {
                    if miss == MissPolicy::Blank {
                        cell += 1;
                    }
                }
            }
        }
    }

    pub(crate) fn draw_rotated_at_with<const N: usize>(
        &self,
        canvas: &mut Canvas<N>,
        text: &str,
        base_x: i32,
        base_y: i32,
        brightness: u16,
        miss: MissPolicy,
    ) {
        // Stride stays in terms of the original glyph width; all glyphs
        // share one anchor column.
        let stride = self.config.metrics.stride();
        let mut cell = 0i32;
        for ch in text.chars().rev() {
            match self.catalog.lookup(ch) {
                Some(glyph) => {
                    let rotated = glyph.rotated();
                    self.blit(canvas, &rotated, base_x, base_y + cell * stride, brightness);
                    cell += 1;
                }
                None => {
                    if miss == MissPolicy::Blank {
                        cell += 1;
                    }
                }
            }
        }
    }

    /// Draw left-to-right from an explicit top-left anchor
    pub fn draw_at<const N: usize>(
        &self,
        canvas: &mut Canvas<N>,
        text: &str,
        base_x: i32,
        base_y: i32,
        brightness: u16,
    ) {
        self.draw_at_with(canvas, text, base_x, base_y, brightness, self.config.static_miss);
    }

    /// Draw aligned within the canvas
    pub fn draw<const N: usize>(
        &self,
        canvas: &mut Canvas<N>,
        text: &str,
        alignment: Alignment,
        brightness: u16,
    ) {
        let count = text.chars().count();
        // Anchoring always works from the borderless bound
        let bounds = layout::text_bounds(count, self.config.metrics, false, false);
        let (x, y) = layout::anchor(bounds, alignment, N as i32);
        self.draw_at(canvas, text, x, y, brightness);
    }

    /// Draw rotated a quarter turn from an explicit anchor
    ///
    /// Characters are reversed and each glyph rotated, stacked down the
    /// canvas; once the physical display is rotated 90 degrees the text
    /// reads in original left-to-right order.
    pub fn draw_rotated_at<const N: usize>(
        &self,
        canvas: &mut Canvas<N>,
        text: &str,
        base_x: i32,
        base_y: i32,
        brightness: u16,
    ) {
        self.draw_rotated_at_with(canvas, text, base_x, base_y, brightness, self.config.static_miss);
    }

    /// Draw rotated text aligned within the canvas
    pub fn draw_rotated<const N: usize>(
        &self,
        canvas: &mut Canvas<N>,
        text: &str,
        alignment: Alignment,
        brightness: u16,
    ) {
        let count = text.chars().count();
        let bounds = layout::text_bounds(count, self.config.metrics, true, false);
        let (x, y) = layout::anchor(bounds, alignment, N as i32);
        self.draw_rotated_at(canvas, text, x, y, brightness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::MatrixCanvas;
    use crate::font::default_catalog;
    use crate::layout::Align;

    fn renderer(catalog: &GlyphCatalog) -> TextRenderer<'_> {
        TextRenderer::new(catalog, RenderConfig::default())
    }

    /// Inclusive bounding box of lit pixels
    fn lit_extent(canvas: &MatrixCanvas) -> Option<(i32, i32, i32, i32)> {
        let mut extent: Option<(i32, i32, i32, i32)> = None;
        for y in 0..25 {
            for x in 0..25 {
                if canvas.get(x, y) != Some(0) {
                    let (x0, y0, x1, y1) = extent.unwrap_or((x, y, x, y));
                    extent = Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y)));
                }
            }
        }
        extent
    }

    #[test]
    fn test_centered_ok_end_to_end() {
        let catalog = default_catalog().unwrap();
        let mut canvas: MatrixCanvas = Canvas::new();
        renderer(&catalog).draw(
            &mut canvas,
            "OK",
            Alignment::new(Align::Center, Align::Center),
            500,
        );

        let expected = (catalog.lookup('O').unwrap().lit_count()
            + catalog.lookup('K').unwrap().lit_count()) as usize;
        assert_eq!(canvas.lit_count(), expected);
        assert!(canvas.pixels().all(|v| v == 0 || v == 500));

        // Anchored at (9, 10); 'O' has no lit corner pixel so the
        // leftmost lit column is 9, topmost lit row 10.
        let (x0, y0, x1, y1) = lit_extent(&canvas).unwrap();
        assert_eq!((x0, y0), (9, 10));
        assert_eq!((x1, y1), (9 + 6, 10 + 4));
    }

    #[test]
    fn test_static_miss_skips_without_reserving_column() {
        let catalog = default_catalog().unwrap();
        let render = renderer(&catalog);

        let mut with_miss: MatrixCanvas = Canvas::new();
        // '?' has no catalog entry
        render.draw_at(&mut with_miss, "A?B", 0, 0, 100);
        let mut without: MatrixCanvas = Canvas::new();
        render.draw_at(&mut without, "AB", 0, 0, 100);

        assert_eq!(with_miss, without);
    }

    #[test]
    fn test_blank_miss_preserves_pitch() {
        let catalog = default_catalog().unwrap();
        let config = RenderConfig {
            static_miss: MissPolicy::Blank,
            ..RenderConfig::default()
        };
        let render = TextRenderer::new(&catalog, config);

        let mut with_miss: MatrixCanvas = Canvas::new();
        render.draw_at(&mut with_miss, "A?B", 0, 0, 100);
        let mut spaced: MatrixCanvas = Canvas::new();
        render.draw_at(&mut spaced, "A B", 0, 0, 100);

        assert_eq!(with_miss, spaced);
    }

    #[test]
    fn test_rotated_swaps_block_dimensions() {
        let catalog = default_catalog().unwrap();
        let render = renderer(&catalog);

        let mut horizontal: MatrixCanvas = Canvas::new();
        render.draw_at(&mut horizontal, "HI", 2, 2, 100);
        let mut rotated: MatrixCanvas = Canvas::new();
        render.draw_rotated_at(&mut rotated, "HI", 2, 2, 100);

        let (hx0, hy0, hx1, hy1) = lit_extent(&horizontal).unwrap();
        let (rx0, ry0, rx1, ry1) = lit_extent(&rotated).unwrap();
        assert_eq!(hx1 - hx0, ry1 - ry0);
        assert_eq!(hy1 - hy0, rx1 - rx0);
    }

    #[test]
    fn test_rotated_reads_in_order_after_quarter_turn() {
        // Rotating 'T' then stacking should put the original top row of
        // the last character nearest the anchor column.
        let table: &[(char, &[&str])] = &[('T', &["111", "010", "010", "010", "010"])];
        let catalog = GlyphCatalog::from_table(table).unwrap();
        let render = renderer(&catalog);

        let mut canvas: MatrixCanvas = Canvas::new();
        render.draw_rotated_at(&mut canvas, "T", 0, 0, 100);
        // Rotated 'T': stem runs along x, bar down the anchor column
        for x in 0..5 {
            assert_eq!(canvas.get(x, 1), Some(100), "stem at x={x}");
        }
        for y in 0..3 {
            assert_eq!(canvas.get(0, y), Some(100), "bar at y={y}");
        }
        assert_eq!(canvas.lit_count(), 7);
    }

    #[test]
    fn test_text_clips_at_canvas_edge() {
        let catalog = default_catalog().unwrap();
        let mut canvas: MatrixCanvas = Canvas::new();
        renderer(&catalog).draw_at(&mut canvas, "WWWWWWWWWW", 0, 22, 100);
        // Ten glyphs need 40 columns; writes past column 24 are dropped
        let before = canvas.clone();
        renderer(&catalog).draw_at(&mut canvas, "W", 25, 22, 100);
        assert_eq!(canvas, before);
    }
}
