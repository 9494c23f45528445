//! Per-tick display composition
//!
//! A session owns the canvas for one physical display and runs the
//! clear-draw-submit cycle: the grid is fully redrawn every tick, never
//! patched. [`Marquee`] layers the scrolling-text controller on top:
//! redraw the visible window, submit the frame, advance the scroll, and
//! rewind on text change or an external refresh.

use glyphgrid_core::{Alignment, Canvas, ScrollingText, TextRenderer};

use crate::sink::{FrameSink, Layer, SinkError};
use crate::ticker::TickSource;

/// Canvas ownership and frame submission for one display
#[derive(Debug, Clone)]
pub struct DisplaySession<const N: usize> {
    canvas: Canvas<N>,
    layer: Layer,
}

impl<const N: usize> DisplaySession<N> {
    /// Session submitting to the given compositor plane
    pub fn new(layer: Layer) -> Self {
        Self {
            canvas: Canvas::new(),
            layer,
        }
    }

    /// The most recently rendered grid
    pub fn canvas(&self) -> &Canvas<N> {
        &self.canvas
    }

    /// Plane this session submits to
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Run one frame: clear, draw, submit
    pub fn render_frame<S: FrameSink<N>>(
        &mut self,
        sink: &mut S,
        draw: impl FnOnce(&mut Canvas<N>),
    ) -> Result<(), SinkError> {
        self.canvas.clear();
        draw(&mut self.canvas);
        sink.submit(&self.canvas, self.layer)
    }

    /// Render one frame if a tick is pending
    ///
    /// Returns whether a frame was produced. Call from the host loop at
    /// whatever rate is convenient; frames track ticks, not calls.
    pub fn service<S: FrameSink<N>>(
        &mut self,
        ticks: &mut impl TickSource,
        sink: &mut S,
        draw: impl FnOnce(&mut Canvas<N>),
    ) -> Result<bool, SinkError> {
        if !ticks.poll_tick() {
            return Ok(false);
        }
        self.render_frame(sink, draw)?;
        Ok(true)
    }
}

/// Scrolling-text session
///
/// Owns the scroll state alongside the session, so one tick call both
/// redraws the current window and advances the cycle.
#[derive(Debug, Clone)]
pub struct Marquee<'a, const N: usize> {
    session: DisplaySession<N>,
    renderer: TextRenderer<'a>,
    scroll: ScrollingText,
    alignment: Alignment,
    brightness: u16,
    rotate: bool,
}

impl<'a, const N: usize> Marquee<'a, N> {
    /// Marquee on the given plane; scroll pacing comes from the
    /// renderer's configuration
    pub fn new(
        renderer: TextRenderer<'a>,
        layer: Layer,
        alignment: Alignment,
        brightness: u16,
    ) -> Self {
        let divider = renderer.config().scroll_divider;
        Self {
            session: DisplaySession::new(layer),
            renderer,
            scroll: ScrollingText::with_divider(divider),
            alignment,
            brightness,
            rotate: false,
        }
    }

    /// Lay the window along the perpendicular axis
    pub fn rotated(mut self) -> Self {
        self.rotate = true;
        self
    }

    /// Replace the scrolled text; the cycle rewinds only if it changed
    pub fn set_text(&mut self, text: &str) {
        self.scroll.set_text(text);
    }

    /// Current source text
    pub fn text(&self) -> &str {
        self.scroll.text()
    }

    /// Rewind the cycle (touch or always-on-display refresh)
    pub fn refresh(&mut self) {
        self.scroll.reset();
    }

    /// The most recently rendered grid
    pub fn canvas(&self) -> &Canvas<N> {
        self.session.canvas()
    }

    /// Render the current window, submit it, and advance the scroll
    pub fn tick<S: FrameSink<N>>(&mut self, sink: &mut S) -> Result<(), SinkError> {
        let Self {
            session,
            renderer,
            scroll,
            alignment,
            brightness,
            rotate,
        } = self;
        session.render_frame(sink, |canvas| {
            scroll.render(canvas, renderer, *alignment, *brightness, *rotate)
        })?;
        scroll.advance();
        Ok(())
    }

    /// Drive the marquee from a tick source, one frame per pending tick
    pub fn service<S: FrameSink<N>>(
        &mut self,
        ticks: &mut impl TickSource,
        sink: &mut S,
    ) -> Result<bool, SinkError> {
        if !ticks.poll_tick() {
            return Ok(false);
        }
        self.tick(sink)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::ManualTicker;
    use glyphgrid_core::{default_catalog, Align, GlyphCatalog, MatrixCanvas, RenderConfig};

    /// Records every submitted frame
    struct CaptureSink {
        frames: usize,
        last: Option<(MatrixCanvas, Layer)>,
    }

    impl CaptureSink {
        fn new() -> Self {
            Self {
                frames: 0,
                last: None,
            }
        }
    }

    impl FrameSink<25> for CaptureSink {
        fn submit(&mut self, grid: &Canvas<25>, layer: Layer) -> Result<(), SinkError> {
            self.frames += 1;
            self.last = Some((grid.clone(), layer));
            Ok(())
        }
    }

    fn catalog() -> GlyphCatalog {
        default_catalog().unwrap()
    }

    #[test]
    fn test_one_frame_per_tick() {
        let mut session: DisplaySession<25> = DisplaySession::new(Layer::Mid);
        let mut ticker = ManualTicker::new();
        let mut sink = CaptureSink::new();

        ticker.fire_n(3);
        for _ in 0..5 {
            session
                .service(&mut ticker, &mut sink, |canvas| canvas.set(0, 0, 1))
                .unwrap();
        }
        assert_eq!(sink.frames, 3);
    }

    #[test]
    fn test_frame_is_cleared_between_ticks() {
        let mut session: DisplaySession<25> = DisplaySession::new(Layer::Top);
        let mut sink = CaptureSink::new();

        session
            .render_frame(&mut sink, |canvas| canvas.fill_rect(0, 0, 5, 5, 900))
            .unwrap();
        assert_eq!(session.canvas().lit_count(), 25);

        // Next tick draws nothing; stale pixels must not survive
        session.render_frame(&mut sink, |_| {}).unwrap();
        assert_eq!(session.canvas().lit_count(), 0);
        let (grid, layer) = sink.last.unwrap();
        assert_eq!(grid.lit_count(), 0);
        assert_eq!(layer, Layer::Top);
    }

    #[test]
    fn test_marquee_repeats_after_full_cycle() {
        let catalog = catalog();
        let renderer = TextRenderer::new(&catalog, RenderConfig::default());
        let mut marquee: Marquee<'_, 25> = Marquee::new(
            renderer,
            Layer::Mid,
            Alignment::new(Align::Lead, Align::Center),
            1024,
        );
        marquee.set_text("NO GAME");
        let cycle = "NO GAME".chars().count() + 2;

        let mut sink = CaptureSink::new();
        marquee.tick(&mut sink).unwrap();
        let first = sink.last.clone().unwrap().0;

        for _ in 0..cycle {
            marquee.tick(&mut sink).unwrap();
        }
        assert_eq!(sink.frames, cycle + 1);
        assert_eq!(sink.last.unwrap().0, first);
    }

    #[test]
    fn test_marquee_resets_on_text_change() {
        let catalog = catalog();
        let renderer = TextRenderer::new(&catalog, RenderConfig::default());
        let mut marquee: Marquee<'_, 25> = Marquee::new(
            renderer,
            Layer::Mid,
            Alignment::new(Align::Lead, Align::Center),
            1024,
        );
        let mut sink = CaptureSink::new();

        marquee.set_text("FIRST TITLE");
        marquee.tick(&mut sink).unwrap();
        let opening = sink.last.clone().unwrap().0;
        marquee.tick(&mut sink).unwrap();

        // New metadata restarts from the head of the text
        marquee.set_text("SECOND");
        marquee.set_text("FIRST TITLE");
        marquee.tick(&mut sink).unwrap();
        assert_eq!(sink.last.unwrap().0, opening);
    }

    #[test]
    fn test_marquee_refresh_rewinds() {
        let catalog = catalog();
        let renderer = TextRenderer::new(&catalog, RenderConfig::default());
        let mut marquee: Marquee<'_, 25> = Marquee::new(
            renderer,
            Layer::Low,
            Alignment::new(Align::Lead, Align::Center),
            512,
        );
        let mut sink = CaptureSink::new();

        marquee.set_text("RESTING");
        marquee.tick(&mut sink).unwrap();
        let opening = sink.last.clone().unwrap().0;
        marquee.tick(&mut sink).unwrap();
        marquee.tick(&mut sink).unwrap();

        marquee.refresh();
        marquee.tick(&mut sink).unwrap();
        let (grid, layer) = sink.last.unwrap();
        assert_eq!(grid, opening);
        assert_eq!(layer, Layer::Low);
    }

    #[test]
    fn test_marquee_service_tracks_ticks() {
        let catalog = catalog();
        let renderer = TextRenderer::new(&catalog, RenderConfig::default());
        let mut marquee: Marquee<'_, 25> = Marquee::new(
            renderer,
            Layer::Mid,
            Alignment::new(Align::Lead, Align::Center),
            1024,
        );
        marquee.set_text("HELLO");

        let mut ticker = ManualTicker::new();
        let mut sink = CaptureSink::new();
        assert!(!marquee.service(&mut ticker, &mut sink).unwrap());

        ticker.fire();
        assert!(marquee.service(&mut ticker, &mut sink).unwrap());
        assert_eq!(sink.frames, 1);

        ticker.cancel();
        assert!(!marquee.service(&mut ticker, &mut sink).unwrap());
        assert_eq!(sink.frames, 1);
    }
}
