//! Pixel-canvas and bitmap-text rendering engine
//!
//! This crate turns abstract drawing commands (lines, rectangles,
//! characters, rotated text, scrolling text) into a fixed-size square
//! grid of brightness values, rendered once per tick for an external
//! display driver.
//!
//! - [`Canvas`]: the pixel buffer, with clipping pixel writes
//! - Rasterizer: line/rectangle primitives on the canvas
//! - [`GlyphCatalog`]: the bitmap font, validated at construction
//! - [`layout`]: text bounds and alignment/anchor arithmetic
//! - [`TextRenderer`]: horizontal and rotated string painting
//! - [`ScrollingText`]: time-varying scroll-window text
//!
//! # Architecture
//!
//! Data flows one way per tick: a collaborator supplies text, alignment,
//! and brightness; the renderers paint onto a caller-owned canvas; the
//! finished grid goes to the driver. The engine performs no I/O, never
//! panics in normal operation, and keeps all mutable animation state in
//! plain values owned by the caller - one set per active display.

#![no_std]
#![deny(unsafe_code)]

pub mod canvas;
pub mod config;
pub mod font;
pub mod layout;
pub mod raster;
pub mod scroll;
pub mod text;

// Re-export key types
pub use canvas::{Canvas, MatrixCanvas, GRID_SIZE, MAX_INTENSITY};
pub use config::{FontMetrics, MissPolicy, RenderConfig};
pub use font::{default_catalog, FontError, Glyph, GlyphCatalog};
pub use layout::{Align, Alignment, TextBounds};
pub use scroll::ScrollingText;
pub use text::TextRenderer;
