//! Driver and scheduler boundary abstractions for the glyphgrid engine
//!
//! This crate provides:
//! - `FrameSink` trait for the external display driver, accepting one
//!   finished grid plus a layer tag per submission
//! - `TickSource` trait for injected periodic scheduling with
//!   non-blocking poll and cancellation
//! - `DisplaySession` and `Marquee` for the per-tick
//!   clear-draw-submit composition
//!
//! # Architecture
//!
//! The engine never talks to hardware. A host platform implements
//! `FrameSink` over its vendor driver and `TickSource` over its
//! scheduler; sessions own the canvas and animation state and run one
//! synchronous, non-blocking render per tick. Stopping the tick source
//! stops rendering - there is no in-flight work to cancel inside the
//! engine. Multiple physical displays use independent sessions; nothing
//! here is a shared singleton.

#![no_std]
#![deny(unsafe_code)]

pub mod session;
pub mod sink;
pub mod ticker;

// Re-export key types
pub use session::{DisplaySession, Marquee};
pub use sink::{FrameSink, Layer, SinkError};
pub use ticker::{ManualTicker, TickSource, DEFAULT_TICK_MS};
