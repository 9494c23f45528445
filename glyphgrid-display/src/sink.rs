//! Frame submission boundary
//!
//! The engine hands the driver one completed row-major grid per tick,
//! tagged with the plane it belongs to. How the driver layers multiple
//! planes into a physical frame (overwrite vs. priority blending) is
//! undocumented vendor behavior and deliberately not modeled here.

use glyphgrid_core::Canvas;

/// Named compositor plane understood by the layered frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Front plane
    Top,
    /// Middle plane
    #[default]
    Mid,
    /// Back plane
    Low,
}

/// Errors a frame sink implementation can surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// Driver link unavailable
    Disconnected,
    /// Driver refused or dropped the frame
    Rejected,
}

/// Opaque sink accepting one (grid, layer-tag) submission per call
///
/// Implementations wrap the vendor display driver; the engine treats
/// them as fire-and-forget within a tick.
pub trait FrameSink<const N: usize> {
    /// Submit a finished grid for the given plane
    fn submit(&mut self, grid: &Canvas<N>, layer: Layer) -> Result<(), SinkError>;
}
