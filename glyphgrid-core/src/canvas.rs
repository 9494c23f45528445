//! Fixed-size square pixel buffer
//!
//! The canvas is exclusively owned by the caller for one tick and is
//! conventionally cleared and fully redrawn each time - no partial
//! updates, no double buffering. Every pixel write clips silently to
//! the grid; out-of-bounds coordinates are never an error.

/// Side length of the standard matrix grid
pub const GRID_SIZE: usize = 25;

/// Highest intensity the observed display driver accepts
///
/// The canvas itself does not clamp values; callers must supply
/// brightness levels the downstream driver understands.
pub const MAX_INTENSITY: u16 = 4095;

/// Square intensity buffer, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas<const N: usize = GRID_SIZE> {
    cells: [[u16; N]; N],
}

/// Canvas sized for the standard matrix
pub type MatrixCanvas = Canvas<GRID_SIZE>;

impl<const N: usize> Default for Canvas<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Canvas<N> {
    /// Create a cleared canvas
    pub fn new() -> Self {
        Self {
            cells: [[0; N]; N],
        }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        N
    }

    /// Reset every pixel to zero
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(0);
        }
    }

    /// Write one pixel; a no-op if either coordinate is outside [0, N)
    pub fn set(&mut self, x: i32, y: i32, value: u16) {
        if x >= 0 && (x as usize) < N && y >= 0 && (y as usize) < N {
            self.cells[y as usize][x as usize] = value;
        }
    }

    /// Read one pixel, or `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<u16> {
        if x >= 0 && (x as usize) < N && y >= 0 && (y as usize) < N {
            Some(self.cells[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u16; N]> {
        self.cells.iter()
    }

    /// Iterate all pixels in row-major order, as handed to the driver
    pub fn pixels(&self) -> impl Iterator<Item = u16> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Number of non-zero pixels
    pub fn lit_count(&self) -> usize {
        self.pixels().filter(|&v| v != 0).count()
    }
}
