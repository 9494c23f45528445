//! Bitmap font: glyph representation and catalog
//!
//! Glyphs are fixed-height bitmaps with a per-character width (commonly
//! 3, sometimes 1 for narrow punctuation). The catalog maps characters
//! to glyphs and is validated when built: a glyph whose rows disagree on
//! width is a configuration error caught at construction, never a
//! per-draw failure. Lookup misses are expected and resolved by the
//! caller's [`MissPolicy`](crate::config::MissPolicy).

pub mod table;

use heapless::Vec;

/// Maximum rows or columns a glyph may occupy in either orientation
pub const MAX_GLYPH_DIM: usize = 8;

/// Maximum number of catalog entries
pub const MAX_GLYPHS: usize = 96;

/// Errors raised while building a glyph catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// A glyph's rows do not share one width, or the bitmap is empty
    MalformedGlyph { ch: char },
    /// A bitmap row contains something other than '0' or '1'
    InvalidBit { ch: char },
    /// Glyph exceeds [`MAX_GLYPH_DIM`] in either dimension
    TooLarge { ch: char },
    /// Glyph height differs from the rest of the catalog
    HeightMismatch { ch: char },
    /// The same character appears twice in the source table
    Duplicate { ch: char },
    /// More entries than the catalog can hold
    TableFull,
}

/// Immutable bitmap of one character
///
/// Row 0 is the top row. Bits are stored one row per byte, leftmost
/// column in the most significant used bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    width: u8,
    height: u8,
    rows: [u8; MAX_GLYPH_DIM],
}

impl Glyph {
    /// Parse and validate a glyph from '0'/'1' bitmap rows
    fn from_rows(ch: char, bitmap: &[&str]) -> Result<Self, FontError> {
        if bitmap.is_empty() {
            return Err(FontError::MalformedGlyph { ch });
        }
        if bitmap.len() > MAX_GLYPH_DIM {
            return Err(FontError::TooLarge { ch });
        }

        let width = bitmap[0].len();
        if width == 0 {
            return Err(FontError::MalformedGlyph { ch });
        }
        if width > MAX_GLYPH_DIM {
            return Err(FontError::TooLarge { ch });
        }

        let mut rows = [0u8; MAX_GLYPH_DIM];
        for (y, row) in bitmap.iter().enumerate() {
            if row.len() != width {
                return Err(FontError::MalformedGlyph { ch });
            }
            let mut bits = 0u8;
            for byte in row.bytes() {
                let bit = match byte {
                    b'0' => 0,
                    b'1' => 1,
                    _ => return Err(FontError::InvalidBit { ch }),
                };
                bits = (bits << 1) | bit;
            }
            rows[y] = bits;
        }

        Ok(Self {
            width: width as u8,
            height: bitmap.len() as u8,
            rows,
        })
    }

    /// Glyph width in pixels
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// Glyph height in pixels
    pub const fn height(&self) -> usize {
        self.height as usize
    }

    /// Whether the pixel at (x, y) is lit; false outside the bitmap
    pub fn bit(&self, x: usize, y: usize) -> bool {
        if x >= self.width() || y >= self.height() {
            return false;
        }
        (self.rows[y] >> (self.width() - 1 - x)) & 1 == 1
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// Rotate 90 degrees: transpose rows/columns and reverse the result
    ///
    /// The rotated glyph's width equals the original height and vice
    /// versa. Stacked bottom-up, rotated glyphs read left-to-right once
    /// the physical canvas is turned a quarter turn.
    pub fn rotated(&self) -> Glyph {
        let mut rows = [0u8; MAX_GLYPH_DIM];
        for (r, row) in rows.iter_mut().take(self.width()).enumerate() {
            let src_col = self.width() - 1 - r;
            let mut bits = 0u8;
            for y in 0..self.height() {
                bits = (bits << 1) | self.bit(src_col, y) as u8;
            }
            *row = bits;
        }
        Glyph {
            width: self.height,
            height: self.width,
            rows,
        }
    }
}

/// Character-to-glyph mapping, fixed at construction
///
/// Lookup is case-sensitive. In the default table the lower-case block
/// is repurposed as iconography (baseball base/out markers), so callers
/// must not assume a visual correspondence to the literal character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphCatalog {
    entries: Vec<(char, Glyph), MAX_GLYPHS>,
    height: u8,
}

impl GlyphCatalog {
    /// Build and validate a catalog from '0'/'1' bitmap rows
    ///
    /// Fails fast on the first malformed entry; a bad table never
    /// produces a partially usable catalog.
    pub fn from_table(table: &[(char, &[&str])]) -> Result<Self, FontError> {
        let mut entries: Vec<(char, Glyph), MAX_GLYPHS> = Vec::new();
        let mut height = 0u8;

        for &(ch, bitmap) in table {
            let glyph = Glyph::from_rows(ch, bitmap)?;
            if height == 0 {
                height = glyph.height;
            } else if glyph.height != height {
                return Err(FontError::HeightMismatch { ch });
            }
            if entries.iter().any(|&(existing, _)| existing == ch) {
                return Err(FontError::Duplicate { ch });
            }
            entries.push((ch, glyph)).map_err(|_| FontError::TableFull)?;
        }

        Ok(Self { entries, height })
    }

    /// Look up the glyph for a character
    pub fn lookup(&self, ch: char) -> Option<&Glyph> {
        self.entries
            .iter()
            .find(|&&(entry, _)| entry == ch)
            .map(|(_, glyph)| glyph)
    }

    /// Shared glyph height, zero for an empty catalog
    pub const fn glyph_height(&self) -> usize {
        self.height as usize
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no glyphs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the default 3x5 catalog
pub fn default_catalog() -> Result<GlyphCatalog, FontError> {
    GlyphCatalog::from_table(table::DEFAULT_TABLE)
}
