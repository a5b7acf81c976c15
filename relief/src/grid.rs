use crate::{color::Rgba, ReliefError};

/// Row-major grid of raw 16-bit elevation samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevationGrid {
    width: usize,
    height: usize,
    samples: Box<[u16]>,
}

impl ElevationGrid {
    pub fn new(width: usize, height: usize, samples: Vec<u16>) -> Result<Self, ReliefError> {
        if width == 0 || height == 0 || width.checked_mul(height) != Some(samples.len()) {
            return Err(ReliefError::Dimensions {
                width,
                height,
                len: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples: samples.into_boxed_slice(),
        })
    }

    /// Returns a grid where every sample is `raw`.
    pub fn filled(width: usize, height: usize, raw: u16) -> Result<Self, ReliefError> {
        let len = width
            .checked_mul(height)
            .ok_or(ReliefError::Dimensions { width, height, len: 0 })?;
        Self::new(width, height, vec![raw; len])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Returns the raw sample at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn get(&self, x: usize, y: usize) -> u16 {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.samples[y * self.width + x]
    }
}

/// Row-major grid of rendered pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl RgbaGrid {
    pub(crate) fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Returns the pixel at column `x`, row `y`, if any.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Returns the tightly packed RGBA8 bytes of this grid.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.into_iter().flat_map(Rgba::to_array).collect()
    }
}
