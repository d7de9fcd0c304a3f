use crate::error::GridError;

/// Reference fixture width and height.
pub const DEFAULT_SIZE: usize = 16;

/// Dimensions of a grid: width x height pixels, `channels` bytes per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct GridShape {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl GridShape {
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Total number of bytes in a grid of this shape, saturating at
    /// `usize::MAX`.
    pub fn len(&self) -> usize {
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.channels))
            .unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.channels == 0
    }

    /// Bytes per row, saturating at `usize::MAX`.
    pub fn row_len(&self) -> usize {
        self.width.saturating_mul(self.channels)
    }

    /// Parse a shape from a TOML table. Missing keys keep their defaults.
    ///
    /// ```toml
    /// width = 32
    /// height = 32
    /// channels = 3
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<GridShape, crate::error::ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE, 1)
    }
}

/// Row-major byte grid with interleaved channels.
///
/// The byte for channel `c` of the pixel at column `x`, row `y` lives at
/// `(y * width + x) * channels + c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    shape: GridShape,
    buf: Vec<u8>,
}

impl Grid {
    /// Allocate a zero-filled grid.
    pub fn zeros(shape: GridShape) -> Self {
        Self {
            shape,
            buf: vec![0u8; shape.len()],
        }
    }

    /// Wrap existing bytes. `buf` must hold exactly `shape.len()` bytes.
    pub fn from_raw(shape: GridShape, buf: Vec<u8>) -> Result<Self, GridError> {
        if buf.len() != shape.len() {
            return Err(GridError::LengthMismatch {
                width: shape.width,
                height: shape.height,
                channels: shape.channels,
                expected: shape.len(),
                actual: buf.len(),
            });
        }
        Ok(Self { shape, buf })
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn width(&self) -> usize {
        self.shape.width
    }

    pub fn height(&self) -> usize {
        self.shape.height
    }

    pub fn channels(&self) -> usize {
        self.shape.channels
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.shape.width + x) * self.shape.channels
    }

    /// Get one channel of the pixel at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.buf[self.offset(x, y) + channel]
    }

    /// Set one channel of the pixel at (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, channel: usize, val: u8) {
        let i = self.offset(x, y) + channel;
        self.buf[i] = val;
    }

    /// All channels of the pixel at (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = self.offset(x, y);
        &self.buf[start..start + self.shape.channels]
    }
}
