//! PNG encoding and decoding for grids.

use std::io::Write;
use std::path::Path;

use crate::encode::GridEncoder;
use crate::error::{EncodeError, ReadError};
use crate::grid::{Grid, GridShape};

/// Writes grids as 8-bit PNG images.
///
/// The channel count picks the color type: 1 gray, 2 gray + alpha, 3 RGB,
/// 4 RGBA.
#[derive(Debug, Clone, Copy)]
pub struct PngEncoder {
    compression: png::Compression,
}

impl Default for PngEncoder {
    fn default() -> Self {
        Self {
            compression: png::Compression::Default,
        }
    }
}

impl PngEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compression(compression: png::Compression) -> Self {
        Self { compression }
    }
}

impl GridEncoder for PngEncoder {
    fn encode(&self, grid: &Grid, out: &mut dyn Write) -> Result<(), EncodeError> {
        let color = color_type(grid.channels())?;
        let overflow = || EncodeError::DimensionOverflow {
            width: grid.width(),
            height: grid.height(),
        };
        let width = u32::try_from(grid.width()).map_err(|_| overflow())?;
        let height = u32::try_from(grid.height()).map_err(|_| overflow())?;

        let mut encoder = png::Encoder::new(out, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(self.compression);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(grid.as_bytes())?;
        writer.finish()?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}

fn color_type(channels: usize) -> Result<png::ColorType, EncodeError> {
    match channels {
        1 => Ok(png::ColorType::Grayscale),
        2 => Ok(png::ColorType::GrayscaleAlpha),
        3 => Ok(png::ColorType::Rgb),
        4 => Ok(png::ColorType::Rgba),
        n => Err(EncodeError::UnsupportedChannels(n)),
    }
}

/// Decode an 8-bit PNG held in memory into a grid.
pub fn decode_png(bytes: &[u8]) -> Result<Grid, ReadError> {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(ReadError::UnsupportedFormat(format!(
            "bit depth {:?}",
            info.bit_depth
        )));
    }
    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => {
            return Err(ReadError::UnsupportedFormat(format!("color type {other:?}")));
        }
    };

    buf.truncate(info.buffer_size());
    let shape = GridShape::new(info.width as usize, info.height as usize, channels);
    Ok(Grid::from_raw(shape, buf)?)
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<Grid, ReadError> {
    let bytes = std::fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    decode_png(&bytes)
}
