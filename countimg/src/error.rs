use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error(
        "buffer length {actual} does not match {width}x{height}x{channels} grid \
         ({expected} bytes)"
    )]
    LengthMismatch {
        width: usize,
        height: usize,
        channels: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("writing {}: {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported channel count {0} (PNG holds 1 to 4 channels)")]
    UnsupportedChannels(usize),

    #[error("grid dimensions {width}x{height} do not fit in an image header")]
    DimensionOverflow { width: usize, height: usize },

    #[error(transparent)]
    Png(#[from] png::EncodingError),
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Png(#[from] png::DecodingError),

    #[error("unsupported PNG layout: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Parse(#[from] toml::de::Error),
}
