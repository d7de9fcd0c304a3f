//! Encoder capability: serialize a finished grid to bytes or to a file.

use std::io::Write;
use std::path::Path;

use crate::error::EncodeError;
use crate::grid::Grid;

/// An image container that can serialize a [`Grid`].
pub trait GridEncoder {
    /// Write the encoded image to `out`.
    fn encode(&self, grid: &Grid, out: &mut dyn Write) -> Result<(), EncodeError>;

    /// Conventional file extension, without the dot.
    fn extension(&self) -> &'static str;
}

/// Encode into an in-memory buffer.
pub fn encode_to_vec(encoder: &dyn GridEncoder, grid: &Grid) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    encoder.encode(grid, &mut out)?;
    Ok(out)
}

/// Encode `grid` and write it to `path`.
///
/// The file is only created once encoding has succeeded, so a rejected grid
/// leaves any existing file untouched.
pub fn write_grid(encoder: &dyn GridEncoder, grid: &Grid, path: &Path) -> Result<(), EncodeError> {
    let bytes = encode_to_vec(encoder, grid)?;
    std::fs::write(path, &bytes).map_err(|source| EncodeError::Path {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "wrote {}x{}x{} grid to {} ({} bytes)",
        grid.width(),
        grid.height(),
        grid.channels(),
        path.display(),
        bytes.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridShape;

    /// Writes the raw grid bytes with no container. Rejects empty grids.
    struct RawEncoder;

    impl GridEncoder for RawEncoder {
        fn encode(&self, grid: &Grid, out: &mut dyn Write) -> Result<(), EncodeError> {
            if grid.shape().is_empty() {
                return Err(EncodeError::UnsupportedChannels(grid.channels()));
            }
            out.write_all(grid.as_bytes()).map_err(png::EncodingError::from)?;
            Ok(())
        }

        fn extension(&self) -> &'static str {
            "raw"
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("countimg-encode-{}-{name}", std::process::id()))
    }

    #[test]
    fn encode_to_vec_collects_output() {
        let grid = Grid::from_raw(GridShape::new(2, 2, 1), vec![1, 2, 3, 4]).unwrap();
        let bytes = encode_to_vec(&RawEncoder, &grid).unwrap();
        assert_eq!(bytes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn write_grid_reports_path_on_failure() {
        let grid = Grid::zeros(GridShape::new(1, 1, 1));
        let path = temp_path("missing-dir").join("nested").join("out.raw");
        let err = write_grid(&RawEncoder, &grid, &path).unwrap_err();
        match err {
            EncodeError::Path { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected path error, got {other:?}"),
        }
    }

    #[test]
    fn write_grid_creates_file() {
        let grid = Grid::from_raw(GridShape::new(3, 1, 1), vec![7, 8, 9]).unwrap();
        let path = temp_path("created.raw");
        write_grid(&RawEncoder, &grid, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(bytes, vec![7, 8, 9]);
    }

    #[test]
    fn failed_encode_does_not_create_file() {
        let path = temp_path("never-created.raw");
        let _ = std::fs::remove_file(&path);
        let err = write_grid(&RawEncoder, &Grid::zeros(GridShape::new(0, 4, 1)), &path);
        assert!(err.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn failed_encode_keeps_existing_file() {
        let path = temp_path("existing.raw");
        let original = b"previous fixture data";
        std::fs::write(&path, original).unwrap();

        let err = write_grid(&RawEncoder, &Grid::zeros(GridShape::new(4, 4, 0)), &path);
        let contents = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(err.is_err());
        assert_eq!(contents, original);
    }
}
