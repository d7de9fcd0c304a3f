use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use countimg::encode::{write_grid, GridEncoder};
use countimg::pattern::generate_default;
use countimg::render_png::PngEncoder;

/// Output file stem; the encoder supplies the extension.
const OUTPUT_STEM: &str = "count";

/// Write count.png, a 16x16 grayscale image whose pixel at row r,
/// column c has the value 0xRC
#[derive(Parser)]
#[command(name = "make-count-img", version)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let encoder = PngEncoder::new();
    let path = Path::new(OUTPUT_STEM).with_extension(encoder.extension());
    let grid = generate_default();
    write_grid(&encoder, &grid, &path)
        .with_context(|| format!("writing count image to {}", path.display()))?;

    log::info!(
        "wrote {}x{}x{} count image to {}",
        grid.width(),
        grid.height(),
        grid.channels(),
        path.display()
    );
    Ok(())
}
