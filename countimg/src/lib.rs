pub mod error;
pub mod grid;
pub mod pattern;
pub mod encode;
pub mod render_png;
