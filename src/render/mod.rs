//! Rasterizing mesh edges onto a canvas and writing the resampled result

pub mod canvas;
pub mod config;
pub mod pipeline;
pub mod stroke;

pub use canvas::Canvas;
pub use config::RasterConfig;
pub use pipeline::{rasterize, render_file};
