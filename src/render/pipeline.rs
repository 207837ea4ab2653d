//! Load, draw, resample, write

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use super::canvas::Canvas;
use super::config::RasterConfig;
use crate::error::RasterError;
use crate::mesh::MeshDocument;

/// Draw every edge of `doc` and return the resampled image.
///
/// All edges are resolved before any drawing starts, so a dangling
/// vertex reference fails without touching a canvas.
pub fn rasterize(doc: &MeshDocument, config: &RasterConfig) -> Result<RgbaImage, RasterError> {
    let edges = doc.edges()?;

    let mut canvas = Canvas::new(config.clone());
    for edge in &edges {
        canvas.draw_edge(edge);
    }
    log::debug!("Drew {} edges", edges.len());

    Ok(canvas.downsample(config.downsample_factor))
}

/// Render the mesh document at `input` into a PNG at `output`,
/// replacing any existing file.
pub fn render_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &RasterConfig,
) -> Result<(), RasterError> {
    let doc = MeshDocument::from_path(input)?;
    let image = rasterize(&doc, config)?;

    let output = output.as_ref();
    image.save_with_format(output, ImageFormat::Png)?;
    log::info!(
        "Wrote {}x{} PNG to {}",
        image.width(),
        image.height(),
        output.display()
    );
    Ok(())
}
