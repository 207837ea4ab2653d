use image::{imageops::FilterType, Rgba, RgbaImage};

use super::config::RasterConfig;
use super::stroke::draw_stroke;
use crate::mesh::Edge;

/// Square RGBA drawing surface, fully transparent until edges are drawn
pub struct Canvas {
    image: RgbaImage,
    config: RasterConfig,
}

impl Canvas {
    pub fn new(config: RasterConfig) -> Self {
        let image = RgbaImage::new(config.canvas_size, config.canvas_size);
        Self { image, config }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Map a normalized texture coordinate to the nearest canvas pixel
    pub fn to_pixel(&self, tex: [f32; 2]) -> (i32, i32) {
        let size = self.config.canvas_size as f32;
        ((tex[0] * size).round() as i32, (tex[1] * size).round() as i32)
    }

    pub fn draw_edge(&mut self, edge: &Edge) {
        let start = self.to_pixel(edge.from);
        let end = self.to_pixel(edge.to);
        draw_stroke(
            &mut self.image,
            start,
            end,
            self.config.stroke_color(),
            self.config.stroke_width,
        );
    }

    /// Resample to `canvas_size / factor` with Lanczos3.
    ///
    /// Filtering runs on premultiplied alpha so transparent neighbours do
    /// not darken the colour of partly covered pixels.
    pub fn downsample(&self, factor: u32) -> RgbaImage {
        let size = self.image.width() / factor.max(1);
        log::debug!(
            "Resampling {}x{} canvas to {}x{}",
            self.image.width(),
            self.image.height(),
            size,
            size
        );
        let mut premultiplied = self.image.clone();
        premultiplied.pixels_mut().for_each(premultiply);

        let mut resized = image::imageops::resize(&premultiplied, size, size, FilterType::Lanczos3);
        resized.pixels_mut().for_each(unpremultiply);
        resized
    }
}

fn premultiply(p: &mut Rgba<u8>) {
    let a = p[3] as u32;
    for c in 0..3 {
        p[c] = ((p[c] as u32 * a + 127) / 255) as u8;
    }
}

fn unpremultiply(p: &mut Rgba<u8>) {
    let a = p[3] as u32;
    if a == 0 {
        *p = Rgba([0, 0, 0, 0]);
        return;
    }
    for c in 0..3 {
        p[c] = ((p[c] as u32 * 255 + a / 2) / a).min(255) as u8;
    }
}
