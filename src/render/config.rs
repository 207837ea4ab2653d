use image::Rgba;

#[derive(Debug, Clone)]
pub struct RasterConfig {
    pub canvas_size: u32,         // square canvas edge, e.g. 4096px
    pub downsample_factor: u32,   // output edge = canvas_size / factor
    pub color: [u8; 4],           // RGBA stroke color
    pub stroke_width: u32,        // in canvas pixels
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            canvas_size: 4096,
            downsample_factor: 2,
            color: [255, 0, 255, 255],
            stroke_width: 2,
        }
    }
}

impl RasterConfig {
    pub fn stroke_color(&self) -> Rgba<u8> {
        Rgba(self.color)
    }
}
