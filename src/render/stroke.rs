//! Wide anti-aliased line strokes
//!
//! imageproc only draws one-pixel Wu lines, so a wide stroke is a stack of
//! parallel Wu lines stepped across the minor axis. Width is measured
//! across the line: a diagonal needs `width / cos θ` minor-axis pixels,
//! with the leftover fraction split between two faint outer passes.
//! Every covered pixel is composited with straight-alpha source-over.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_antialiased_line_segment_mut;

/// Composite `stroke` over `under`, with the stroke's alpha scaled by the
/// line coverage at this pixel.
pub fn blend_over(stroke: Rgba<u8>, under: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let src_a = stroke[3] as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    let dst_a = under[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let value = (stroke[c] as f32 * src_a + under[c] as f32 * dst_a * (1.0 - src_a)) / out_a;
        out[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba(out)
}

/// Minor-axis offsets and opacities of the parallel passes that make up a
/// stroke `width` pixels wide from `start` to `end`.
///
/// Axis-aligned width 2 yields `[(0, 1.0), (1, 1.0)]`.
fn passes(width: u32, start: (i32, i32), end: (i32, i32)) -> Vec<(i32, f32)> {
    let (dx, dy) = ((end.0 - start.0) as f32, (end.1 - start.1) as f32);
    let major = dx.abs().max(dy.abs());
    let width = width.max(1) as f32;
    let span = if major > 0.0 {
        width * (dx * dx + dy * dy).sqrt() / major
    } else {
        width
    };

    let full = span.floor() as i32;
    let first = -((full - 1) / 2);
    let mut passes: Vec<(i32, f32)> = (0..full).map(|i| (first + i, 1.0)).collect();

    let edge = (span - full as f32) / 2.0;
    if edge > 0.0 {
        passes.insert(0, (first - 1, edge));
        passes.push((first + full, edge));
    }
    passes
}

pub fn draw_stroke(
    canvas: &mut RgbaImage,
    start: (i32, i32),
    end: (i32, i32),
    color: Rgba<u8>,
    width: u32,
) {
    let steep = (end.1 - start.1).abs() > (end.0 - start.0).abs();

    for (offset, opacity) in passes(width, start, end) {
        let mut pass_color = color;
        pass_color[3] = (color[3] as f32 * opacity).round() as u8;
        if pass_color[3] == 0 {
            continue;
        }

        let (dx, dy) = if steep { (offset, 0) } else { (0, offset) };
        let a = (start.0 + dx, start.1 + dy);
        let b = (end.0 + dx, end.1 + dy);

        if a == b {
            plot(canvas, a, pass_color);
        } else {
            draw_antialiased_line_segment_mut(canvas, a, b, pass_color, blend_over);
        }
    }
}

// Zero-length segments still leave a dot.
fn plot(canvas: &mut RgbaImage, (x, y): (i32, i32), color: Rgba<u8>) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    let under = *canvas.get_pixel(x as u32, y as u32);
    canvas.put_pixel(x as u32, y as u32, blend_over(color, under, 1.0));
}
