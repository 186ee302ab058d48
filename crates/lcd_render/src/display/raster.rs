use image::{Rgba, RgbaImage};

use super::{layout::LayoutGrid, spec::DisplaySpec};
use crate::glyph::bitmap::Glyph;

pub(crate) fn rasterize(grid: &LayoutGrid<'_>, spec: &DisplaySpec, scale: u32) -> RgbaImage {
    let (width, height) = spec.canvas_units();
    let colors = spec.color_set;
    let mut image = RgbaImage::from_pixel(width * scale, height * scale, colors.background);

    let cell_w = u32::from(spec.char_size.w) * scale;
    let cell_h = u32::from(spec.char_size.h) * scale;

    for row in 0..spec.rows {
        for col in 0..spec.cols {
            let (x, y) = spec.cell_origin(row, col);
            let (x1, y1) = (x * scale, y * scale);
            fill_rect(&mut image, x1, y1, x1 + cell_w, y1 + cell_h, colors.pixel_off);

            if let Some(glyph) = grid.get(usize::from(row), usize::from(col)) {
                draw_glyph(&mut image, glyph, x1, y1, scale, colors.pixel_on);
            }
        }
    }

    image
}

fn draw_glyph(image: &mut RgbaImage, glyph: &Glyph, x: u32, y: u32, scale: u32, color: Rgba<u8>) {
    for col in 0..glyph.width() {
        for row in 0..glyph.height() {
            if glyph.is_set(col, row) {
                let dot_x = x + u32::from(col) * scale;
                let dot_y = y + u32::from(row) * scale;
                fill_rect(image, dot_x, dot_y, dot_x + scale, dot_y + scale, color);
            }
        }
    }
}

/// Paints the half-open rectangle `[x1, x2) x [y1, y2)`, clipped to the image.
fn fill_rect(image: &mut RgbaImage, x1: u32, y1: u32, x2: u32, y2: u32, color: Rgba<u8>) {
    let x2 = x2.min(image.width());
    let y2 = y2.min(image.height());
    for y in y1..y2 {
        for x in x1..x2 {
            image.put_pixel(x, y, color);
        }
    }
}
