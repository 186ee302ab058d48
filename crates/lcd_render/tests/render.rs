use image::RgbaImage;
use lcd_render::{
    CharSize, ColorSet, DisplayRenderer, DisplaySpec, Glyph, GlyphTable, RenderedImage,
};

fn standard_renderer() -> DisplayRenderer {
    DisplayRenderer::new(DisplaySpec::standard_16x2(), GlyphTable::standard().unwrap()).unwrap()
}

/// Pixel rectangle covered by cell `(row, col)`.
fn cell_rect(renderer: &DisplayRenderer, row: u16, col: u16) -> (u32, u32, u32, u32) {
    let spec = renderer.spec();
    let scale = renderer.scale();
    let (x, y) = spec.cell_origin(row, col);
    let w = u32::from(spec.char_size.w);
    let h = u32::from(spec.char_size.h);
    (x * scale, y * scale, (x + w) * scale, (y + h) * scale)
}

fn cell_pixels(image: &RgbaImage, rect: (u32, u32, u32, u32)) -> Vec<[u8; 4]> {
    let (x1, y1, x2, y2) = rect;
    let mut pixels = Vec::new();
    for y in y1..y2 {
        for x in x1..x2 {
            pixels.push(image.get_pixel(x, y).0);
        }
    }
    pixels
}

fn lit_in_cell(renderer: &DisplayRenderer, image: &RenderedImage, row: u16, col: u16) -> usize {
    let on = renderer.spec().color_set.pixel_on.0;
    cell_pixels(image, cell_rect(renderer, row, col)).iter().filter(|pixel| **pixel == on).count()
}

#[test]
fn canvas_size_follows_geometry() {
    let table = GlyphTable::standard().unwrap();
    for (rows, cols, sep, scale) in [(2, 16, 1, 10), (4, 20, 2, 3), (1, 1, 0, 1), (1, 8, 5, 7)] {
        let spec =
            DisplaySpec::new(rows, cols, CharSize::new(5, 7), sep, ColorSet::standard()).unwrap();
        let renderer = DisplayRenderer::new(spec, table.clone()).unwrap().with_scale(scale).unwrap();
        let image = renderer.render("overflowing message that is longer than any of these grids");

        let sep = u32::from(sep);
        let width = scale * (u32::from(cols) * 5 + u32::from(cols) * sep + sep);
        let height = scale * (u32::from(rows) * 7 + u32::from(rows) * sep + sep);
        assert_eq!(image.dimensions(), (width, height));
        assert_eq!(renderer.canvas_size(), (width, height));
    }
}

#[test]
fn hello_fills_first_five_cells_only() {
    let renderer = standard_renderer();
    let image = renderer.render("HELLO");
    let table = renderer.table();

    for (col, ch) in "HELLO".chars().enumerate() {
        let lit = lit_in_cell(&renderer, &image, 0, col as u16);
        assert_eq!(lit, table.lookup(ch).lit_dots() * 100, "cell (0, {})", col);
    }
    for row in 0..2 {
        let start = if row == 0 { 5 } else { 0 };
        for col in start..16 {
            assert_eq!(lit_in_cell(&renderer, &image, row, col), 0, "cell ({}, {})", row, col);
        }
    }
}

#[test]
fn characters_land_at_index_div_mod_cols() {
    let renderer = standard_renderer();
    let message = "The quick brown fox jumps";
    let grid = renderer.layout(message);
    let table = renderer.table();

    for (index, ch) in message.chars().enumerate() {
        assert_eq!(grid.get(index / 16, index % 16), Some(table.lookup(ch)), "char {}", index);
    }
}

#[test]
fn newline_separated_rows() {
    let renderer = standard_renderer();
    let image = renderer.render("A\nB");
    let table = renderer.table();

    assert_eq!(lit_in_cell(&renderer, &image, 0, 0), table.lookup('A').lit_dots() * 100);
    assert_eq!(lit_in_cell(&renderer, &image, 1, 0), table.lookup('B').lit_dots() * 100);
    assert_eq!(lit_in_cell(&renderer, &image, 0, 1), 0);
}

#[test]
fn newline_resets_column_from_any_position() {
    let renderer = standard_renderer();
    let grid = renderer.layout("ABCDEFG\nH");
    assert_eq!(grid.get(1, 0), Some(renderer.table().lookup('H')));
    assert!(grid.get(0, 7).is_none());
}

#[test]
fn unknown_character_renders_like_question_mark() {
    let renderer = standard_renderer();
    for unknown in ["\u{e9}", "\u{20ac}", "\t"] {
        let message = format!("AB{}", unknown);
        assert_eq!(renderer.render(&message), renderer.render("AB?"), "{:?}", unknown);
    }
}

#[test]
fn unmapped_at_sign_renders_like_question_mark() {
    let question = Glyph::from_columns(&[0x02, 0x01, 0x51, 0x09, 0x06], 7).unwrap();
    let a = Glyph::from_columns(&[0x7e, 0x11, 0x11, 0x11, 0x7e], 7).unwrap();
    let table = GlyphTable::new(CharSize::new(5, 7), [('?', question), ('A', a)]).unwrap();
    let renderer = DisplayRenderer::new(DisplaySpec::standard_16x2(), table).unwrap();

    assert_eq!(renderer.render("A@"), renderer.render("A?"));
}

#[test]
fn overflow_is_dropped_without_changing_canvas() {
    let renderer = standard_renderer();
    let full = "0123456789ABCDEF0123456789ABCDEF";
    let overflowing = format!("{}more text\nand another line", full);

    let grid = renderer.layout(&overflowing);
    assert_eq!(grid.dropped(), overflowing.chars().filter(|ch| *ch != '\n').count() - 32);
    assert_eq!(renderer.render(&overflowing), renderer.render(full));
}

#[test]
fn only_palette_colors_appear() {
    let renderer = standard_renderer();
    let colors = renderer.spec().color_set;
    let image = renderer.render("Hello, World!\n~{|}~ 1234567890");

    for (x, y, pixel) in image.enumerate_pixels() {
        assert!(
            *pixel == colors.background || *pixel == colors.pixel_off || *pixel == colors.pixel_on,
            "unexpected color {:?} at ({}, {})",
            pixel,
            x,
            y
        );
    }
}

#[test]
fn pixels_are_classified_by_cell_and_bit() {
    let renderer = standard_renderer().with_scale(2).unwrap();
    let spec = *renderer.spec();
    let colors = spec.color_set;
    let message = "Hi!";
    let image = renderer.render(message);
    let grid = renderer.layout(message);
    let scale = renderer.scale();

    for (x, y, pixel) in image.enumerate_pixels() {
        let (ux, uy) = (x / scale, y / scale);
        let mut expected = colors.background;
        for (row, col, glyph) in grid.cells() {
            let (cx, cy) = spec.cell_origin(row, col);
            let inside = ux >= cx
                && uy >= cy
                && ux < cx + u32::from(spec.char_size.w)
                && uy < cy + u32::from(spec.char_size.h);
            if inside {
                let lit = glyph.map_or(false, |glyph| {
                    glyph.is_set((ux - cx) as u16, (uy - cy) as u16)
                });
                expected = if lit { colors.pixel_on } else { colors.pixel_off };
            }
        }
        assert_eq!(*pixel, expected, "pixel ({}, {})", x, y);
    }
}

#[test]
fn empty_message_renders_blank_display() {
    let renderer = standard_renderer();
    let image = renderer.render("");
    let on = renderer.spec().color_set.pixel_on;
    assert!(image.pixels().all(|pixel| *pixel != on));
    assert_eq!(renderer.layout("").occupied(), 0);
}
