mod display;
mod glyph;

use image::RgbaImage;
use log::debug;

pub use display::{
    layout::LayoutGrid,
    spec::{ColorSet, DisplaySpec},
};
pub use glyph::{
    bitmap::{CharSize, Glyph},
    table::{GlyphTable, FALLBACK},
};

/// Integer multiplier from display units to output pixels.
pub const DEFAULT_SCALE: u32 = 10;

/// Finished pixel buffer handed to an image encoder.
pub type RenderedImage = RgbaImage;

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("glyph table has no entry for fallback character {0:?}")]
    MissingFallback(char),
    #[error("glyph for {ch:?} is {found_w}x{found_h}, table expects {expected_w}x{expected_h}")]
    GlyphSize { ch: char, expected_w: u16, expected_h: u16, found_w: u16, found_h: u16 },
    #[error("glyph bitmaps must be 1 to 8 dots tall, got {0}")]
    GlyphHeight(u16),
    #[error("glyph bitmaps need at least one column")]
    EmptyGlyph,
    #[error("glyph bitmaps can be at most 65535 columns wide, got {0}")]
    GlyphWidth(usize),
    #[error("glyph column {column} has dots below row {height}")]
    StrayDots { column: usize, height: u16 },
    #[error("display {0} must be greater than zero")]
    ZeroDimension(&'static str),
    #[error("display color {0} must be fully opaque")]
    TranslucentColor(&'static str),
    #[error("scale factor must be greater than zero")]
    ZeroScale,
    #[error("{cols}x{rows} display at scale {scale} does not fit in an image buffer")]
    CanvasTooLarge { rows: u16, cols: u16, scale: u32 },
    #[error("display cells are {display_w}x{display_h} but font glyphs are {font_w}x{font_h}")]
    CharSizeMismatch { display_w: u16, display_h: u16, font_w: u16, font_h: u16 },
}

/// Renders messages onto a simulated character LCD.
#[derive(Clone, Debug)]
pub struct DisplayRenderer {
    spec: DisplaySpec,
    table: GlyphTable,
    scale: u32,
    canvas: (u32, u32),
}

impl DisplayRenderer {
    pub fn new(spec: DisplaySpec, table: GlyphTable) -> Result<Self, ConfigError> {
        spec.validate()?;

        let font = table.char_size();
        if font != spec.char_size {
            return Err(ConfigError::CharSizeMismatch {
                display_w: spec.char_size.w,
                display_h: spec.char_size.h,
                font_w: font.w,
                font_h: font.h,
            });
        }

        let canvas = canvas_pixels(&spec, DEFAULT_SCALE)?;
        Ok(Self { spec, table, scale: DEFAULT_SCALE, canvas })
    }

    pub fn with_scale(mut self, scale: u32) -> Result<Self, ConfigError> {
        if scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        self.canvas = canvas_pixels(&self.spec, scale)?;
        self.scale = scale;
        Ok(self)
    }

    pub fn spec(&self) -> &DisplaySpec {
        &self.spec
    }

    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Output image size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas
    }

    pub fn layout<'a>(&'a self, message: &str) -> LayoutGrid<'a> {
        LayoutGrid::layout(message, &self.spec, &self.table)
    }

    pub fn render(&self, message: &str) -> RenderedImage {
        let grid = self.layout(message);
        self.render_layout(&grid)
    }

    pub fn render_layout(&self, grid: &LayoutGrid<'_>) -> RenderedImage {
        let (width, height) = self.canvas_size();
        debug!(
            "rendering {}x{} display ({} glyphs) onto {}x{} canvas",
            self.spec.cols,
            self.spec.rows,
            grid.occupied(),
            width,
            height
        );
        display::raster::rasterize(grid, &self.spec, self.scale)
    }
}

/// Scaled canvas size, rejecting sizes whose RGBA buffer cannot be addressed.
fn canvas_pixels(spec: &DisplaySpec, scale: u32) -> Result<(u32, u32), ConfigError> {
    let too_large = ConfigError::CanvasTooLarge { rows: spec.rows, cols: spec.cols, scale };
    let (width, height) = spec.checked_canvas_units().ok_or_else(|| too_large.clone())?;

    let width = width.checked_mul(scale).ok_or_else(|| too_large.clone())?;
    let height = height.checked_mul(scale).ok_or_else(|| too_large.clone())?;
    usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .and_then(|(w, h)| w.checked_mul(h))
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or(too_large)?;

    Ok((width, height))
}
