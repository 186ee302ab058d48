use image::Rgba;

use crate::glyph::bitmap::CharSize;
use crate::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSet {
    pub background: Rgba<u8>,
    /// Unlit dot inside a character cell.
    pub pixel_off: Rgba<u8>,
    /// Lit dot inside a character cell.
    pub pixel_on: Rgba<u8>,
}

impl ColorSet {
    /// Yellow-green backlight with dark dots.
    pub fn standard() -> Self {
        Self {
            background: Rgba([149, 210, 3, 255]),
            pixel_off: Rgba([138, 195, 19, 255]),
            pixel_on: Rgba([3, 13, 14, 255]),
        }
    }
}

/// Physical shape of a character LCD, in display units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplaySpec {
    pub rows: u16,
    pub cols: u16,
    pub char_size: CharSize,
    /// Gap between cells, also used as the leading margin.
    pub char_sep: u16,
    pub color_set: ColorSet,
}

impl DisplaySpec {
    pub fn new(
        rows: u16,
        cols: u16,
        char_size: CharSize,
        char_sep: u16,
        color_set: ColorSet,
    ) -> Result<Self, ConfigError> {
        let spec = Self { rows, cols, char_size, char_sep, color_set };
        spec.validate()?;
        Ok(spec)
    }

    /// The common 16x2 module with 5x7 characters.
    pub fn standard_16x2() -> Self {
        Self {
            rows: 2,
            cols: 16,
            char_size: CharSize::new(5, 7),
            char_sep: 1,
            color_set: ColorSet::standard(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("rows", self.rows),
            ("cols", self.cols),
            ("character width", self.char_size.w),
            ("character height", self.char_size.h),
        ];
        if let Some((name, _)) = dimensions.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ZeroDimension(*name));
        }

        let colors = [
            ("background", self.color_set.background),
            ("pixel off", self.color_set.pixel_off),
            ("pixel on", self.color_set.pixel_on),
        ];
        if let Some((name, _)) = colors.iter().find(|(_, color)| color.0[3] != u8::MAX) {
            return Err(ConfigError::TranslucentColor(*name));
        }

        if self.checked_canvas_units().is_none() {
            return Err(ConfigError::CanvasTooLarge { rows: self.rows, cols: self.cols, scale: 1 });
        }

        Ok(())
    }

    pub fn capacity(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    /// Canvas size before scaling: every cell plus one separator before it,
    /// plus a trailing separator. Saturates for specs that fail [`validate`].
    ///
    /// [`validate`]: DisplaySpec::validate
    pub fn canvas_units(&self) -> (u32, u32) {
        self.checked_canvas_units().unwrap_or((u32::MAX, u32::MAX))
    }

    /// Like [`DisplaySpec::canvas_units`], `None` when either side overflows `u32`.
    pub fn checked_canvas_units(&self) -> Option<(u32, u32)> {
        let sep = u32::from(self.char_sep);
        let span = |count: u16, size: u16| {
            u32::from(count).checked_mul(u32::from(size) + sep)?.checked_add(sep)
        };
        Some((span(self.cols, self.char_size.w)?, span(self.rows, self.char_size.h)?))
    }

    /// Top-left corner of cell `(row, col)` before scaling.
    pub fn cell_origin(&self, row: u16, col: u16) -> (u32, u32) {
        let sep = u32::from(self.char_sep);
        let x = u32::from(col) * (u32::from(self.char_size.w) + sep) + sep;
        let y = u32::from(row) * (u32::from(self.char_size.h) + sep) + sep;
        (x, y)
    }
}
