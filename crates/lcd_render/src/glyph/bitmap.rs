use crate::ConfigError;

/// Dot dimensions of one character cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharSize {
    pub w: u16,
    pub h: u16,
}

impl CharSize {
    pub const fn new(w: u16, h: u16) -> Self {
        Self { w, h }
    }
}

/// Fixed-size dot-matrix bitmap for a single character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    size: CharSize,
    /// Row-major, `size.w * size.h` entries.
    dots: Vec<bool>,
}

impl Glyph {
    /// Builds a glyph from HD44780-style column bytes: one byte per column,
    /// bit `n` lights the dot on row `n` counting from the top.
    pub fn from_columns(columns: &[u8], height: u16) -> Result<Self, ConfigError> {
        if height == 0 || height > 8 {
            return Err(ConfigError::GlyphHeight(height));
        }
        if columns.is_empty() {
            return Err(ConfigError::EmptyGlyph);
        }

        let width = columns.len();
        let glyph_width = u16::try_from(width).map_err(|_| ConfigError::GlyphWidth(width))?;
        let mut dots = vec![false; width * usize::from(height)];
        for (column, &bits) in columns.iter().enumerate() {
            if height < 8 && bits >> height != 0 {
                return Err(ConfigError::StrayDots { column, height });
            }
            for row in 0..usize::from(height) {
                dots[row * width + column] = bits & (1 << row) != 0;
            }
        }

        Ok(Self { size: CharSize::new(glyph_width, height), dots })
    }

    /// Builds a glyph from text rows where `#` marks a lit dot.
    pub fn from_rows(rows: &[&str]) -> Result<Self, ConfigError> {
        let height = u16::try_from(rows.len()).unwrap_or(u16::MAX);
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut columns = vec![0u8; width];
        for (row, line) in rows.iter().enumerate().take(8) {
            for (column, ch) in line.chars().enumerate() {
                if ch == '#' {
                    columns[column] |= 1 << row;
                }
            }
        }
        Self::from_columns(&columns, height)
    }

    pub fn size(&self) -> CharSize {
        self.size
    }

    pub fn width(&self) -> u16 {
        self.size.w
    }

    pub fn height(&self) -> u16 {
        self.size.h
    }

    /// Whether the dot at `(col, row)` is lit. Out of range reads as unlit.
    pub fn is_set(&self, col: u16, row: u16) -> bool {
        if col >= self.size.w || row >= self.size.h {
            return false;
        }
        self.dots[usize::from(row) * usize::from(self.size.w) + usize::from(col)]
    }

    pub fn lit_dots(&self) -> usize {
        self.dots.iter().filter(|&&dot| dot).count()
    }
}
