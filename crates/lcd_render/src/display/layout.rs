use super::spec::DisplaySpec;
use crate::glyph::{bitmap::Glyph, table::GlyphTable};

/// Glyph placement for one render, `rows x cols`, empty by default.
#[derive(Clone, Debug)]
pub struct LayoutGrid<'a> {
    rows: u16,
    cols: u16,
    cells: Vec<Option<&'a Glyph>>,
    dropped: usize,
}

impl<'a> LayoutGrid<'a> {
    pub fn new(rows: u16, cols: u16) -> Self {
        let cells = vec![None; usize::from(rows) * usize::from(cols)];
        Self { rows, cols, cells, dropped: 0 }
    }

    /// Places `message` left to right, top to bottom.
    ///
    /// A newline moves to the start of the next row without using a cell, and
    /// filling the last column wraps the same way. Characters landing past
    /// the last row are dropped and counted in [`LayoutGrid::dropped`].
    pub fn layout(message: &str, spec: &DisplaySpec, table: &'a GlyphTable) -> Self {
        let mut grid = Self::new(spec.rows, spec.cols);
        let cols = usize::from(spec.cols);
        let (mut row, mut col) = (0usize, 0usize);

        for ch in message.chars() {
            if ch == '\n' {
                row += 1;
                col = 0;
                continue;
            }

            if !grid.place(row, col, table.lookup(ch)) {
                grid.dropped += 1;
            }

            col += 1;
            if col >= cols {
                row += 1;
                col = 0;
            }
        }

        grid
    }

    /// Assigns `glyph` to `(row, col)` if it lies inside the grid.
    pub fn place(&mut self, row: usize, col: usize, glyph: &'a Glyph) -> bool {
        match self.index(row, col) {
            Some(index) => {
                self.cells[index] = Some(glyph);
                true
            },
            None => false,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&'a Glyph> {
        self.index(row, col).and_then(|index| self.cells[index])
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Number of cells holding a glyph.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Characters discarded because they fell outside the grid.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Row-major iterator over `(row, col, glyph)` for every cell.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, Option<&'a Glyph>)> + '_ {
        let cols = usize::from(self.cols);
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| ((index / cols) as u16, (index % cols) as u16, *cell))
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let (rows, cols) = (usize::from(self.rows), usize::from(self.cols));
        (row < rows && col < cols).then(|| row * cols + col)
    }
}
