use glam::Vec2;

/// RGBA colour of a single grid cell
pub type Cell = [u8; 4];

/// Fully transparent cell, skipped by renderers
pub const TRANSPARENT: Cell = [0, 0, 0, 0];

/// Logical 2D grid content
///
/// Cells are stored row-major with row 0 at the top. The default value is the
/// empty 0x0 grid, which is valid and simply has nothing to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cols: u32,
    rows: u32,
    cell_size: Vec2,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create grid with every cell transparent
    pub fn new(cols: u32, rows: u32) -> Self {
        Self::filled(cols, rows, TRANSPARENT)
    }

    /// Create grid with every cell set to `color`
    pub fn filled(cols: u32, rows: u32, color: Cell) -> Self {
        Self {
            cols,
            rows,
            cell_size: Vec2::ONE,
            cells: vec![color; cols as usize * rows as usize],
        }
    }

    /// Set the size of one cell in grid units
    pub fn with_cell_size(mut self, cell_size: Vec2) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// (columns, rows)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.cols, self.rows)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total size of the grid in grid units
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.cols as f32, self.rows as f32) * self.cell_size
    }

    pub fn cell_index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.cols as usize
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<Cell> {
        (x < self.cols && y < self.rows).then(|| self.cells[self.cell_index(x, y)])
    }

    /// Write one cell. Returns false when (x, y) lies outside the grid.
    pub fn set_cell(&mut self, x: u32, y: u32, cell: Cell) -> bool {
        if x >= self.cols || y >= self.rows {
            return false;
        }
        let idx = self.cell_index(x, y);
        self.cells[idx] = cell;
        true
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate (x, y, cell) in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, Cell)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i as u32 % cols, i as u32 / cols, cell))
    }

    /// Normalized grid-space rectangle `[-1, 1]^2` covered by a cell.
    ///
    /// x grows right and y grows up, so row 0 sits at the top edge.
    pub fn cell_bounds(&self, x: u32, y: u32) -> (Vec2, Vec2) {
        let step = Vec2::new(2.0 / self.cols.max(1) as f32, 2.0 / self.rows.max(1) as f32);
        let min_x = -1.0 + x as f32 * step.x;
        let max_y = 1.0 - y as f32 * step.y;
        (
            Vec2::new(min_x, max_y - step.y),
            Vec2::new(min_x + step.x, max_y),
        )
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
