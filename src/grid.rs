/// One map position. Anything the format gives no meaning to (including
/// symbols outside the expected set) is Blank and blocks traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A `*` marker; the node itself. Named by an adjacent label run.
    Station,
    /// A `#` cell; walkable, costs one hop.
    Corridor,
    /// An ASCII alphanumeric byte; part of some station's name.
    Label(u8),
    Blank,
}

impl Cell {
    fn classify(c: u8) -> Self {
        match c {
            b'*' => Cell::Station,
            b'#' => Cell::Corridor,
            c if c.is_ascii_alphanumeric() => Cell::Label(c),
            _ => Cell::Blank,
        }
    }
}

/// Row-major grid of classified cells. Immutable after load; searches keep
/// their own visited scratch so the grid is shared freely between them.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build from raw text rows. Rows shorter than `width` are padded with
    /// Blank and longer rows are truncated; a malformed map is never an
    /// error, it just alters connectivity.
    pub fn new(width: usize, height: usize, rows: &[String]) -> Self {
        let mut cells = vec![Cell::Blank; width * height];
        for (r, row) in rows.iter().take(height).enumerate() {
            for (c, &byte) in row.as_bytes().iter().take(width).enumerate() {
                cells[r * width + c] = Cell::classify(byte);
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// True when the cell holds a label byte. Callers check bounds first.
    pub fn is_alnum(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Cell::Label(_))
    }

    /// Station cells in row-major order; discovery order fixes station ids.
    pub fn stations(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == Cell::Station)
            .map(|(i, _)| (i / self.width, i % self.width))
    }
}
