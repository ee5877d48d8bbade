use crate::grid::{Cell, Grid};

/// Recover a station's name from the label run adjacent to its marker.
///
/// The map format allows the label to sit on any of the eight neighboring
/// cells, so the cases below are checked in a fixed priority order and the
/// first alphanumeric match wins. Diagonal cases only fire when the
/// orthogonal cell on the same side is not alphanumeric, otherwise that
/// label belongs to the above/below cases which disambiguate further.
/// Returns None when no configuration matches (the marker has no label).
pub fn resolve_name(grid: &Grid, row: usize, col: usize) -> Option<String> {
    let w = grid.width();
    let h = grid.height();

    // East: the name starts right after the marker.
    if col + 1 < w && grid.is_alnum(row, col + 1) {
        return Some(read_run(grid, row, col + 1));
    }
    // West: the marker sits after the name's last character.
    if col > 0 && grid.is_alnum(row, col - 1) {
        return Some(read_run(grid, row, run_start(grid, row, col - 1)));
    }
    // North-west / south-west diagonals.
    if col > 0 && row > 0 && grid.is_alnum(row - 1, col - 1) && !grid.is_alnum(row - 1, col) {
        return Some(read_run(grid, row - 1, run_start(grid, row - 1, col - 1)));
    }
    if col > 0 && row + 1 < h && grid.is_alnum(row + 1, col - 1) && !grid.is_alnum(row + 1, col) {
        return Some(read_run(grid, row + 1, run_start(grid, row + 1, col - 1)));
    }
    // North-east / south-east diagonals.
    if col + 1 < w && row > 0 && grid.is_alnum(row - 1, col + 1) && !grid.is_alnum(row - 1, col) {
        return Some(read_run(grid, row - 1, col + 1));
    }
    if col + 1 < w && row + 1 < h && grid.is_alnum(row + 1, col + 1) && !grid.is_alnum(row + 1, col) {
        return Some(read_run(grid, row + 1, col + 1));
    }
    // Directly above or below: the run overlaps the marker's column, so
    // probe nearby cells on the label row to locate where it starts.
    if row > 0 && grid.is_alnum(row - 1, col) {
        let start = run_start_above_below(grid, row - 1, col);
        return Some(read_run(grid, row - 1, start));
    }
    if row + 1 < h && grid.is_alnum(row + 1, col) {
        let start = run_start_above_below(grid, row + 1, col);
        return Some(read_run(grid, row + 1, start));
    }
    None
}

// `r` is the label row, `col` the marker's column; (r, col) is alphanumeric.
fn run_start_above_below(grid: &Grid, r: usize, col: usize) -> usize {
    let w = grid.width();
    if col > 0 && !grid.is_alnum(r, col - 1) {
        col
    } else if col > 2 && !grid.is_alnum(r, col - 2) {
        col - 1
    } else if col + 1 < w && !grid.is_alnum(r, col + 1) {
        run_start(grid, r, col)
    } else if col + 2 < w && !grid.is_alnum(r, col + 2) {
        run_start(grid, r, col + 1)
    } else {
        0
    }
}

/// Westward scan: first column of the alphanumeric run containing `col`.
fn run_start(grid: &Grid, row: usize, col: usize) -> usize {
    let mut start = col;
    while start > 0 && grid.is_alnum(row, start - 1) {
        start -= 1;
    }
    start
}

/// Eastward scan: copy label bytes until a non-label cell or the east edge.
fn read_run(grid: &Grid, row: usize, start: usize) -> String {
    let mut name = String::new();
    let mut col = start;
    while col < grid.width() {
        match grid.cell(row, col) {
            Cell::Label(b) => name.push(b as char),
            _ => break,
        }
        col += 1;
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let rows: Vec<String> = rows.iter().map(|s| s.to_string()).collect();
        Grid::new(width, rows.len(), &rows)
    }

    #[test]
    fn east_neighbor() {
        let g = grid(&["*KRAKOW"]);
        assert_eq!(resolve_name(&g, 0, 0), Some("KRAKOW".into()));
    }

    #[test]
    fn west_neighbor_walks_to_run_start() {
        let g = grid(&["GDANSK*"]);
        assert_eq!(resolve_name(&g, 0, 6), Some("GDANSK".into()));
    }

    #[test]
    fn west_run_reaching_column_zero() {
        let g = grid(&["AB*"]);
        assert_eq!(resolve_name(&g, 0, 2), Some("AB".into()));
    }

    #[test]
    fn north_west_diagonal() {
        let g = grid(&["OPOLE...", ".....*.."]);
        assert_eq!(resolve_name(&g, 1, 5), Some("OPOLE".into()));
    }

    #[test]
    fn south_west_diagonal() {
        let g = grid(&[".....*..", ".LODZ..."]);
        assert_eq!(resolve_name(&g, 0, 5), Some("LODZ".into()));
    }

    #[test]
    fn north_east_diagonal() {
        let g = grid(&[".TORUN", "*....."]);
        assert_eq!(resolve_name(&g, 1, 0), Some("TORUN".into()));
    }

    #[test]
    fn south_east_diagonal() {
        let g = grid(&["*.....", ".RADOM"]);
        assert_eq!(resolve_name(&g, 0, 0), Some("RADOM".into()));
    }

    #[test]
    fn diagonal_yields_to_vertical_when_orthogonal_is_alnum() {
        // (0,0) is alphanumeric but so is (0,1) directly above the marker,
        // so the north case resolves the run, not the north-west case.
        let g = grid(&["AB.", ".*."]);
        assert_eq!(resolve_name(&g, 1, 1), Some("AB".into()));
    }

    #[test]
    fn north_run_starting_at_marker_column() {
        let g = grid(&[".BYTOM.", ".*....."]);
        assert_eq!(resolve_name(&g, 1, 1), Some("BYTOM".into()));
    }

    #[test]
    fn north_run_ending_at_marker_column() {
        let g = grid(&["SOPOT.", "....*."]);
        assert_eq!(resolve_name(&g, 1, 4), Some("SOPOT".into()));
    }

    #[test]
    fn north_run_ending_one_past_marker_column() {
        let g = grid(&["SOPOT..", "...*..."]);
        assert_eq!(resolve_name(&g, 1, 3), Some("SOPOT".into()));
    }

    #[test]
    fn south_run_overlapping_marker() {
        let g = grid(&["..*...", "KIELCE"]);
        assert_eq!(resolve_name(&g, 0, 2), Some("KIELCE".into()));
    }

    #[test]
    fn no_label_anywhere() {
        let g = grid(&["...", ".*.", "..."]);
        assert_eq!(resolve_name(&g, 1, 1), None);
    }

    #[test]
    fn digits_allowed_in_names() {
        let g = grid(&["*A4"]);
        assert_eq!(resolve_name(&g, 0, 0), Some("A4".into()));
    }

    #[test]
    fn resolution_is_deterministic() {
        let g = grid(&["GDANSK*", "......."]);
        let first = resolve_name(&g, 0, 6);
        let second = resolve_name(&g, 0, 6);
        assert_eq!(first, second);
    }
}
