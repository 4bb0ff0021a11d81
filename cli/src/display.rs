use tictactoe_agent::Grid;

/// Renders the board with row and column indices, one text line per row.
pub fn render(grid: &Grid) -> String {
    let size = grid.size();
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..size {
        out.push_str(&format!("{:>2}", col));
    }
    out.push('\n');

    for (row_index, row) in grid.rows().iter().enumerate() {
        out.push_str(&format!("{:>2} ", row_index));
        for &cell in row {
            out.push_str(&format!(" {}", cell));
        }
        out.push('\n');
    }

    out
}
