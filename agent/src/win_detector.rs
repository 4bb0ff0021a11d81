use crate::types::Mark;

/// Reports the mark holding a complete line, if any. Rows are scanned first,
/// then columns, then the two diagonals; the first complete line decides.
/// A valid two-mark board can never hand a full line to both players at once,
/// so the scan order does not change the outcome. Expects a square board.
pub fn check_win(rows: &[Vec<Mark>]) -> Option<Mark> {
    let size = rows.len();

    for row in rows {
        if let Some(mark) = line_winner(row.iter().copied()) {
            return Some(mark);
        }
    }

    for col in 0..size {
        if let Some(mark) = line_winner(rows.iter().map(|row| row[col])) {
            return Some(mark);
        }
    }

    if let Some(mark) = line_winner((0..size).map(|index| rows[index][index])) {
        return Some(mark);
    }

    line_winner((0..size).map(|index| rows[size - 1 - index][index]))
}

/// A line wins only when every cell holds the same non-empty mark; a line of
/// uniformly empty cells is not a win.
fn line_winner(mut cells: impl Iterator<Item = Mark>) -> Option<Mark> {
    let first = cells.next()?;
    if first == Mark::Empty {
        return None;
    }
    if cells.all(|cell| cell == first) {
        Some(first)
    } else {
        None
    }
}
