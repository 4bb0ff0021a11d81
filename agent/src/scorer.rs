use crate::grid::Grid;
use crate::types::{Mark, Position};

/// Heuristic value of placing `mark` at `candidate`, summed over every
/// winning line through that cell. `None` when the cell is occupied or out of
/// bounds. Per line: 10 when two own marks already sit on an otherwise clean
/// line, 2 for one own mark, 1 for a fully empty line, 0 once the opponent
/// holds any cell of it. The values are priority tiers, not probabilities.
pub fn score_move(
    grid: &Grid,
    lines: &[Vec<Position>],
    mark: Mark,
    candidate: Position,
) -> Option<u32> {
    if grid.value(candidate)? != Mark::Empty {
        return None;
    }

    let mut total = 0;
    for line in lines {
        if line.contains(&candidate) {
            total += line_score(grid, line, mark);
        }
    }
    Some(total)
}

fn line_score(grid: &Grid, line: &[Position], mark: Mark) -> u32 {
    let mut own = 0;
    let mut opponent = 0;

    for &position in line {
        match grid.value(position) {
            Some(Mark::Empty) | None => {}
            Some(cell) if cell == mark => own += 1,
            Some(_) => opponent += 1,
        }
    }

    if opponent > 0 {
        return 0;
    }
    match own {
        2 => 10,
        1 => 2,
        0 => 1,
        _ => 0,
    }
}
