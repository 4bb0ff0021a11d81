use crate::grid::Grid;
use crate::scorer::score_move;
use crate::session_rng::SessionRng;
use crate::types::{Mark, Position};
use crate::win_detector::check_win;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    pub score: u32,
}

/// Scores every empty cell for `mark`, in row-major order.
pub fn score_candidates(grid: &Grid, lines: &[Vec<Position>], mark: Mark) -> Vec<ScoredMove> {
    let mut candidates = Vec::new();
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let position = Position::new(row, col);
            if let Some(score) = score_move(grid, lines, mark, position) {
                candidates.push(ScoredMove { position, score });
            }
        }
    }
    candidates
}

/// The set of cells tied at the maximum score, plus that score. A strictly
/// better candidate resets the set; an equal one joins it.
pub fn best_candidates(grid: &Grid, lines: &[Vec<Position>], mark: Mark) -> (Vec<Position>, u32) {
    let mut best = Vec::new();
    let mut best_score = 0;

    for candidate in score_candidates(grid, lines, mark) {
        if candidate.score > best_score {
            best_score = candidate.score;
            best = vec![candidate.position];
        } else if candidate.score == best_score {
            best.push(candidate.position);
        }
    }

    (best, best_score)
}

/// Picks the cell to play for `mark`. One ply of opponent lookahead: when the
/// opponent has an imminent win (score 10 or more) and we do not, the block
/// is played instead of our own top cell. Ties break uniformly at random.
/// Forks and deeper traps are out of scope for this heuristic.
pub fn choose_move(
    grid: &Grid,
    lines: &[Vec<Position>],
    players: [Mark; 2],
    mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    if !players.contains(&mark) {
        return None;
    }
    if check_win(grid.rows()).is_some() || grid.is_full() {
        return None;
    }

    let opponent = if mark == players[0] {
        players[1]
    } else {
        players[0]
    };
    let (opponent_best, opponent_score) = best_candidates(grid, lines, opponent);
    let (own_best, own_score) = best_candidates(grid, lines, mark);

    if opponent_score >= 10 && own_score < 10 {
        return rng.choose(&opponent_best).copied();
    }
    rng.choose(&own_best).copied()
}
