pub mod logger;

mod bot;
mod game;
mod grid;
mod lines;
mod scorer;
mod session_rng;
mod types;
mod win_detector;

pub use bot::{ScoredMove, best_candidates, choose_move, score_candidates};
pub use game::Game;
pub use grid::{Grid, Snapshot, parse_snapshot};
pub use lines::winning_lines;
pub use scorer::score_move;
pub use session_rng::SessionRng;
pub use types::{GameState, Mark, Position, RecommendedMove};
pub use win_detector::check_win;
