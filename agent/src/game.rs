use crate::bot::choose_move;
use crate::grid::{Grid, Snapshot};
use crate::lines::winning_lines;
use crate::session_rng::SessionRng;
use crate::types::{GameState, Mark, Position, RecommendedMove};
use crate::win_detector::check_win;

/// One game session: the board, its winning lines and the two registered
/// players. Owns its grid exclusively; callers wanting concurrent sessions
/// create one `Game` each.
pub struct Game {
    grid: Grid,
    lines: Vec<Vec<Position>>,
    players: [Mark; 2],
}

impl Game {
    /// Standard 3x3 session with X moving by default.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(3),
            lines: winning_lines(3),
            players: [Mark::X, Mark::O],
        }
    }

    pub fn with_size(size: usize) -> Result<Self, String> {
        if size < 2 {
            return Err(format!("Board size must be at least 2, got {}", size));
        }
        Ok(Self {
            grid: Grid::new(size),
            lines: winning_lines(size),
            players: [Mark::X, Mark::O],
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn board(&self) -> &Grid {
        &self.grid
    }

    pub fn players(&self) -> [Mark; 2] {
        self.players
    }

    /// Registers the two sides. The first mark is the default acting player.
    pub fn set_players(&mut self, first: Mark, second: Mark) -> Result<(), String> {
        if first == Mark::Empty || second == Mark::Empty {
            return Err("Players must be non-empty marks".to_string());
        }
        if first == second {
            return Err("Players must be two distinct marks".to_string());
        }
        self.players = [first, second];
        Ok(())
    }

    /// Validates and stores a board snapshot, then refreshes the winning
    /// lines for the stored size.
    pub fn set_board(&mut self, snapshot: &Snapshot) -> Result<(), String> {
        self.grid.set(snapshot)?;
        self.lines = winning_lines(self.grid.size());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn state(&self) -> GameState {
        let winner = check_win(self.grid.rows());
        GameState {
            active: winner.is_none() && !self.grid.is_full(),
            winner,
        }
    }

    pub fn is_finished(&self) -> bool {
        !self.state().active
    }

    /// Places a mark on behalf of a (human) player.
    pub fn place(&mut self, position: Position, mark: Mark) -> Result<(), String> {
        if !self.players.contains(&mark) {
            return Err(format!("{} is not a registered player", mark));
        }
        if self.is_finished() {
            return Err("Game is already over".to_string());
        }
        self.grid.set_value(position, mark)
    }

    /// Lets the agent take a turn on the current board. `None` when the game
    /// is decided, the board is full or the mark is not registered.
    pub fn play_move(&mut self, mark: Mark, rng: &mut SessionRng) -> Option<RecommendedMove> {
        let position = choose_move(&self.grid, &self.lines, self.players, mark, rng)?;
        self.grid.set_value(position, mark).ok()?;
        Some(RecommendedMove { position, mark })
    }

    /// The outward entry point: store the snapshot, recommend a move for
    /// `mark`, apply it, and hand it back. A malformed snapshot is an error;
    /// "nothing to play" is `Ok(None)` and leaves the stored board as given.
    pub fn make_move(
        &mut self,
        snapshot: &Snapshot,
        mark: Mark,
        rng: &mut SessionRng,
    ) -> Result<Option<RecommendedMove>, String> {
        self.set_board(snapshot)?;
        Ok(self.play_move(mark, rng))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::parse_snapshot;

    fn snapshot(text: &str) -> Snapshot {
        parse_snapshot(text).unwrap()
    }

    fn mark_count(game: &Game) -> usize {
        game.board()
            .rows()
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    #[test]
    fn test_new_game_is_three_by_three_and_active() {
        let game = Game::new();

        assert_eq!(game.size(), 3);
        assert_eq!(game.players(), [Mark::X, Mark::O]);
        assert_eq!(
            game.state(),
            GameState {
                active: true,
                winner: None
            }
        );
    }

    #[test]
    fn test_with_size_rejects_tiny_boards() {
        assert!(Game::with_size(0).is_err());
        assert!(Game::with_size(1).is_err());
        assert!(Game::with_size(2).is_ok());
    }

    #[test]
    fn test_set_players_validation() {
        let mut game = Game::new();

        assert!(game.set_players(Mark::X, Mark::X).is_err());
        assert!(game.set_players(Mark::Empty, Mark::O).is_err());
        assert!(game.set_players(Mark::O, Mark::X).is_ok());
        assert_eq!(game.players(), [Mark::O, Mark::X]);
    }

    #[test]
    fn test_set_board_rejects_bad_snapshot() {
        let mut game = Game::new();

        assert!(game.set_board(&snapshot("XO")).is_err());
        assert!(game.set_board(&snapshot("XO.X..O.X")).is_ok());
    }

    #[test]
    fn test_state_reports_a_winner() {
        let mut game = Game::new();
        game.set_board(&snapshot("XXX.O.O.O")).unwrap();

        assert_eq!(
            game.state(),
            GameState {
                active: false,
                winner: Some(Mark::X)
            }
        );
        assert!(game.is_finished());
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        let mut game = Game::new();
        game.set_board(&snapshot("XOXXOOOXX")).unwrap();

        assert_eq!(
            game.state(),
            GameState {
                active: false,
                winner: None
            }
        );
    }

    #[test]
    fn test_state_is_idempotent() {
        let mut game = Game::new();
        game.set_board(&snapshot("XO.X..O.X")).unwrap();

        assert_eq!(game.state(), game.state());
    }

    #[test]
    fn test_make_move_applies_the_recommendation() {
        let mut game = Game::new();
        let mut rng = SessionRng::new(5);

        let chosen = game
            .make_move(&snapshot("........."), Mark::X, &mut rng)
            .unwrap()
            .expect("empty board must yield a move");

        assert_eq!(chosen.mark, Mark::X);
        assert_eq!(game.board().value(chosen.position), Some(Mark::X));
        assert_eq!(mark_count(&game), 1);
    }

    #[test]
    fn test_make_move_blocks_the_opponent() {
        let mut game = Game::new();
        let mut rng = SessionRng::new(5);

        let chosen = game
            .make_move(&snapshot("XX.O....."), Mark::O, &mut rng)
            .unwrap()
            .expect("a blocking move exists");

        assert_eq!(chosen.position, Position::new(0, 2));
        assert_eq!(chosen.mark, Mark::O);
    }

    #[test]
    fn test_make_move_on_finished_board_changes_nothing() {
        let mut game = Game::new();
        let mut rng = SessionRng::new(5);

        let outcome = game.make_move(&snapshot("XXXOO...."), Mark::O, &mut rng);

        assert_eq!(outcome, Ok(None));
        assert_eq!(mark_count(&game), 5);
    }

    #[test]
    fn test_make_move_propagates_snapshot_rejection() {
        let mut game = Game::new();
        let mut rng = SessionRng::new(5);

        assert!(game.make_move(&snapshot("XX"), Mark::X, &mut rng).is_err());
    }

    #[test]
    fn test_make_move_with_unregistered_player_is_empty() {
        let mut game = Game::new();
        let mut rng = SessionRng::new(5);

        let outcome = game.make_move(&snapshot("........."), Mark::Empty, &mut rng);

        assert_eq!(outcome, Ok(None));
        assert_eq!(mark_count(&game), 0);
    }

    #[test]
    fn test_place_validates_turn_preconditions() {
        let mut game = Game::new();

        assert!(game.place(Position::new(0, 0), Mark::Empty).is_err());
        assert!(game.place(Position::new(0, 0), Mark::X).is_ok());
        assert!(game.place(Position::new(0, 0), Mark::O).is_err());

        game.set_board(&snapshot("XXXOO....")).unwrap();
        assert!(game.place(Position::new(2, 2), Mark::O).is_err());
    }

    #[test]
    fn test_clear_restarts_the_session() {
        let mut game = Game::new();
        game.set_board(&snapshot("XXXOO....")).unwrap();
        game.clear();

        assert_eq!(mark_count(&game), 0);
        assert!(game.state().active);
    }

    #[test]
    fn test_alternating_self_play_always_terminates() {
        let mut game = Game::new();
        let mut rng = SessionRng::new(7);
        let [mut current, mut waiting] = game.players();

        while game.play_move(current, &mut rng).is_some() {
            std::mem::swap(&mut current, &mut waiting);
        }

        assert!(game.is_finished());
        assert!(mark_count(&game) > 4);
    }
}
