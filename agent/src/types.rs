use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    /// Parses one board symbol. `.`, `_` and space all read as an empty cell.
    pub fn from_char(symbol: char) -> Result<Mark, String> {
        match symbol {
            'X' | 'x' => Ok(Mark::X),
            'O' | 'o' => Ok(Mark::O),
            '.' | '_' | ' ' => Ok(Mark::Empty),
            other => Err(format!("Unknown mark symbol '{}'", other)),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A move picked by the agent, already applied to the board it was asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecommendedMove {
    pub position: Position,
    pub mark: Mark,
}

/// Derived session status. Computed fresh on every request, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub active: bool,
    pub winner: Option<Mark>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_of_each_mark() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_from_char_parses_known_symbols() {
        assert_eq!(Mark::from_char('X').unwrap(), Mark::X);
        assert_eq!(Mark::from_char('o').unwrap(), Mark::O);
        assert_eq!(Mark::from_char('.').unwrap(), Mark::Empty);
        assert_eq!(Mark::from_char('_').unwrap(), Mark::Empty);
        assert_eq!(Mark::from_char(' ').unwrap(), Mark::Empty);
    }

    #[test]
    fn test_from_char_rejects_unknown_symbol() {
        assert!(Mark::from_char('Z').is_err());
        assert!(Mark::from_char('1').is_err());
    }

    #[test]
    fn test_mark_display_round_trips() {
        for mark in [Mark::Empty, Mark::X, Mark::O] {
            let symbol = mark.to_string().chars().next().unwrap();
            assert_eq!(Mark::from_char(symbol).unwrap(), mark);
        }
    }
}
