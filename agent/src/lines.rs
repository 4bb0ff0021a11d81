use crate::types::Position;

/// Every line that decides the game for an N x N board: N rows, N columns,
/// the main diagonal and the anti-diagonal, in that order. Membership depends
/// only on the size, so the result can be cached between board mutations.
pub fn winning_lines(size: usize) -> Vec<Vec<Position>> {
    let mut lines = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        lines.push((0..size).map(|col| Position::new(row, col)).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| Position::new(row, col)).collect());
    }
    lines.push((0..size).map(|index| Position::new(index, index)).collect());
    lines.push(
        (0..size)
            .map(|index| Position::new(size - 1 - index, index))
            .collect(),
    );

    lines
}
