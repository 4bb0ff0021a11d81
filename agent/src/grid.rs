use crate::types::{Mark, Position};

/// Board contents supplied by a caller, either as a flat run of N*N cells or
/// already chunked into N rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Snapshot {
    Flat(Vec<Mark>),
    Rows(Vec<Vec<Mark>>),
}

/// Square matrix of marks, owned by exactly one game session. Cells only
/// transition from empty to a mark; the whole matrix is replaced or cleared,
/// never partially rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Mark>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Mark::Empty; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<Mark>] {
        &self.cells
    }

    /// Replaces the whole board with the snapshot. The snapshot is validated
    /// in full before anything is stored, so a rejected snapshot leaves the
    /// previous contents untouched.
    pub fn set(&mut self, snapshot: &Snapshot) -> Result<(), String> {
        self.cells = self.chunk_snapshot(snapshot)?;
        Ok(())
    }

    fn chunk_snapshot(&self, snapshot: &Snapshot) -> Result<Vec<Vec<Mark>>, String> {
        match snapshot {
            Snapshot::Flat(values) => {
                if values.is_empty() {
                    return Err("Snapshot is empty".to_string());
                }
                let expected = self.size * self.size;
                if values.len() != expected {
                    return Err(format!(
                        "Snapshot has {} cells, expected {}",
                        values.len(),
                        expected
                    ));
                }
                Ok(values
                    .chunks(self.size)
                    .map(|chunk| chunk.to_vec())
                    .collect())
            }
            Snapshot::Rows(rows) => {
                if rows.is_empty() {
                    return Err("Snapshot is empty".to_string());
                }
                if rows.len() != self.size {
                    return Err(format!(
                        "Snapshot has {} rows, expected {}",
                        rows.len(),
                        self.size
                    ));
                }
                for (index, row) in rows.iter().enumerate() {
                    if row.len() != self.size {
                        return Err(format!(
                            "Row {} has {} cells, expected {}",
                            index,
                            row.len(),
                            self.size
                        ));
                    }
                }
                Ok(rows.clone())
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells = vec![vec![Mark::Empty; self.size]; self.size];
    }

    /// `None` only when the position is out of bounds; an empty cell reads as
    /// `Some(Mark::Empty)`.
    pub fn value(&self, position: Position) -> Option<Mark> {
        if position.row >= self.size || position.col >= self.size {
            return None;
        }
        Some(self.cells[position.row][position.col])
    }

    pub fn set_value(&mut self, position: Position, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        if position.row >= self.size || position.col >= self.size {
            return Err(format!(
                "Position ({}, {}) is out of bounds",
                position.row, position.col
            ));
        }
        if self.cells[position.row][position.col] != Mark::Empty {
            return Err(format!(
                "Cell ({}, {}) is already marked",
                position.row, position.col
            ));
        }
        self.cells[position.row][position.col] = mark;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }
}

/// Reads a flat textual board such as `"XX..O...."`. Any symbol outside the
/// two marks and the empty-cell symbols rejects the whole snapshot.
pub fn parse_snapshot(text: &str) -> Result<Snapshot, String> {
    let mut values = Vec::with_capacity(text.len());
    for symbol in text.chars() {
        values.push(Mark::from_char(symbol)?);
    }
    if values.is_empty() {
        return Err("Snapshot is empty".to_string());
    }
    Ok(Snapshot::Flat(values))
}
