use serde::{Deserialize, Serialize};

use crate::{IllegalPlacement, Number};

pub const BOARD_SIZE: usize = 5;

/// One player's 5x5 grid.
///
/// Cells are addressed by `(row, col)`, both starting at 0 in the top left corner.
/// A cell never changes once a number has been placed on it.
///
/// This is a plain owned array, so cloning it (e.g. to simulate a move) never
/// shares storage with the original.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: [[Option<Number>; BOARD_SIZE]; BOARD_SIZE],
}

/// Which of the twelve scoring lines of a board is meant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Row(usize),
    Column(usize),
    /// From the top left to the bottom right corner.
    Diagonal,
    /// From the top right to the bottom left corner.
    AntiDiagonal,
}

/// The five cells of a row, column or diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub cells: [Option<Number>; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a board from its cells, e.g. after deserializing them.
    pub fn from_rows(rows: [[Option<Number>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[[Option<Number>; BOARD_SIZE]; BOARD_SIZE] {
        &self.rows
    }

    /// Returns the number on the given cell, or `None` if it is empty or out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Number> {
        self.rows.get(row)?.get(col).copied().flatten()
    }

    pub fn is_in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Puts a number on an empty cell.
    ///
    /// The board is left untouched if this returns an error.
    pub fn place(&mut self, row: usize, col: usize, number: Number) -> Result<(), IllegalPlacement> {
        if !Self::is_in_bounds(row, col) {
            return Err(IllegalPlacement::OutOfRange { row, col });
        }
        let cell = &mut self.rows[row][col];
        if let Some(existing) = *cell {
            return Err(IllegalPlacement::CellOccupied { row, col, existing });
        }
        *cell = Some(number);
        Ok(())
    }

    /// The coordinates of all empty cells, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_none())
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn num_occupied(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.num_occupied() == BOARD_SIZE * BOARD_SIZE
    }

    /// The cells of one scoring line, or `None` for a row or column past the edge.
    pub fn line(&self, kind: LineKind) -> Option<Line> {
        match kind {
            LineKind::Row(i) | LineKind::Column(i) if i >= BOARD_SIZE => return None,
            _ => {}
        }
        let mut cells = [None; BOARD_SIZE];
        for (k, cell) in cells.iter_mut().enumerate() {
            *cell = match kind {
                LineKind::Row(i) => self.rows[i][k],
                LineKind::Column(j) => self.rows[k][j],
                LineKind::Diagonal => self.rows[k][k],
                LineKind::AntiDiagonal => self.rows[k][BOARD_SIZE - 1 - k],
            };
        }
        Some(Line { kind, cells })
    }

    /// All twelve scoring lines: rows top to bottom, columns left to right,
    /// then the diagonal and the anti-diagonal.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        LineKind::all().filter_map(|kind| self.line(kind))
    }
}

impl LineKind {
    pub fn all() -> impl Iterator<Item = LineKind> {
        (0..BOARD_SIZE)
            .map(LineKind::Row)
            .chain((0..BOARD_SIZE).map(LineKind::Column))
            .chain([LineKind::Diagonal, LineKind::AntiDiagonal])
    }

    /// Diagonals score a little more than rows and columns.
    pub fn is_diagonal(self) -> bool {
        matches!(self, LineKind::Diagonal | LineKind::AntiDiagonal)
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Row(i) => write!(f, "Row {}", i + 1),
            LineKind::Column(j) => write!(f, "Column {}", j + 1),
            LineKind::Diagonal => write!(f, "Diagonal"),
            LineKind::AntiDiagonal => write!(f, "Anti-diagonal"),
        }
    }
}

impl Line {
    /// The five numbers of the line, or `None` if any cell is still empty.
    pub fn values(&self) -> Option<[Number; BOARD_SIZE]> {
        let mut values = [0; BOARD_SIZE];
        for (value, cell) in values.iter_mut().zip(self.cells) {
            *value = cell?;
        }
        Some(values)
    }
}
