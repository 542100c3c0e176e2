//! Grid storage, move application and legal move enumeration

use std::fmt;

use crate::{
    error::{InvalidMove, PositionError},
    HEIGHT, WIDTH,
};

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// The opposing side
    pub fn other(self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// The cell value this player's pieces occupy
    pub fn cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'R' | 'X' => Some(Cell::Red),
            'Y' | 'O' => Some(Cell::Yellow),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// The coordinate of a placed piece, row 0 being the top of the board
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

/// A Connect 4 grid
///
/// Cells are stored top-to-bottom, left-to-right. Pieces obey gravity: a
/// cell is only occupied if every cell below it in the same column is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: [[Cell; WIDTH]; HEIGHT]) -> Self {
        Self { cells }
    }

    /// Reads a board from its rows, top row first
    ///
    /// `.` is an empty cell, `R`/`X` a red piece and `Y`/`O` a yellow piece.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, PositionError> {
        let shape_error = PositionError::Shape {
            expected_rows: HEIGHT,
            expected_columns: WIDTH,
        };
        if rows.len() != HEIGHT {
            return Err(shape_error);
        }

        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != WIDTH {
                return Err(shape_error);
            }
            for (column, c) in line.chars().enumerate() {
                board.cells[row][column] =
                    Cell::from_char(c).ok_or(PositionError::UnknownCell(c))?;
            }
        }

        // enforce gravity: nothing may sit on top of an empty cell
        for row in 0..HEIGHT - 1 {
            for column in 0..WIDTH {
                if !board.cells[row][column].is_empty() && board.cells[row + 1][column].is_empty()
                {
                    return Err(PositionError::Floating { row, column });
                }
            }
        }
        Ok(board)
    }

    /// Drops a piece for `player` into `column`
    ///
    /// Returns the coordinate the piece landed on.
    pub fn apply(&mut self, column: usize, player: Player) -> Result<Move, InvalidMove> {
        if column >= WIDTH {
            return Err(InvalidMove::OutOfRange { column });
        }
        if !self.playable(column) {
            return Err(InvalidMove::ColumnFull { column });
        }

        let row = (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
            .ok_or(InvalidMove::ColumnFull { column })?;
        self.cells[row][column] = player.cell();
        Ok(Move { row, column })
    }

    /// Whether a piece can still be dropped into `column`
    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Bounds-checked cell lookup
    ///
    /// Returns `None` for coordinates off the board, so that line scans
    /// stop at the edges instead of wrapping around.
    pub fn at(&self, row: isize, column: isize) -> Option<Cell> {
        if row < 0 || column < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|cells| cells.get(column as usize))
            .copied()
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// The columns a piece can be dropped into, in ascending order
    pub fn legal_columns(&self) -> LegalColumns {
        let mut columns = LegalColumns::new();
        for column in 0..WIDTH {
            if self.playable(column) {
                columns.push(column);
            }
        }
        columns
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let line: String = cells.iter().map(|cell| cell.to_char()).collect();
            if row + 1 < HEIGHT {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// An ascending list of playable columns that lives on the stack
#[derive(Copy, Clone, Debug)]
pub struct LegalColumns {
    size: usize,
    next: usize,
    columns: [usize; WIDTH],
}

impl LegalColumns {
    fn new() -> Self {
        Self {
            size: 0,
            next: 0,
            columns: [0; WIDTH],
        }
    }

    fn push(&mut self, column: usize) {
        self.columns[self.size] = column;
        self.size += 1;
    }

    /// Number of columns not yet yielded
    pub fn len(&self) -> usize {
        self.size - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, column: usize) -> bool {
        self.columns[self.next..self.size].contains(&column)
    }
}

impl Iterator for LegalColumns {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.size {
            return None;
        }
        self.next += 1;
        Some(self.columns[self.next - 1])
    }
}
