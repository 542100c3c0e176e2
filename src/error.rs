use crate::WIDTH;

/// A move the board cannot accept. Callers are expected to recover from
/// this, e.g. by asking for another column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("column {column} out of range, columns must be between 0 and {}", WIDTH - 1)]
    OutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when reading a fixed position.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("expected {expected_rows} rows of {expected_columns} cells")]
    Shape {
        expected_rows: usize,
        expected_columns: usize,
    },

    #[error("could not parse '{0}' as a cell")]
    UnknownCell(char),

    #[error("could not parse '{0}' as a column")]
    UnknownColumn(char),

    #[error("piece at row {row}, column {column} has nothing below it")]
    Floating { row: usize, column: usize },

    #[error("invalid move in history: {0}")]
    InvalidMove(#[from] InvalidMove),
}

/// Broken invariants inside the search. These are contract breaches by
/// the caller and are not meant to be retried.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves left to expand at depth {depth}")]
    NoLegalMoves { depth: usize },

    #[error("the position is already decided, there is no move to suggest")]
    DecidedPosition,

    #[error("search expanded an illegal move: {0}")]
    IllegalExpansion(#[from] InvalidMove),
}

/// Errors that can occur when validating a search configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
