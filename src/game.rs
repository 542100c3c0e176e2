//! The authoritative game record kept by whoever drives the engine

use rand::Rng;

use crate::{
    board::{Board, Move, Player},
    error::{InvalidMove, PositionError, SearchError},
    search::Searcher,
    terminal::is_winning_move,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    last_move: Option<Move>,
    state: GameState,
    /// The columns played so far, one digit per move
    pub history: String,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game with red to move first
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Red,
            last_move: None,
            state: GameState::Playing,
            history: String::new(),
        }
    }

    /// Replays a game from a string of 0-indexed column digits
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, PositionError> {
        let mut game = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    game.play(column as usize)?;
                }
                None => return Err(PositionError::UnknownColumn(column_char)),
            }
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Drops a piece for the player to move, then checks for a result
    pub fn play(&mut self, column: usize) -> Result<GameState, InvalidMove> {
        if self.state != GameState::Playing {
            return Err(InvalidMove::GameOver);
        }
        let player = self.to_move;
        let placed = self.board.apply(column, player)?;

        self.state = if is_winning_move(&self.board, player, placed) {
            GameState::Won(player)
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.last_move = Some(placed);
        self.to_move = player.other();
        self.history.push_str(&column.to_string());

        Ok(self.state)
    }

    /// Asks `searcher` for a move for the player to move
    ///
    /// The suggested column is checked against the board before it is
    /// returned.
    pub fn suggest<R: Rng>(&self, searcher: &mut Searcher<R>) -> Result<usize, SearchError> {
        if self.state != GameState::Playing {
            return Err(SearchError::DecidedPosition);
        }
        let result = searcher.best_move(&self.board, self.to_move, self.last_move)?;
        match result.column {
            Some(column) if self.board.playable(column) => Ok(column),
            Some(column) => Err(SearchError::IllegalExpansion(InvalidMove::ColumnFull {
                column,
            })),
            None => Err(SearchError::DecidedPosition),
        }
    }
}
