//! A depth-limited minimax agent for playing the board game 'Connect 4'
//!
//! The agent searches a fixed number of plies ahead with alpha-beta
//! pruning, scoring wins by how soon they happen, and picks uniformly at
//! random between moves that score equally well.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Player}, search::Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_rows(&[
//!     ".......",
//!     ".......",
//!     ".......",
//!     ".......",
//!     ".......",
//!     ".RRR...",
//! ])?;
//! let mut searcher = Searcher::seeded(7);
//! let result = searcher.best_move(&board, Player::Red, None)?;
//!
//! assert!(matches!(result.column, Some(0) | Some(4)));
//! assert_eq!(result.score, 9);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod board;

pub mod terminal;

pub mod tie_break;

pub mod config;

pub mod search;

pub mod game;

pub mod error;

#[cfg(test)]
mod arbitrary;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles in a row needed to win
pub const WIN_LENGTH: usize = 4;

// a winning run has to fit the board horizontally, vertically and diagonally
const_assert!(WIN_LENGTH <= WIDTH);
const_assert!(WIN_LENGTH <= HEIGHT);
