//! Win detection anchored on the most recent move

use crate::{
    board::{Board, Move, Player},
    WIN_LENGTH,
};

/// Line directions as (row, column) steps: down, right, down-right, down-left
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Checks whether `player` has a winning line passing through `last_move`
///
/// A win can only have been completed by the piece that was just placed,
/// so only the windows of `WIN_LENGTH` cells that contain `last_move` are
/// checked, rather than the whole board.
pub fn is_winning_move(board: &Board, player: Player, last_move: Move) -> bool {
    let cell = player.cell();
    let (row, column) = (last_move.row as isize, last_move.column as isize);

    for &(d_row, d_column) in DIRECTIONS.iter() {
        // slide a window along the direction so that the move sits at each
        // position within it in turn
        for offset in 0..WIN_LENGTH as isize {
            let start = (row - d_row * offset, column - d_column * offset);
            let complete = (0..WIN_LENGTH as isize).all(|step| {
                // off-board lookups are None and never match a player
                board.at(start.0 + d_row * step, start.1 + d_column * step) == Some(cell)
            });
            if complete {
                return true;
            }
        }
    }
    false
}
