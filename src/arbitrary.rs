use quickcheck::{Arbitrary, Gen};

use crate::{
    board::{Board, Cell, Move, Player},
    terminal::is_winning_move,
    HEIGHT, WIDTH,
};

/// Any assignment of cells, gravity not enforced
#[derive(Clone, Debug)]
pub struct ArbitraryGrid {
    pub board: Board,
}

impl Arbitrary for ArbitraryGrid {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut cells = [[Cell::Empty; WIDTH]; HEIGHT];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                // bias towards occupied cells so that runs are common
                *cell = *g
                    .choose(&[Cell::Empty, Cell::Red, Cell::Red, Cell::Yellow, Cell::Yellow])
                    .unwrap_or(&Cell::Empty);
            }
        }
        Self {
            board: Board::from_cells(cells),
        }
    }
}

/// A position reached by legal play in which nobody has won yet and at
/// least one column is still open
#[derive(Clone, Debug)]
pub struct ArbitraryPosition {
    pub board: Board,
    pub to_move: Player,
    pub last_move: Option<Move>,
}

impl Arbitrary for ArbitraryPosition {
    fn arbitrary(g: &mut Gen) -> Self {
        let plies = usize::arbitrary(g) % 30;
        let mut board = Board::new();
        let mut to_move = Player::Red;
        let mut last_move = None;

        for _ in 0..plies {
            let columns: Vec<usize> = board.legal_columns().collect();
            let column = match g.choose(&columns) {
                Some(&column) => column,
                None => break,
            };
            let mut next = board;
            let Ok(placed) = next.apply(column, to_move) else {
                break;
            };
            // stop short of a decided game
            if is_winning_move(&next, to_move, placed) || next.is_full() {
                break;
            }
            board = next;
            last_move = Some(placed);
            to_move = to_move.other();
        }

        Self {
            board,
            to_move,
            last_move,
        }
    }
}
