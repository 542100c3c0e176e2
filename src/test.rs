#[cfg(test)]
pub mod test {
    use anyhow::{anyhow, Result};
    use quickcheck::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        arbitrary::ArbitraryPosition,
        board::{Board, Move, Player},
        config::SearchConfig,
        error::SearchError,
        search::{Node, SearchResult, Searcher, Sides},
        WIDTH,
    };

    /// Searches `board` from the root for `to_move`
    fn root_search(
        searcher: &mut Searcher,
        board: &Board,
        to_move: Player,
        last_move: Option<Move>,
    ) -> Result<SearchResult, SearchError> {
        let root = Node::root(*board, to_move, last_move, searcher.config());
        searcher.search(&root, Sides::for_player(to_move))
    }

    #[test]
    pub fn immediate_win() -> Result<()> {
        //
        //
        //
        //
        //
        // .RRR...
        let board = Board::from_rows(&[
            ".......", ".......", ".......", ".......", ".......", ".RRR...",
        ])?;

        let mut seen = [false; WIDTH];
        for seed in 0..40 {
            let mut searcher = Searcher::seeded(seed);
            let result = root_search(&mut searcher, &board, Player::Red, None)?;
            // the win lands one ply below the root
            assert_eq!(result.score, 9);
            let column = result.column.ok_or(anyhow!("no column at the root"))?;
            assert!(column == 0 || column == 4, "chose column {}", column);
            seen[column] = true;
        }
        // both winning columns are in the tie set
        assert!(seen[0] && seen[4]);
        Ok(())
    }

    #[test]
    pub fn immediate_loss() -> Result<()> {
        // yellow wins on either side whichever one red blocks
        let board = Board::from_rows(&[
            ".......", ".......", ".......", ".......", ".......", ".YYY...",
        ])?;
        let mut searcher = Searcher::seeded(5);
        let result = root_search(&mut searcher, &board, Player::Red, None)?;
        assert_eq!(result.score, 2 - 10);
        assert!(result.column.is_some());
        Ok(())
    }

    #[test]
    pub fn empty_board() -> Result<()> {
        let board = Board::new();
        let mut counts = [0usize; WIDTH];

        for seed in 0..210 {
            let mut searcher = Searcher::seeded(seed);
            let result = root_search(&mut searcher, &board, Player::Red, None)?;
            // nobody can connect four within the depth cutoff
            assert_eq!(result.score, 0);
            let column = result.column.ok_or(anyhow!("no column at the root"))?;
            counts[column] += 1;
        }

        println!("Empty board column counts: {:?}", counts);
        for (column, &count) in counts.iter().enumerate() {
            assert!(
                (10..60).contains(&count),
                "column {} chosen {} times out of 210",
                column,
                count
            );
        }
        Ok(())
    }

    #[test]
    pub fn last_move_fills_board() -> Result<()> {
        // R Y R Y R Y R
        // R Y R Y R Y R
        // Y R Y R Y R Y
        // Y R Y R Y R Y
        // R Y R Y R Y R
        // R Y R Y R Y R
        let board = Board::from_rows(&[
            ".YRYRYR", "RYRYRYR", "YRYRYRY", "YRYRYRY", "RYRYRYR", "RYRYRYR",
        ])?;
        assert_eq!(board.legal_columns().collect::<Vec<_>>(), vec![0]);

        let mut searcher = Searcher::seeded(3);
        let result = root_search(&mut searcher, &board, Player::Yellow, None)?;
        assert_eq!(
            result,
            SearchResult {
                column: Some(0),
                score: 0
            }
        );

        let last_move = Some(Move { row: 1, column: 0 });
        let result = searcher.best_move(&board, Player::Yellow, last_move)?;
        assert_eq!(result.column, Some(0));
        assert_eq!(result.score, 0);
        Ok(())
    }

    #[test]
    pub fn full_board_is_an_invariant_violation() -> Result<()> {
        let board = Board::from_rows(&[
            "RYRYRYR", "RYRYRYR", "YRYRYRY", "YRYRYRY", "RYRYRYR", "RYRYRYR",
        ])?;
        let mut searcher = Searcher::seeded(0);
        assert_eq!(
            root_search(&mut searcher, &board, Player::Red, None),
            Err(SearchError::NoLegalMoves { depth: 0 })
        );
        Ok(())
    }

    #[test]
    pub fn decided_root_has_no_move() -> Result<()> {
        let board = Board::from_rows(&[
            ".......", ".......", ".......", ".......", "YYY....", "RRRR...",
        ])?;
        let last_move = Some(Move { row: 5, column: 3 });
        let mut searcher = Searcher::seeded(0);

        let result = root_search(&mut searcher, &board, Player::Yellow, last_move)?;
        assert_eq!(
            result,
            SearchResult {
                column: None,
                score: -10
            }
        );
        assert_eq!(
            searcher.best_move(&board, Player::Yellow, last_move),
            Err(SearchError::DecidedPosition)
        );
        Ok(())
    }

    #[test]
    pub fn fixed_seed_reproduces_a_game() -> Result<()> {
        let play_out = |seed| -> Result<String> {
            let mut game = crate::game::Game::new();
            let mut searcher = Searcher::seeded(seed);
            for _ in 0..6 {
                let column = game.suggest(&mut searcher)?;
                game.play(column)?;
            }
            Ok(game.history)
        };
        assert_eq!(play_out(17)?, play_out(17)?);
        Ok(())
    }

    #[test]
    pub fn pruning_visits_fewer_nodes() -> Result<()> {
        let game = crate::game::Game::from_moves("3322")?;
        let mut pruned = Searcher::seeded(1);
        let mut exhaustive =
            Searcher::new(SearchConfig::default().exhaustive(), StdRng::seed_from_u64(1))?;

        let a = pruned.best_move(game.board(), game.to_move(), game.last_move())?;
        let b = exhaustive.best_move(game.board(), game.to_move(), game.last_move())?;
        assert_eq!(a.score, b.score);
        println!(
            "Nodes searched, pruned: {}, exhaustive: {}",
            pruned.node_count, exhaustive.node_count
        );
        assert!(pruned.node_count < exhaustive.node_count);
        Ok(())
    }

    quickcheck! {
        fn legal_columns_are_playable(position: ArbitraryPosition) -> bool {
            position.board.legal_columns().all(|column| {
                let mut board = position.board;
                board.apply(column, position.to_move).is_ok()
            })
        }

        fn search_returns_legal_column_within_bounds(position: ArbitraryPosition) -> bool {
            let mut searcher = Searcher::seeded(0);
            match searcher.best_move(&position.board, position.to_move, position.last_move) {
                Ok(result) => {
                    let legal = position.board.legal_columns();
                    result.column.map_or(false, |column| legal.contains(column))
                        && (-10..=10).contains(&result.score)
                }
                Err(_) => false,
            }
        }

        fn pruned_and_exhaustive_agree(position: ArbitraryPosition) -> bool {
            let mut pruned = Searcher::seeded(0);
            let exhaustive_config = SearchConfig::default().exhaustive();
            let Ok(mut exhaustive) = Searcher::new(exhaustive_config, StdRng::seed_from_u64(0)) else {
                return false;
            };

            let pruned_result =
                pruned.best_move(&position.board, position.to_move, position.last_move);
            let exhaustive_result =
                exhaustive.best_move(&position.board, position.to_move, position.last_move);
            match (pruned_result, exhaustive_result) {
                (Ok(a), Ok(b)) => a.score == b.score,
                _ => false,
            }
        }

        fn pruned_column_has_the_exhaustive_best_score(position: ArbitraryPosition) -> bool {
            let mut pruned = Searcher::seeded(0);
            let exhaustive_config = SearchConfig::default().exhaustive();
            let Ok(mut exhaustive) = Searcher::new(exhaustive_config, StdRng::seed_from_u64(0)) else {
                return false;
            };
            let Ok(result) = pruned.best_move(&position.board, position.to_move, position.last_move) else {
                return false;
            };
            let Some(column) = result.column else {
                return false;
            };

            // score the chosen move on its own with a fully open window
            let mut board = position.board;
            let Ok(placed) = board.apply(column, position.to_move) else {
                return false;
            };
            let bound = exhaustive.config().score_bound;
            let child = Node {
                board,
                to_move: position.to_move.other(),
                depth: 1,
                last_move: Some(placed),
                alpha: -bound,
                beta: bound,
                maximizing: false,
            };
            match exhaustive.search(&child, Sides::for_player(position.to_move)) {
                Ok(child_result) => child_result.score == result.score,
                Err(_) => false,
            }
        }
    }
}
