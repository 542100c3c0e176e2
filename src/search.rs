//! A depth-limited minimax agent for Connect 4

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, error, trace};

use crate::{
    board::{Board, Move, Player},
    config::SearchConfig,
    error::{ConfigError, SearchError},
    terminal::is_winning_move,
    tie_break::TieSet,
};

/// The outcome of searching a node
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    /// The chosen column, absent when the node was scored without expanding it
    pub column: Option<usize>,
    pub score: i32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            column: None,
            score,
        }
    }
}

/// The two colours of a search, fixed at the root
///
/// Scores are always from the maximizer's point of view, no matter whose
/// turn it is at a node.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Sides {
    pub maximizer: Player,
    pub minimizer: Player,
}

impl Sides {
    /// Sides for a search that maximizes on behalf of `player`
    pub fn for_player(player: Player) -> Self {
        Self {
            maximizer: player,
            minimizer: player.other(),
        }
    }
}

/// The state of a single node of the game tree
#[derive(Copy, Clone, Debug)]
pub struct Node {
    pub board: Board,
    pub to_move: Player,
    /// Plies below the search root
    pub depth: usize,
    /// The piece placed to reach this node, if any
    pub last_move: Option<Move>,
    pub alpha: i32,
    pub beta: i32,
    pub maximizing: bool,
}

impl Node {
    /// The root of a search for `to_move`, with a fully open window
    pub fn root(
        board: Board,
        to_move: Player,
        last_move: Option<Move>,
        config: &SearchConfig,
    ) -> Self {
        Self {
            board,
            to_move,
            depth: 0,
            last_move,
            alpha: -config.score_bound,
            beta: config.score_bound,
            maximizing: true,
        }
    }

    /// The node reached by `to_move` playing `placed`, with the turn and
    /// the maximizing flag handed over to the opponent
    fn child(&self, board: Board, placed: Move, alpha: i32, beta: i32) -> Self {
        Self {
            board,
            to_move: self.to_move.other(),
            depth: self.depth + 1,
            last_move: Some(placed),
            alpha,
            beta,
            maximizing: !self.maximizing,
        }
    }
}

/// An agent choosing Connect 4 moves by game tree search
///
/// # Notes
/// The agent looks a fixed number of plies ahead with minimax and
/// alpha-beta pruning. Positions are not cached between searches, every
/// call starts from scratch.
///
/// # Position Scoring
/// Scores are from the maximizer's point of view. A win for the maximizer
/// found `d` plies below the root scores `win_score - d`, so sooner wins are
/// preferred. A loss scores `d - win_score`, so later losses are preferred.
/// A full board or a node beyond the depth cutoff scores 0.
///
/// # Tie Breaks
/// Every node, not only the root, picks uniformly at random between the
/// children sharing its best score. The random source is owned by the
/// `Searcher`, so a fixed seed reproduces a fixed game.
pub struct Searcher<R = StdRng> {
    config: SearchConfig,
    rng: R,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher<StdRng> {
    /// Creates a `Searcher` with the default configuration and a seeded random source
    pub fn seeded(seed: u64) -> Self {
        Self {
            config: SearchConfig::default(),
            rng: StdRng::seed_from_u64(seed),
            node_count: 0,
        }
    }

    /// Creates a `Searcher` with the default configuration, seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            config: SearchConfig::default(),
            rng: StdRng::from_entropy(),
            node_count: 0,
        }
    }
}

impl<R: Rng> Searcher<R> {
    /// Creates a `Searcher` from a configuration and a random source
    pub fn new(config: SearchConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            node_count: 0,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Chooses a move for `to_move`
    ///
    /// `last_move` is the most recent placement on `board`, or `None` at the
    /// start of a game. Fails if the game on `board` is already decided or no
    /// column is open.
    pub fn best_move(
        &mut self,
        board: &Board,
        to_move: Player,
        last_move: Option<Move>,
    ) -> Result<SearchResult, SearchError> {
        let start_count = self.node_count;
        let root = Node::root(*board, to_move, last_move, &self.config);
        let result = self.search(&root, Sides::for_player(to_move))?;

        if result.column.is_none() {
            error!(%board, ?last_move, "search root is already decided");
            return Err(SearchError::DecidedPosition);
        }
        debug!(
            player = to_move.name(),
            column = result.column,
            score = result.score,
            nodes = self.node_count - start_count,
            "search finished"
        );
        Ok(result)
    }

    /// Performs game tree search from `node`
    ///
    /// Returns the score of the node (see [Position Scoring]) and, unless
    /// the node was scored without expanding it, the column chosen there.
    ///
    /// [Position Scoring]: #position-scoring
    pub fn search(&mut self, node: &Node, sides: Sides) -> Result<SearchResult, SearchError> {
        self.node_count += 1;

        // the previous ply may already have ended the game
        if let Some(last_move) = node.last_move {
            let depth = node.depth as i32;
            if is_winning_move(&node.board, sides.maximizer, last_move) {
                return Ok(SearchResult::leaf(self.config.win_score - depth));
            }
            if is_winning_move(&node.board, sides.minimizer, last_move) {
                return Ok(SearchResult::leaf(depth - self.config.win_score));
            }
            if node.board.is_full() || node.depth > self.config.depth_cutoff {
                return Ok(SearchResult::leaf(0));
            }
        }

        let columns = node.board.legal_columns();
        if columns.is_empty() {
            error!(board = %node.board, depth = node.depth, "no legal moves to expand");
            return Err(SearchError::NoLegalMoves { depth: node.depth });
        }

        let (mut alpha, mut beta) = (node.alpha, node.beta);
        let mut best_score = if node.maximizing {
            -self.config.score_bound
        } else {
            self.config.score_bound
        };
        let mut best = TieSet::new();

        for column in columns {
            let mut board = node.board;
            let placed = board.apply(column, node.to_move)?;

            let score = self
                .search(&node.child(board, placed, alpha, beta), sides)?
                .score;
            if node.depth == 0 {
                trace!(column, score, "root move scored");
            }

            if node.maximizing {
                if score > best_score {
                    best_score = score;
                    best.reset(column);
                } else if score == best_score {
                    best.push(column);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best.reset(column);
                } else if score == best_score {
                    best.push(column);
                }
                beta = beta.min(best_score);
            }

            // the opponent will never allow this node, skip the remaining siblings
            if self.config.pruning && alpha > beta {
                break;
            }
        }

        Ok(SearchResult {
            column: best.choose(&mut self.rng),
            score: best_score,
        })
    }
}
