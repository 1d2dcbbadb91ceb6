//! CPU-based Alpha-Beta AI

use crate::board::{Board, Cell, Player};
use crate::eval::evaluate;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default search depth
pub const DEFAULT_DEPTH: u32 = 2;

const NEG_INF: i32 = i32::MIN;
const POS_INF: i32 = i32::MAX;

// ============================================================================
// ALPHA-BETA AI
// ============================================================================

/// Counters from the most recent search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior nodes expanded
    pub nodes: u64,
    /// Static evaluations at the cutoff depth
    pub leaf_evals: u64,
    /// Alpha or beta cutoffs taken
    pub cutoffs: u64,
}

/// Alpha-Beta AI player
#[derive(Clone, Debug)]
pub struct AlphaBetaAI {
    pub depth: u32,
    stats: SearchStats,
}

impl Default for AlphaBetaAI {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl AlphaBetaAI {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            stats: SearchStats::default(),
        }
    }

    /// Best cell for `player`. The board is borrowed mutably for the
    /// simulated moves and is identical to its input when this returns.
    pub fn select_move(&mut self, board: &mut Board, player: Player) -> Option<Cell> {
        let (mv, stats) = run_search(board, self.depth, player);
        self.stats = stats;
        mv
    }

    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }
}

/// One-shot search without keeping statistics
pub fn select_move(board: &mut Board, depth: u32, ai_player: Player) -> Option<Cell> {
    run_search(board, depth, ai_player).0
}

fn run_search(board: &mut Board, depth: u32, ai_player: Player) -> (Option<Cell>, SearchStats) {
    if depth == 0 {
        return (None, SearchStats::default());
    }

    let mut search = Search {
        board,
        ai: ai_player,
        stats: SearchStats::default(),
    };
    let (score, mv) = search.max_value(NEG_INF, POS_INF, depth);

    tracing::debug!(
        player = %ai_player,
        depth,
        score,
        nodes = search.stats.nodes,
        leaf_evals = search.stats.leaf_evals,
        cutoffs = search.stats.cutoffs,
        "search finished with {:?}",
        mv
    );

    (mv, search.stats)
}

// ============================================================================
// MINIMAX WITH ALPHA-BETA
// ============================================================================

/// Both layers score the board by the AI's own path distance: the AI tries
/// to shorten it, the modeled opponent tries to lengthen it.
struct Search<'a> {
    board: &'a mut Board,
    ai: Player,
    stats: SearchStats,
}

impl Search<'_> {
    fn leaf(&mut self) -> (i32, Option<Cell>) {
        self.stats.leaf_evals += 1;
        (evaluate(self.board, self.ai), None)
    }

    fn max_value(&mut self, mut alpha: i32, beta: i32, depth: u32) -> (i32, Option<Cell>) {
        if depth == 0 {
            return self.leaf();
        }
        let moves = self.board.free_cells();
        if moves.is_empty() {
            return self.leaf();
        }
        self.stats.nodes += 1;

        let mut best = NEG_INF;
        let mut best_move = None;
        for cell in moves {
            self.board.apply(cell, self.ai);
            let (score, _) = self.min_value(alpha, beta, depth - 1);
            self.board.undo(cell);

            if score > best {
                best = score;
                best_move = Some(cell);
            }
            if best >= beta {
                self.stats.cutoffs += 1;
                return (best, best_move);
            }
            alpha = alpha.max(best);
        }
        (best, best_move)
    }

    fn min_value(&mut self, alpha: i32, mut beta: i32, depth: u32) -> (i32, Option<Cell>) {
        if depth == 0 {
            return self.leaf();
        }
        let moves = self.board.free_cells();
        if moves.is_empty() {
            return self.leaf();
        }
        self.stats.nodes += 1;

        let opponent = self.ai.opponent();
        let mut best = POS_INF;
        let mut best_move = None;
        for cell in moves {
            self.board.apply(cell, opponent);
            let (score, _) = self.max_value(alpha, beta, depth - 1);
            self.board.undo(cell);

            if score < best {
                best = score;
                best_move = Some(cell);
            }
            if best <= alpha {
                self.stats.cutoffs += 1;
                return (best, best_move);
            }
            beta = beta.min(best);
        }
        (best, best_move)
    }
}

// ============================================================================
// TESTS
// ============================================================================
