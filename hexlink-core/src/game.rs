//! Game state: placement, win/draw detection and turn flow

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ai;
use crate::board::{Board, Cell, Player};
use crate::config::GameConfig;
use crate::connectivity::{connection_path, has_connection};
use crate::error::GameError;
use crate::obstacles::generate_obstacles;
use crate::turn::{TurnController, TurnState};

// ============================================================================
// CORE TYPES
// ============================================================================

/// What a successful placement led to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Continuing,
    Won(Player),
    Drawn,
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Won(Player),
    Drawn,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// A single game, owned by the host loop. All mutation goes through
/// [`GameState::place_move`] and [`GameState::reset`].
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    turns: TurnController,
    result: GameResult,
    history: Vec<(Cell, Player)>,
    rng: ChaCha8Rng,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game with obstacles and bonus threshold drawn from `seed`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(config: GameConfig, mut rng: ChaCha8Rng) -> Result<Self, GameError> {
        config.validate()?;
        let (board, turns) = setup(&config, &mut rng)?;
        Ok(Self {
            config,
            board,
            turns,
            result: GameResult::Ongoing,
            history: Vec::new(),
            rng,
        })
    }

    /// Resume from a prepared board and turn controller. A board that already
    /// holds a chain or has no free cell starts out finished.
    pub fn from_parts(board: Board, turns: TurnController, seed: u64) -> Self {
        let config = GameConfig::with_size(board.rows(), board.cols());
        let result = settled_result(&board);
        Self {
            config,
            board,
            turns,
            result,
            history: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Set which side the AI plays (`None` for two humans)
    pub fn with_ai_player(mut self, ai_player: Option<Player>) -> Self {
        self.config.ai_player = ai_player;
        self
    }

    /// Discard the current game and start a fresh one on a `rows` x `cols`
    /// board, redrawing obstacles and bonus threshold
    pub fn reset(&mut self, rows: usize, cols: usize) -> Result<(), GameError> {
        let config = GameConfig {
            rows,
            cols,
            ..self.config.clone()
        };
        config.validate()?;
        let (board, turns) = setup(&config, &mut self.rng)?;

        tracing::info!(
            rows,
            cols,
            obstacles = board.obstacles().count(),
            bonus_threshold = turns.bonus_threshold(),
            "game reset"
        );

        self.config = config;
        self.board = board;
        self.turns = turns;
        self.result = GameResult::Ongoing;
        self.history.clear();
        Ok(())
    }

    /// Reset keeping the current board dimensions
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.reset(self.config.rows, self.config.cols)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turns(&self) -> &TurnController {
        &self.turns
    }

    pub fn current_turn(&self) -> TurnState {
        self.turns.state()
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    /// Winner of a finished game; `None` while ongoing or on a draw
    pub fn winner(&self) -> Option<Player> {
        match self.result {
            GameResult::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Regular moves made (bonus moves excluded)
    pub fn move_count(&self) -> u32 {
        self.turns.move_count()
    }

    /// Every placement so far, in order
    pub fn history(&self) -> &[(Cell, Player)] {
        &self.history
    }

    /// Cells that may be claimed, row-major
    pub fn valid_moves(&self) -> Vec<Cell> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.free_cells()
    }

    /// The winner's connecting chain, for highlighting
    pub fn winning_path(&self) -> Option<Vec<Cell>> {
        connection_path(&self.board, self.winner()?)
    }

    /// Whether the configured AI side is entitled to move now
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.config.ai_player == Some(self.turns.current_player())
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Claim `cell` for `player`. Rejected placements leave the game untouched.
    pub fn place_move(&mut self, cell: Cell, player: Player) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        let expected = self.turns.current_player();
        if player != expected {
            return Err(GameError::NotYourTurn {
                expected,
                actual: player,
            });
        }

        self.board.place(cell, player)?;
        self.history.push((cell, player));
        tracing::debug!(%cell, %player, bonus = self.turns.state().is_bonus(), "placed");

        // Only the mover can have just completed a chain
        if has_connection(&self.board, player) {
            self.result = GameResult::Won(player);
            return Ok(MoveOutcome::Won(player));
        }
        if self.board.is_full() {
            self.result = GameResult::Drawn;
            return Ok(MoveOutcome::Drawn);
        }

        self.turns.advance(&mut self.rng);
        Ok(MoveOutcome::Continuing)
    }

    /// Search for the side to move. The host feeds the result to
    /// [`GameState::place_move`]. `None` when the game is over or no cell is free.
    pub fn ai_select_move(&mut self, depth: u32) -> Option<Cell> {
        if self.is_over() {
            return None;
        }
        let player = self.turns.current_player();
        ai::select_move(&mut self.board, depth, player)
    }
}

fn settled_result(board: &Board) -> GameResult {
    if let Some(player) = [Player::First, Player::Second]
        .into_iter()
        .find(|&p| has_connection(board, p))
    {
        GameResult::Won(player)
    } else if board.is_full() {
        GameResult::Drawn
    } else {
        GameResult::Ongoing
    }
}

/// Fresh board and turn controller for `config`
fn setup(config: &GameConfig, rng: &mut ChaCha8Rng) -> Result<(Board, TurnController), GameError> {
    let size = config.board_size();
    let obstacles = generate_obstacles(size, config.obstacle_count(), rng);
    let board = Board::with_obstacles(size, &obstacles)?;
    let turns = TurnController::new(rng);
    Ok((board, turns))
}

// ============================================================================
// TESTS
// ============================================================================
