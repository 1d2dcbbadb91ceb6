//! HEXLINK Core - Game engine and AI
//!
//! This crate provides the core game logic for HEXLINK, a two-player
//! connection game on a hex grid:
//! - Board geometry (offset columns) and cell occupancy
//! - Connectivity check for win detection
//! - Shortest-path evaluation for the AI
//! - CPU-based alpha-beta AI
//! - Turn order with randomized bonus moves
//! - Obstacle placement and game configuration

pub mod board;
pub mod error;
pub mod connectivity;
pub mod eval;
pub mod ai;
pub mod turn;
pub mod obstacles;
pub mod config;
pub mod game;

// Re-exports for convenient access
pub use board::{Board, BoardSize, Cell, Occupancy, Player};
pub use error::{GameError, InvalidReason};
pub use connectivity::{connection_path, has_connection};
pub use eval::{evaluate, shortest_distance, NO_PATH};
pub use ai::{AlphaBetaAI, SearchStats};
pub use turn::{TurnController, TurnState, BONUS_THRESHOLD_RANGE};
pub use obstacles::generate_obstacles;
pub use config::{GameConfig, MAX_BOARD_DIM};
pub use game::{GameResult, GameState, MoveOutcome};
