//! Error types for game operations

use std::fmt;

use crate::board::{Cell, Player};

/// Why a cell cannot be claimed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    OutOfBounds,
    Obstacle,
    Occupied(Player),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::OutOfBounds => f.write_str("cell is off the board"),
            InvalidReason::Obstacle => f.write_str("cell is an obstacle"),
            InvalidReason::Occupied(player) => write!(f, "cell is owned by {player}"),
        }
    }
}

/// Errors reported by the game engine. None of them mutate the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move at {cell}: {reason}")]
    InvalidMove { cell: Cell, reason: InvalidReason },

    #[error("game is already over")]
    GameAlreadyOver,

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: Player, actual: Player },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
