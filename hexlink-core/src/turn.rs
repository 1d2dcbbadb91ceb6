//! Turn order with randomized bonus moves

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Player;
use crate::error::GameError;

/// Range the bonus threshold is drawn from
pub const BONUS_THRESHOLD_RANGE: RangeInclusive<u32> = 1..=5;

/// Who may move next, and whether that move is a bonus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    Turn(Player),
    Bonus(Player),
}

impl TurnState {
    pub fn player(self) -> Player {
        match self {
            TurnState::Turn(p) | TurnState::Bonus(p) => p,
        }
    }

    pub fn is_bonus(self) -> bool {
        matches!(self, TurnState::Bonus(_))
    }
}

/// Tracks the turn state machine.
///
/// Every `bonus_threshold`-th regular move earns the mover an extra move.
/// The threshold is redrawn only when that extra move is consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnController {
    state: TurnState,
    move_count: u32,
    bonus_threshold: u32,
}

impl TurnController {
    /// Fresh controller: `First` to move, threshold drawn from `rng`
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            state: TurnState::Turn(Player::First),
            move_count: 0,
            bonus_threshold: draw_threshold(rng),
        }
    }

    /// Fresh controller with a fixed first threshold
    pub fn with_threshold(bonus_threshold: u32) -> Result<Self, GameError> {
        if !BONUS_THRESHOLD_RANGE.contains(&bonus_threshold) {
            return Err(GameError::InvalidConfig(format!(
                "bonus threshold {bonus_threshold} outside {}..={}",
                BONUS_THRESHOLD_RANGE.start(),
                BONUS_THRESHOLD_RANGE.end()
            )));
        }
        Ok(Self {
            state: TurnState::Turn(Player::First),
            move_count: 0,
            bonus_threshold,
        })
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn current_player(&self) -> Player {
        self.state.player()
    }

    /// Regular (non-bonus) moves made so far
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn bonus_threshold(&self) -> u32 {
        self.bonus_threshold
    }

    /// Regular moves left until the next bonus is granted, counting the
    /// upcoming one. `None` while a bonus move is pending.
    pub fn moves_until_bonus(&self) -> Option<u32> {
        if self.state.is_bonus() {
            return None;
        }
        Some(self.bonus_threshold - self.move_count % self.bonus_threshold)
    }

    /// Advance after a placement that did not end the game
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TurnState {
        self.state = match self.state {
            TurnState::Bonus(player) => {
                self.bonus_threshold = draw_threshold(rng);
                TurnState::Turn(player.opponent())
            }
            TurnState::Turn(player) => {
                self.move_count += 1;
                if self.move_count % self.bonus_threshold == 0 {
                    TurnState::Bonus(player)
                } else {
                    TurnState::Turn(player.opponent())
                }
            }
        };
        self.state
    }
}

fn draw_threshold<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(BONUS_THRESHOLD_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_initial_state() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let turns = TurnController::new(&mut rng);
        assert_eq!(turns.state(), TurnState::Turn(Player::First));
        assert_eq!(turns.move_count(), 0);
        assert!(BONUS_THRESHOLD_RANGE.contains(&turns.bonus_threshold()));
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        assert!(TurnController::with_threshold(0).is_err());
        assert!(TurnController::with_threshold(6).is_err());
        assert!(TurnController::with_threshold(5).is_ok());
    }

    #[test]
    fn test_bonus_after_threshold_moves() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut turns = TurnController::with_threshold(3).unwrap();

        assert_eq!(turns.advance(&mut rng), TurnState::Turn(Player::Second));
        assert_eq!(turns.advance(&mut rng), TurnState::Turn(Player::First));
        // Third regular move, made by First, earns First a bonus
        assert_eq!(turns.advance(&mut rng), TurnState::Bonus(Player::First));
        assert_eq!(turns.move_count(), 3);
        // Granting the bonus keeps the threshold
        assert_eq!(turns.bonus_threshold(), 3);

        assert_eq!(turns.advance(&mut rng), TurnState::Turn(Player::Second));
        assert_eq!(turns.move_count(), 3);
        assert!(BONUS_THRESHOLD_RANGE.contains(&turns.bonus_threshold()));
    }

    #[test]
    fn test_threshold_one_bonus_every_move() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut turns = TurnController::with_threshold(1).unwrap();
        assert_eq!(turns.advance(&mut rng), TurnState::Bonus(Player::First));
        assert_eq!(turns.moves_until_bonus(), None);
        assert_eq!(turns.advance(&mut rng), TurnState::Turn(Player::Second));
    }

    #[test]
    fn test_threshold_redrawn_only_on_consumed_bonus() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut turns = TurnController::with_threshold(2).unwrap();
        let mut reference = ChaCha8Rng::seed_from_u64(4);

        turns.advance(&mut rng);
        turns.advance(&mut rng);
        assert!(turns.state().is_bonus());
        // No draws yet: both streams still aligned
        assert_eq!(rng.gen::<u64>(), reference.gen::<u64>());

        turns.advance(&mut rng);
        assert!(!turns.state().is_bonus());
    }

    #[test]
    fn test_moves_until_bonus() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut turns = TurnController::with_threshold(4).unwrap();
        assert_eq!(turns.moves_until_bonus(), Some(4));
        turns.advance(&mut rng);
        assert_eq!(turns.moves_until_bonus(), Some(3));
        turns.advance(&mut rng);
        turns.advance(&mut rng);
        assert_eq!(turns.moves_until_bonus(), Some(1));
        turns.advance(&mut rng);
        assert_eq!(turns.moves_until_bonus(), None);
    }
}
