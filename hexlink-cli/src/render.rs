//! Text rendering of the board
//!
//! Each board row takes two text lines: even columns on the first, odd
//! columns (drawn half a hex lower) on the second.

use hexlink_core::{Board, Cell, GameState, Occupancy, Player, TurnState};

const COL_WIDTH: usize = 4;

fn symbol(occupancy: Occupancy) -> char {
    match occupancy {
        Occupancy::Empty => '.',
        Occupancy::Obstacle => '#',
        Occupancy::Owned(Player::First) => 'X',
        Occupancy::Owned(Player::Second) => 'O',
    }
}

/// Board as text; cells in `highlight` are drawn as `*`
pub fn render_board(board: &Board, highlight: &[Cell]) -> String {
    let mut out = String::new();

    let mut header = " ".repeat(COL_WIDTH);
    for c in 0..board.cols() {
        header.push_str(&format!("{:<width$}", c, width = COL_WIDTH));
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for r in 0..board.rows() {
        for parity in [0, 1] {
            let mut line = if parity == 0 {
                format!("{:>2}  ", r)
            } else {
                " ".repeat(COL_WIDTH)
            };
            for c in 0..board.cols() {
                let cell = Cell::new(r, c);
                let ch = if c % 2 != parity {
                    ' '
                } else if highlight.contains(&cell) {
                    '*'
                } else {
                    board.get(cell).map(symbol).unwrap_or(' ')
                };
                line.push(ch);
                line.push_str(&" ".repeat(COL_WIDTH - 1));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}

fn player_label(player: Player) -> &'static str {
    match player {
        Player::First => "First (X, top-bottom)",
        Player::Second => "Second (O, left-right)",
    }
}

/// One-line status: whose turn, bonus countdown, or the result
pub fn render_status(state: &GameState) -> String {
    if state.is_over() {
        return match state.winner() {
            Some(player) => format!("Game over! {} wins!", player_label(player)),
            None => "Game over! It's a draw!".to_string(),
        };
    }
    match state.current_turn() {
        TurnState::Bonus(player) => format!("Bonus move: {}", player_label(player)),
        TurnState::Turn(player) => {
            let until = state.turns().moves_until_bonus().unwrap_or_default();
            format!("Turn: {} | moves until bonus: {}", player_label(player), until)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlink_core::BoardSize;

    #[test]
    fn test_render_offsets_odd_columns() {
        let mut board = Board::with_obstacles(BoardSize::new(2, 2), &[Cell::new(1, 1)]).unwrap();
        board.place(Cell::new(0, 0), Player::First).unwrap();
        board.place(Cell::new(0, 1), Player::Second).unwrap();

        let text = render_board(&board, &[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["    0   1", " 0  X", "        O", " 1  .", "        #"]
        );
    }

    #[test]
    fn test_render_highlight() {
        let mut board = Board::new(BoardSize::new(2, 1));
        board.place(Cell::new(0, 0), Player::First).unwrap();
        let text = render_board(&board, &[Cell::new(0, 0)]);
        assert!(text.lines().nth(1).unwrap().ends_with('*'));
    }
}
