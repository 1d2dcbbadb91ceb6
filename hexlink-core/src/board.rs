//! Hex board geometry (offset columns) and cell occupancy

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, InvalidReason};

// ============================================================================
// GEOMETRY
// ============================================================================

/// Offset coordinates of a hex cell (0-indexed)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Neighbor offsets (drow, dcol) for cells in even columns.
/// Odd columns sit half a hex lower, so their diagonals point down.
pub const EVEN_COL_DIRECTIONS: [(isize, isize); 6] = [
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // SE
    (1, 0),   // S
    (0, -1),  // SW
    (-1, -1), // NW
];

/// Neighbor offsets (drow, dcol) for cells in odd columns
pub const ODD_COL_DIRECTIONS: [(isize, isize); 6] = [
    (-1, 0), // N
    (0, 1),  // NE
    (1, 1),  // SE
    (1, 0),  // S
    (1, -1), // SW
    (0, -1), // NW
];

/// Board dimensions; the single source of adjacency
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    pub rows: usize,
    pub cols: usize,
}

impl BoardSize {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Whether the cell lies on any of the four edges
    pub fn is_border(&self, cell: Cell) -> bool {
        cell.row == 0 || cell.col == 0 || cell.row + 1 == self.rows || cell.col + 1 == self.cols
    }

    /// Row-major index into a flat cell array
    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.cols, index % self.cols)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (0..self.cell_count()).map(move |i| Cell::new(i / cols, i % cols))
    }

    /// In-bounds neighbors of a cell (at most 6)
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        let size = *self;
        let directions = if cell.col % 2 == 1 {
            &ODD_COL_DIRECTIONS
        } else {
            &EVEN_COL_DIRECTIONS
        };
        directions.iter().filter_map(move |&(dr, dc)| {
            let row = cell.row.checked_add_signed(dr)?;
            let col = cell.col.checked_add_signed(dc)?;
            let next = Cell::new(row, col);
            size.contains(next).then_some(next)
        })
    }
}

// ============================================================================
// OCCUPANCY
// ============================================================================

/// One of the two sides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Connects the top row to the bottom row
    First = 0,
    /// Connects the left column to the right column
    Second = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => f.write_str("First"),
            Player::Second => f.write_str("Second"),
        }
    }
}

/// State of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    #[default]
    Empty,
    Obstacle,
    Owned(Player),
}

// ============================================================================
// BOARD
// ============================================================================

/// Dense R x C occupancy map
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Occupancy>,
}

impl Board {
    /// Empty board without obstacles
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Occupancy::Empty; size.cell_count()],
        }
    }

    /// Board with the given obstacle cells; obstacles must be in bounds
    pub fn with_obstacles(size: BoardSize, obstacles: &[Cell]) -> Result<Self, GameError> {
        let mut board = Self::new(size);
        for &cell in obstacles {
            if !size.contains(cell) {
                return Err(GameError::InvalidConfig(format!(
                    "obstacle {cell} is off the {}x{} board",
                    size.rows, size.cols
                )));
            }
            let idx = size.index(cell);
            board.cells[idx] = Occupancy::Obstacle;
        }
        Ok(board)
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Occupancy of a cell, `None` when out of bounds
    pub fn get(&self, cell: Cell) -> Option<Occupancy> {
        self.size
            .contains(cell)
            .then(|| self.cells[self.size.index(cell)])
    }

    pub fn owner(&self, cell: Cell) -> Option<Player> {
        match self.get(cell) {
            Some(Occupancy::Owned(player)) => Some(player),
            _ => None,
        }
    }

    pub fn is_owned_by(&self, cell: Cell, player: Player) -> bool {
        self.owner(cell) == Some(player)
    }

    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.get(cell) == Some(Occupancy::Obstacle)
    }

    /// Why a placement on `cell` would fail, if it would
    pub fn check_legal(&self, cell: Cell) -> Result<(), InvalidReason> {
        match self.get(cell) {
            None => Err(InvalidReason::OutOfBounds),
            Some(Occupancy::Obstacle) => Err(InvalidReason::Obstacle),
            Some(Occupancy::Owned(player)) => Err(InvalidReason::Occupied(player)),
            Some(Occupancy::Empty) => Ok(()),
        }
    }

    pub fn is_legal(&self, cell: Cell) -> bool {
        self.check_legal(cell).is_ok()
    }

    /// Claim an empty cell for `player`
    pub fn place(&mut self, cell: Cell, player: Player) -> Result<(), GameError> {
        self.check_legal(cell)
            .map_err(|reason| GameError::InvalidMove { cell, reason })?;
        let idx = self.size.index(cell);
        self.cells[idx] = Occupancy::Owned(player);
        Ok(())
    }

    /// Unchecked placement for search; the cell must come from `free_cells`
    pub(crate) fn apply(&mut self, cell: Cell, player: Player) {
        let idx = self.size.index(cell);
        debug_assert_eq!(self.cells[idx], Occupancy::Empty, "search overwrote {cell}");
        self.cells[idx] = Occupancy::Owned(player);
    }

    /// Return an owned cell to empty. Only search backtracking calls this.
    pub(crate) fn undo(&mut self, cell: Cell) {
        let idx = self.size.index(cell);
        debug_assert!(
            matches!(self.cells[idx], Occupancy::Owned(_)),
            "undo of unowned cell {cell}"
        );
        self.cells[idx] = Occupancy::Empty;
    }

    /// Free cells in row-major order
    pub fn free_cells(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, occ)| **occ == Occupancy::Empty)
            .map(|(i, _)| self.size.cell_at(i))
            .collect()
    }

    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|occ| **occ == Occupancy::Empty).count()
    }

    /// No free cell left: the draw condition
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Occupancy::Empty)
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, occ)| **occ == Occupancy::Obstacle)
            .map(|(i, _)| self.size.cell_at(i))
    }

    /// Cells on the edge `player` starts from
    pub fn start_edge(&self, player: Player) -> Vec<Cell> {
        match player {
            Player::First => (0..self.size.cols).map(|c| Cell::new(0, c)).collect(),
            Player::Second => (0..self.size.rows).map(|r| Cell::new(r, 0)).collect(),
        }
    }

    /// Whether `cell` is on the edge `player` must reach
    pub fn is_goal(&self, cell: Cell, player: Player) -> bool {
        match player {
            Player::First => cell.row + 1 == self.size.rows,
            Player::Second => cell.col + 1 == self.size.cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_parity() {
        let size = BoardSize::new(5, 5);

        let mut even: Vec<_> = size.neighbors(Cell::new(2, 2)).collect();
        even.sort();
        assert_eq!(
            even,
            vec![
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(1, 3),
                Cell::new(2, 1),
                Cell::new(2, 3),
                Cell::new(3, 2),
            ]
        );

        let mut odd: Vec<_> = size.neighbors(Cell::new(2, 1)).collect();
        odd.sort();
        assert_eq!(
            odd,
            vec![
                Cell::new(1, 1),
                Cell::new(2, 0),
                Cell::new(2, 2),
                Cell::new(3, 0),
                Cell::new(3, 1),
                Cell::new(3, 2),
            ]
        );
    }

    #[test]
    fn test_neighbors_clipped_at_corner() {
        let size = BoardSize::new(4, 4);
        let corner: Vec<_> = size.neighbors(Cell::new(0, 0)).collect();
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&Cell::new(0, 1)));
        assert!(corner.contains(&Cell::new(1, 0)));
    }

    #[test]
    fn test_neighbors_symmetric() {
        let size = BoardSize::new(6, 7);
        for cell in size.cells() {
            for n in size.neighbors(cell) {
                assert!(
                    size.neighbors(n).any(|back| back == cell),
                    "{n} lists no edge back to {cell}"
                );
            }
        }
    }

    #[test]
    fn test_place_rejects_illegal() {
        let size = BoardSize::new(3, 3);
        let mut board = Board::with_obstacles(size, &[Cell::new(1, 1)]).unwrap();

        assert!(matches!(
            board.place(Cell::new(1, 1), Player::First),
            Err(GameError::InvalidMove { reason: InvalidReason::Obstacle, .. })
        ));
        assert!(matches!(
            board.place(Cell::new(3, 0), Player::First),
            Err(GameError::InvalidMove { reason: InvalidReason::OutOfBounds, .. })
        ));

        board.place(Cell::new(0, 0), Player::Second).unwrap();
        let before = board.clone();
        assert_eq!(
            board.place(Cell::new(0, 0), Player::First),
            Err(GameError::InvalidMove {
                cell: Cell::new(0, 0),
                reason: InvalidReason::Occupied(Player::Second),
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_undo_restores_board() {
        let size = BoardSize::new(4, 4);
        let mut board = Board::with_obstacles(size, &[Cell::new(1, 2)]).unwrap();
        board.place(Cell::new(0, 0), Player::First).unwrap();
        let before = board.clone();

        for cell in before.free_cells() {
            board.apply(cell, Player::Second);
            assert_ne!(board, before);
            board.undo(cell);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_free_cells_row_major() {
        let size = BoardSize::new(2, 3);
        let mut board = Board::with_obstacles(size, &[Cell::new(0, 1)]).unwrap();
        board.place(Cell::new(1, 0), Player::First).unwrap();

        assert_eq!(
            board.free_cells(),
            vec![Cell::new(0, 0), Cell::new(0, 2), Cell::new(1, 1), Cell::new(1, 2)]
        );
        assert_eq!(board.free_count(), 4);
        assert!(!board.is_full());
    }

    #[test]
    fn test_off_board_obstacle_is_config_error() {
        let size = BoardSize::new(3, 3);
        let err = Board::with_obstacles(size, &[Cell::new(1, 1), Cell::new(3, 0)]).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        assert_eq!(err.to_string(), "invalid configuration: obstacle (3, 0) is off the 3x3 board");
    }

    #[test]
    fn test_is_full() {
        let size = BoardSize::new(2, 2);
        let mut board = Board::new(size);
        for (i, cell) in size.cells().enumerate() {
            let player = if i % 2 == 0 { Player::First } else { Player::Second };
            board.place(cell, player).unwrap();
        }
        assert!(board.is_full());
        assert!(board.free_cells().is_empty());
    }
}
