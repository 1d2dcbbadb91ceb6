//! Random placement of blocking cells away from the board edges

use rand::seq::index;
use rand::Rng;

use crate::board::{BoardSize, Cell};

/// Default cap on obstacles per board
pub const MAX_OBSTACLES: usize = 8;

/// Default share of the board turned into obstacles
pub const OBSTACLE_DENSITY: f64 = 0.05;

/// `min(max, floor(cells * density))`
pub fn obstacle_count(size: BoardSize, max: usize, density: f64) -> usize {
    let by_density = (size.cell_count() as f64 * density).floor() as usize;
    by_density.min(max)
}

/// Sample distinct interior cells without replacement, sorted row-major.
/// Never returns more cells than the interior holds.
pub fn generate_obstacles<R: Rng + ?Sized>(size: BoardSize, count: usize, rng: &mut R) -> Vec<Cell> {
    let candidates: Vec<Cell> = size.cells().filter(|&c| !size.is_border(c)).collect();
    let count = count.min(candidates.len());

    let mut chosen: Vec<Cell> = index::sample(rng, candidates.len(), count)
        .into_iter()
        .map(|i| candidates[i])
        .collect();
    chosen.sort();
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_obstacle_count_formula() {
        assert_eq!(obstacle_count(BoardSize::new(8, 8), MAX_OBSTACLES, OBSTACLE_DENSITY), 3);
        assert_eq!(obstacle_count(BoardSize::new(3, 3), MAX_OBSTACLES, OBSTACLE_DENSITY), 0);
        assert_eq!(obstacle_count(BoardSize::new(20, 20), MAX_OBSTACLES, OBSTACLE_DENSITY), 8);
    }

    #[test]
    fn test_never_on_border() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for rows in 3..10 {
            for cols in 3..10 {
                let size = BoardSize::new(rows, cols);
                let obstacles = generate_obstacles(size, 8, &mut rng);
                for cell in &obstacles {
                    assert!(size.contains(*cell));
                    assert!(!size.is_border(*cell), "{cell} on border of {rows}x{cols}");
                }
            }
        }
    }

    #[test]
    fn test_distinct_and_capped_by_interior() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        // 4x4 has a 2x2 interior
        let obstacles = generate_obstacles(BoardSize::new(4, 4), 8, &mut rng);
        assert_eq!(
            obstacles,
            vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(2, 1), Cell::new(2, 2)]
        );

        let obstacles = generate_obstacles(BoardSize::new(10, 10), 8, &mut rng);
        let mut deduped = obstacles.clone();
        deduped.dedup();
        assert_eq!(obstacles.len(), 8);
        assert_eq!(deduped, obstacles);
    }

    #[test]
    fn test_no_interior() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        assert!(generate_obstacles(BoardSize::new(2, 5), 3, &mut rng).is_empty());
    }

    #[test]
    fn test_deterministic_for_seed() {
        let size = BoardSize::new(9, 9);
        let a = generate_obstacles(size, 4, &mut ChaCha8Rng::seed_from_u64(17));
        let b = generate_obstacles(size, 4, &mut ChaCha8Rng::seed_from_u64(17));
        assert_eq!(a, b);
    }
}
