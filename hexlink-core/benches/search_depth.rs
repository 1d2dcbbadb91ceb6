//! Alpha-Beta search cost by depth and board size
//!
//! Measures:
//! 1. Time to find a move at depths 1-3
//! 2. Nodes, leaf evaluations and cutoffs per search

use std::time::Instant;

use hexlink_core::{AlphaBetaAI, GameConfig, GameState, Player};

// ============================================================================
// TEST POSITIONS
// ============================================================================

/// Fresh board with the default obstacle rule
fn opening(rows: usize, cols: usize) -> GameState {
    GameState::new(GameConfig::with_size(rows, cols), 7).expect("valid config")
}

/// Board after a handful of AI moves on each side
fn midgame(rows: usize, cols: usize, plies: usize) -> GameState {
    let mut state = opening(rows, cols);
    for _ in 0..plies {
        let player = state.current_turn().player();
        let Some(cell) = state.ai_select_move(1) else {
            break;
        };
        state.place_move(cell, player).expect("legal move");
        if state.is_over() {
            break;
        }
    }
    state
}

// ============================================================================
// BENCHMARK STRUCTURES
// ============================================================================

#[derive(Clone, Debug)]
struct BenchmarkResult {
    position: String,
    depth: u32,
    avg_move_time_ms: f64,
    nodes: u64,
    leaf_evals: u64,
    cutoffs: u64,
}

impl BenchmarkResult {
    fn to_table_row(&self) -> String {
        format!(
            "| {} | {} | {:.2}ms | {} | {} | {} |",
            self.position, self.depth, self.avg_move_time_ms, self.nodes, self.leaf_evals, self.cutoffs
        )
    }
}

// ============================================================================
// BENCHMARK: Time to Find Move
// ============================================================================

fn benchmark_move_time(state: &GameState, position_name: &str) -> Vec<BenchmarkResult> {
    println!("\n=== MOVE TIME BENCHMARK: {} ===", position_name);
    let mut results = Vec::new();
    let player: Player = state.current_turn().player();

    for depth in [1, 2, 3] {
        print!("  AB depth {} ... ", depth);
        let mut ai = AlphaBetaAI::new(depth);
        let mut board = state.board().clone();
        let iterations = 3;
        let mut total_time = 0.0;

        for _ in 0..iterations {
            let start = Instant::now();
            let _ = ai.select_move(&mut board, player);
            total_time += start.elapsed().as_secs_f64() * 1000.0;
        }

        let avg_time = total_time / iterations as f64;
        let stats = ai.last_stats();
        results.push(BenchmarkResult {
            position: position_name.to_string(),
            depth,
            avg_move_time_ms: avg_time,
            nodes: stats.nodes,
            leaf_evals: stats.leaf_evals,
            cutoffs: stats.cutoffs,
        });

        println!("{:.2}ms", avg_time);
    }

    results
}

fn main() {
    println!("HEXLINK search benchmark");

    let mut all = Vec::new();
    all.extend(benchmark_move_time(&opening(6, 6), "6x6 opening"));
    all.extend(benchmark_move_time(&opening(8, 8), "8x8 opening"));
    all.extend(benchmark_move_time(&midgame(8, 8, 12), "8x8 midgame"));

    println!("\n| Position | Depth | Avg time | Nodes | Leaf evals | Cutoffs |");
    println!("|---|---|---|---|---|---|");
    for result in &all {
        println!("{}", result.to_table_row());
    }
}
