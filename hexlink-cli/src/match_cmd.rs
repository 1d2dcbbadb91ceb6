//! Match command - AI vs AI series
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_statistics()
//! - Level 4: formatting utilities

use anyhow::{bail, Result};
use clap::Args;
use rayon::prelude::*;
use serde::Serialize;

use hexlink_core::{GameConfig, GameResult, GameState, Player};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Search depth for the First player
    #[arg(long, default_value = "2")]
    pub first_depth: u32,

    /// Search depth for the Second player
    #[arg(long, default_value = "2")]
    pub second_depth: u32,

    /// Board rows (overrides config)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Board columns (overrides config)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Play games one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug, Serialize)]
struct GameRecord {
    game_number: usize,
    seed: u64,
    result: GameResult,
    placements: usize,
    bonus_moves: usize,
}

/// Aggregated match results
#[derive(Clone, Debug, Serialize)]
struct MatchResults {
    total_games: usize,
    first_wins: usize,
    second_wins: usize,
    draws: usize,
    unfinished: usize,
    avg_placements: f32,
    games: Vec<GameRecord>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// This function reads like a table of contents:
/// 1. Build the game config
/// 2. Play the match (multiple games)
/// 3. Report results
pub fn run(args: MatchArgs, mut config: GameConfig, seed: Option<u64>) -> Result<()> {
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    config.validate()?;
    if args.first_depth == 0 || args.second_depth == 0 {
        bail!("search depth must be at least 1");
    }

    tracing::info!(
        "Starting match: {} games on {}x{} (depth {} vs {})",
        args.games,
        config.rows,
        config.cols,
        args.first_depth,
        args.second_depth
    );

    let base_seed = seed.unwrap_or_else(rand::random);
    let results = play_match(&config, &args, base_seed)?;

    report_results(&results, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games in the match
fn play_match(config: &GameConfig, args: &MatchArgs, base_seed: u64) -> Result<MatchResults> {
    let depths = (args.first_depth, args.second_depth);
    let play = |i: usize| play_single_game(config, depths, i + 1, base_seed.wrapping_add(i as u64));

    let games: Vec<GameRecord> = if args.sequential {
        (0..args.games).map(play).collect::<Result<_>>()?
    } else {
        (0..args.games).into_par_iter().map(play).collect::<Result<_>>()?
    };

    for record in &games {
        tracing::info!(
            "Game {}: {:?} ({} placements, {} bonus)",
            record.game_number,
            record.result,
            record.placements,
            record.bonus_moves
        );
    }

    Ok(compute_match_statistics(games))
}

/// Report match results
fn report_results(results: &MatchResults, args: &MatchArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print_text_results(results);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one AI vs AI game to completion
fn play_single_game(
    config: &GameConfig,
    (first_depth, second_depth): (u32, u32),
    game_number: usize,
    seed: u64,
) -> Result<GameRecord> {
    let mut state = GameState::new(config.clone(), seed)?;
    let mut bonus_moves = 0;

    while !state.is_over() {
        let turn = state.current_turn();
        let player = turn.player();
        let depth = match player {
            Player::First => first_depth,
            Player::Second => second_depth,
        };
        let Some(cell) = state.ai_select_move(depth) else {
            break;
        };
        if turn.is_bonus() {
            bonus_moves += 1;
        }
        state.place_move(cell, player)?;
    }

    Ok(GameRecord {
        game_number,
        seed,
        result: state.result(),
        placements: state.history().len(),
        bonus_moves,
    })
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let count = |want: GameResult| games.iter().filter(|g| g.result == want).count();
    let first_wins = count(GameResult::Won(Player::First));
    let second_wins = count(GameResult::Won(Player::Second));
    let draws = count(GameResult::Drawn);
    let unfinished = count(GameResult::Ongoing);

    let total_placements: usize = games.iter().map(|g| g.placements).sum();
    let avg_placements = if games.is_empty() {
        0.0
    } else {
        total_placements as f32 / games.len() as f32
    };

    MatchResults {
        total_games: games.len(),
        first_wins,
        second_wins,
        draws,
        unfinished,
        avg_placements,
        games,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn percent(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.total_games;

    println!("\n=== Match Results ===");
    println!("Total games:  {}", total);
    println!("First wins:   {} ({:.1}%)", results.first_wins, percent(results.first_wins, total));
    println!("Second wins:  {} ({:.1}%)", results.second_wins, percent(results.second_wins, total));
    println!("Draws:        {} ({:.1}%)", results.draws, percent(results.draws, total));
    if results.unfinished > 0 {
        println!("Unfinished:   {}", results.unfinished);
    }
    println!("Avg placements: {:.1}", results.avg_placements);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {} (seed {}): {:?} in {} placements",
            game.game_number, game.seed, game.result, game.placements
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
