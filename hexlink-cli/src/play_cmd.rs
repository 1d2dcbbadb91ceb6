//! Play command - interactive game in the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: run_session() - the host loop
//! - Level 3: play_ai_turn(), handle_command()
//! - Level 4: command parsing, prompts

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Args, ValueEnum};

use hexlink_core::{Cell, GameConfig, GameState, MoveOutcome, Player};

use crate::render::{render_board, render_status};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

/// Which side the computer plays
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AiSide {
    First,
    Second,
    None,
}

impl AiSide {
    fn player(self) -> Option<Player> {
        match self {
            AiSide::First => Some(Player::First),
            AiSide::Second => Some(Player::Second),
            AiSide::None => None,
        }
    }
}

#[derive(Args)]
pub struct PlayArgs {
    /// Board rows (overrides config)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Board columns (overrides config)
    #[arg(long)]
    pub cols: Option<usize>,

    /// AI search depth (overrides config)
    #[arg(long)]
    pub depth: Option<u32>,

    /// Side played by the AI (overrides config)
    #[arg(long, value_enum)]
    pub ai: Option<AiSide>,
}

/// A line of user input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Place(Cell),
    Restart,
    Help,
    Quit,
}

const HELP: &str = "Commands: <row> <col> to place, r to restart, h for help, q to quit.
First (X) connects top to bottom, Second (O) connects left to right.
Every few regular moves the mover gets a bonus move. Obstacles (#) block both sides.";

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, mut config: GameConfig, seed: Option<u64>) -> Result<()> {
    apply_overrides(&mut config, &args);
    config.validate()?;
    if config.ai_player.is_some() && config.ai_depth == 0 {
        anyhow::bail!("AI depth must be at least 1");
    }

    let rng = crate::create_rng(seed);
    let state = GameState::with_rng(config, rng)?;

    tracing::info!(
        "Starting {}x{} game, AI: {:?}",
        state.board().rows(),
        state.board().cols(),
        state.config().ai_player
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(state, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn apply_overrides(config: &mut GameConfig, args: &PlayArgs) {
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(depth) = args.depth {
        config.ai_depth = depth;
    }
    if let Some(side) = args.ai {
        config.ai_player = side.player();
    }
}

// ============================================================================
// LEVEL 2 - HOST LOOP
// ============================================================================

/// Drive a game from `input` until quit or end of input; returns the final state
pub fn run_session<R: BufRead, W: Write>(mut state: GameState, mut input: R, out: &mut W) -> Result<GameState> {
    writeln!(out, "{HELP}")?;
    show(&state, out)?;

    loop {
        if state.is_ai_turn() && play_ai_turn(&mut state, out)? {
            show(&state, out)?;
            continue;
        }

        prompt(&state, out)?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => handle_command(&mut state, command, out)?,
            Err(message) => writeln!(out, "{message}")?,
        }
    }

    Ok(state)
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Let the AI move; false when it has nothing to play
fn play_ai_turn<W: Write>(state: &mut GameState, out: &mut W) -> Result<bool> {
    let player = state.current_turn().player();
    let depth = state.config().ai_depth;

    let Some(cell) = state.ai_select_move(depth) else {
        writeln!(out, "AI ({player}) has no legal move")?;
        return Ok(false);
    };
    state.place_move(cell, player)?;
    writeln!(out, "AI ({player}) plays {cell}")?;
    Ok(true)
}

fn handle_command<W: Write>(state: &mut GameState, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Place(cell) => {
            let player = state.current_turn().player();
            match state.place_move(cell, player) {
                Ok(MoveOutcome::Continuing) => show(state, out)?,
                Ok(MoveOutcome::Won(_)) | Ok(MoveOutcome::Drawn) => {
                    show(state, out)?;
                    writeln!(out, "Press r to restart or q to quit")?;
                }
                Err(err) => writeln!(out, "Rejected: {err}")?,
            }
        }
        Command::Restart => {
            state.restart()?;
            writeln!(out, "New game")?;
            show(state, out)?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "restart" => return Ok(Command::Restart),
        "h" | "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Ok(Command::Place(Cell::new(row, col))),
            _ => Err(format!("Unrecognized coordinates: {line}")),
        },
        _ => Err(format!("Unrecognized command: {line} (h for help)")),
    }
}

fn show<W: Write>(state: &GameState, out: &mut W) -> Result<()> {
    let highlight = state.winning_path().unwrap_or_default();
    write!(out, "{}", render_board(state.board(), &highlight))?;
    writeln!(out, "{}", render_status(state))?;
    Ok(())
}

fn prompt<W: Write>(state: &GameState, out: &mut W) -> Result<()> {
    if state.is_over() {
        write!(out, "[r/q] > ")?;
    } else {
        write!(out, "{} > ", state.current_turn().player())?;
    }
    out.flush()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
