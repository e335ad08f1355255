//! Random legal playouts
//!
//! Plays a seeded sequence of random legal plies through `chess_rules`, alternating
//! colors from light, and prints the final board. Logging goes through `tracing`;
//! set `RUST_LOG=debug` (or `trace`) to see the engine's own decisions.

use anyhow::{Context, Result};
use chess_rules::{Color, Game, Move, MoveOutcome};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chess-rules-cli", about = "Play random legal chess moves")]
struct Args {
    /// Maximum number of plies to play
    #[arg(short, long, default_value_t = 40)]
    plies: usize,

    /// RNG seed; the same seed replays the same game
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Shuffle the starting position before playing
    #[arg(long)]
    scramble: bool,

    /// Print the board every N plies (0 = only at the end)
    #[arg(long, default_value_t = 0)]
    show_every: usize,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut game = Game::new();

    if args.scramble {
        game.scramble(&mut rng);
    }

    info!(
        "[PLAYOUT] Starting playout: seed={} plies={} scramble={}",
        args.seed, args.plies, args.scramble
    );

    let mut mover = Color::Light;
    let mut played = 0;

    while played < args.plies {
        let moves = game
            .legal_moves(mover)
            .with_context(|| format!("listing legal moves for {mover}"))?;

        let Some(&mv) = moves.choose(&mut rng) else {
            report_end(&game, mover)?;
            break;
        };

        play(&mut game, mv)?;
        played += 1;
        info!("[PLAYOUT] Ply {played}: {mover} {}", describe(&mv));

        if args.show_every > 0 && played % args.show_every == 0 {
            println!("{}\n", game.board());
        }

        mover = mover.opponent();
    }

    println!("{}", game.board());
    info!("[PLAYOUT] Finished after {played} plies");
    Ok(())
}

fn play(game: &mut Game, mv: Move) -> Result<()> {
    match game.attempt_move(mv.piece, mv.from, mv.to, mv.promotion)? {
        MoveOutcome::Success(_) => Ok(()),
        MoveOutcome::Illegal(reason) => {
            anyhow::bail!("engine rejected its own legal move: {reason}")
        }
    }
}

fn report_end(game: &Game, mover: Color) -> Result<()> {
    if game.is_in_check(mover)? {
        info!("[PLAYOUT] Checkmate: {mover} has no legal moves");
    } else {
        info!("[PLAYOUT] Stalemate: {mover} has no legal moves");
    }
    Ok(())
}

fn describe(mv: &Move) -> String {
    let mut text = format!("{} {} -> {}", mv.piece.symbol(), mv.from, mv.to);
    if let Some(captured) = mv.captured {
        text.push_str(&format!(" x{}", captured.symbol()));
    }
    if let Some(promotion) = mv.promotion {
        text.push_str(&format!(" ={}", promotion.symbol()));
    }
    if mv.special.is_castle() {
        text.push_str(&format!(" ({:?})", mv.special));
    }
    text
}
