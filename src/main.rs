//! Rubik's Cube Player
//!
//! Parses a move sequence, scrambles a 3x3x3 cube with its inverse and lets
//! the user step through the sequence one quarter turn at a time, printing
//! the cube as an unfolded net of stickers.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use cubeplay::facelets::format_net;
use cubeplay::grid::format_grid;
use cubeplay::notation::{self, format_moves};
use cubeplay::MoveSequencePlayer;

/// Steps through Rubik's Cube move sequences.
#[derive(Parser)]
#[command(name = "cubeplay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the quarter turns of a sequence and of its inverse.
    Parse {
        /// Move sequence, e.g. "R U R' U'".
        sequence: String,
    },
    /// Print the cube scrambled by the inverse of a sequence.
    Scramble {
        /// Move sequence, e.g. "R U R' U'".
        sequence: String,
        /// Also print the cell id layout.
        #[arg(long)]
        cells: bool,
    },
    /// Scramble, then step through the sequence interactively.
    Play {
        /// Move sequence, e.g. "R U R' U'".
        sequence: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Parse { sequence } => run_parse(&sequence),
        Command::Scramble { sequence, cells } => run_scramble(&sequence, cells),
        Command::Play { sequence } => run_play(&sequence),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Prints the parsed quarter turns and their inverse.
fn run_parse(sequence: &str) -> Result<()> {
    let moves = notation::parse(sequence).context("invalid move sequence")?;
    println!("{} quarter turns", moves.len());
    println!("forward: {}", format_moves(&moves));
    println!("inverse: {}", format_moves(&notation::inverse(&moves)));
    Ok(())
}

/// Prints the scrambled starting position for a sequence.
fn run_scramble(sequence: &str, cells: bool) -> Result<()> {
    let player = scrambled_player(sequence)?;
    print!("{}", format_net(player.grid()));
    if cells {
        println!();
        print!("{}", format_grid(player.grid()));
    }
    Ok(())
}

/// Interactive stepping: `2`/`n` forward, `1`/`p` backward.
fn run_play(sequence: &str) -> Result<()> {
    let mut player = scrambled_player(sequence)?;
    println!("Controls: 2/n next, 1/p previous, g <step> seek, s show, q quit");
    show(&player);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let mut words = line.split_whitespace();
        match words.next() {
            Some("2" | "n") => match player.step_forward() {
                Ok(mv) => println!("applied {mv}"),
                Err(e) => println!("{e}"),
            },
            Some("1" | "p") => match player.step_backward() {
                Ok(mv) => println!("applied {mv}"),
                Err(e) => println!("{e}"),
            },
            Some("g") => match words.next().map(str::parse::<usize>) {
                Some(Ok(target)) => {
                    let steps = player.seek(target);
                    println!("took {steps} steps");
                }
                _ => {
                    println!("usage: g <step>");
                    continue;
                }
            },
            Some("s") => {}
            Some("q") => break,
            Some(other) => {
                println!("unknown command {other:?}");
                continue;
            }
            None => continue,
        }
        show(&player);
        io::stdout().flush().context("failed to flush stdout")?;
    }

    Ok(())
}

fn scrambled_player(sequence: &str) -> Result<MoveSequencePlayer> {
    let mut player = MoveSequencePlayer::new(Vec::new());
    player
        .load_and_apply_all(sequence)
        .context("invalid move sequence")?;
    Ok(player)
}

fn show(player: &MoveSequencePlayer) {
    let next = player
        .next_move()
        .map_or_else(|| "-".to_owned(), |mv| mv.to_string());
    println!(
        "step {}/{} (next: {next}){}",
        player.cursor(),
        player.len(),
        if player.grid().is_solved() { " solved" } else { "" }
    );
    print!("{}", format_net(player.grid()));
}
