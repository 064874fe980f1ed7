use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use timebomb_core::{ConfigForm, EndChoice, GameConfig, Session, Tick};
use web_time::Instant;

use input::{Command, parse_choice};
use render::render;

mod input;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Timed Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Side of the square board
    #[arg(long, default_value_t = ConfigForm::default().table_size)]
    size: u32,

    /// How many mines to place
    #[arg(long, default_value_t = ConfigForm::default().bombs)]
    bombs: u32,

    /// Seconds before the game is lost
    #[arg(long, default_value_t = ConfigForm::default().time_limit)]
    time_limit: u32,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Why a game loop returned.
enum Flow {
    Finished,
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let form = ConfigForm {
        table_size: args.size,
        bombs: args.bombs,
        time_limit: args.time_limit,
    };
    let config = GameConfig::try_from(form).context("Cannot start the game")?;

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed: {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    let mut session = Session::new(config, &mut rng);
    loop {
        if let Flow::Quit = play(&mut session, &mut lines, &mut out)? {
            break;
        }

        render(&session.snapshot(), &mut out)?;
        if let Some(outcome) = session.outcome() {
            writeln!(out, "{outcome}")?;
        }

        let Some(choice) = prompt_choice(&mut lines, &mut out)? else {
            break;
        };
        match session.resolve(choice, &mut rng) {
            Some(next) => session = next,
            None => break,
        }
    }

    log::debug!("Bye");
    Ok(())
}

/// Runs one game until it ends or the player quits. The countdown advances by the whole seconds that passed
/// between commands.
fn play(
    session: &mut Session,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
) -> Result<Flow> {
    let mut last_tick = Instant::now();

    while !session.is_finished() {
        render(&session.snapshot(), out)?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(Flow::Quit);
        };

        let elapsed = last_tick.elapsed().as_secs();
        last_tick += Duration::from_secs(elapsed);
        for _ in 0..elapsed {
            if let Tick::Expired = session.decrement_time() {
                log::info!("Time ran out before the move was made");
                return Ok(Flow::Finished);
            }
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Reveal(coords) => match session.reveal(coords) {
                Ok(outcome) if !outcome.has_update() => writeln!(out, "Nothing to reveal there")?,
                Ok(outcome) if outcome.is_terminal() => {
                    log::info!("Reveal {:?} ended the game: {:?}", coords, outcome)
                }
                Ok(outcome) => log::debug!("Reveal {:?}: {:?}", coords, outcome),
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Flag(coords) => match session.toggle_flag(coords) {
                Ok(outcome) if !outcome.has_update() => writeln!(out, "Cannot flag a revealed cell")?,
                Ok(outcome) => log::debug!("Flag {:?}: {:?}", coords, outcome),
                Err(err) => writeln!(out, "{err}")?,
            },
        }
    }

    Ok(Flow::Finished)
}

fn prompt_choice(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
) -> Result<Option<EndChoice>> {
    loop {
        write!(out, "retry / close? ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(None);
        };
        match parse_choice(&line) {
            Ok(choice) => return Ok(Some(choice)),
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}
