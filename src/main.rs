use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Instant;

mod config;
mod draw;
mod game;
mod ink;
mod util;

use config::Config;
use game::{RngState, Session, SessionEvent, SessionView};

#[derive(Parser, Debug)]
#[command(name = "sketchparty")]
#[command(version, about = "Drawing-and-guessing party game core")]
struct Cli {
    /// Run a scripted demo session and export the resulting drawing
    #[arg(long, short = 'd', action = ArgAction::SetTrue)]
    demo: bool,

    /// Surface width in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 800)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 600)]
    height: u32,

    /// Seed for prompt and color selection (random if omitted)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Where to save the demo's PNG snapshot (timestamped name if omitted)
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Room code shown in the session view
    #[arg(long, value_name = "CODE", default_value = "local")]
    room: String,

    /// Display name used for guess-log entries
    #[arg(long, value_name = "NAME", default_value = "Guest")]
    nickname: String,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    if cli.demo {
        run_demo(&cli)?;
    } else {
        // No flags: show usage
        println!("sketchparty: drawing-and-guessing party game core");
        println!();
        println!("Usage:");
        println!("  sketchparty --demo           Run a scripted demo session");
        println!("  sketchparty --init-config    Write a documented default config");
        println!("  sketchparty --help           Show all options");
        println!();
        println!("Demo mode:");
        println!("  Draws a few strokes, misses a guess, wins the round, then saves");
        println!("  the next round's drawing as a PNG (see --export).");
        println!();
        println!("Configuration:");
        println!("  ~/.config/sketchparty/config.toml (brush, ink economy, vocabulary)");
    }

    Ok(())
}

/// Drives one scripted session end to end: a few strokes, a missed guess,
/// a winning guess, and a PNG export of the follow-up round.
fn run_demo(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load()?;

    let rng = match cli.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    log::info!("Session seed: {}", rng.seed());

    let view = SessionView::new(cli.room.as_str(), cli.nickname.as_str());
    let mut session = Session::new(cli.width, cli.height, &config, view, rng);

    println!(
        "room '{}', drawing as '{}', prompt: {}",
        session.view().room_code(),
        session.view().local_name(),
        session.prompt().text()
    );

    session.tick(Instant::now());

    // Round one: a rough little house.
    let (w, h) = (cli.width as i32, cli.height as i32);
    scribble(&mut session, (w / 4, h / 2), (w / 2, h / 4));
    scribble(&mut session, (w / 2, h / 4), (3 * w / 4, h / 2));
    scribble(&mut session, (w / 4, h / 2), (3 * w / 4, h / 2));
    println!(
        "ink left: {:.1}, brush: {}",
        session.ink_level(),
        util::color_to_name(session.brush().color)
    );

    // One miss, then the winning guess.
    let prompt = session.prompt().text().to_string();
    session.submit_guess("not even close");
    session.submit_guess(&prompt);

    // The next round gets a quick scribble so the export is not blank.
    session.tick(Instant::now());
    scribble(&mut session, (w / 3, h / 3), (2 * w / 3, 2 * h / 3));

    report_events(&mut session);

    let path = cli
        .export
        .clone()
        .unwrap_or_else(draw::export::default_filename);
    draw::export::save_png(session.canvas().image(), &path)?;
    println!("Saved snapshot to {}", path.display());

    Ok(())
}

/// Feeds a straight pointer drag, sampled in small steps.
fn scribble(session: &mut Session, from: (i32, i32), to: (i32, i32)) {
    session.pointer_down(from.0, from.1);
    let steps = 12;
    for i in 1..=steps {
        let x = from.0 + (to.0 - from.0) * i / steps;
        let y = from.1 + (to.1 - from.1) * i / steps;
        session.pointer_move(x, y);
    }
    session.pointer_up();
}

fn report_events(session: &mut Session) {
    for event in session.drain_events() {
        match event {
            SessionEvent::RoundStarted { round } => println!("round {round} started"),
            SessionEvent::RoundWon { round, prompt } => {
                println!("round {round} won, the word was '{prompt}'")
            }
            SessionEvent::IncorrectGuess { guess } => println!("'{guess}' is not it"),
            SessionEvent::EmptyGuess => println!("empty guess ignored"),
            SessionEvent::InkExhausted => println!("out of ink!"),
            SessionEvent::InkRefilled => println!("ink refilled"),
            SessionEvent::ConfigRejected { setting } => {
                println!("rejected value for {setting}")
            }
        }
    }
}
