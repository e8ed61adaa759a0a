use anyhow::Context;
use clap::Parser;
use sapper_core::{Difficulty, Game, RandomBoardGenerator};
use std::io;

mod command;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Skip the menu: 1/2/3 or beginner/intermediate/expert
    #[arg(short, long)]
    difficulty: Option<String>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let difficulty = match args.difficulty.as_deref() {
        Some(choice) => Difficulty::from_choice(choice),
        None => session::choose_difficulty(&mut input, &mut output)?,
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("difficulty: {:?}, seed: {}", difficulty, seed);

    let game = Game::generate(difficulty.config(), RandomBoardGenerator::new(seed))
        .context("Could not set up the board")?;
    log::debug!("board: {:?}", game.config());

    let mut session = session::Session::new(game, input, output);
    let ending = session.run().context("Lost connection to the terminal")?;
    log::debug!(
        "session ended: {:?}, status {:?}",
        ending,
        session.game().status()
    );
    Ok(())
}
