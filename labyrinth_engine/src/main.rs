#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Lost in the Celestial Labyrinth **
//! Puzzle-gated exploration game

use labyrinth_engine::data_paths::data_path;
use labyrinth_engine::{ConsoleOutput, GameConfig, GameEnd, InputManager, LABYRINTH_VERSION, load_world, run_repl};

use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: labyrinth engine v{LABYRINTH_VERSION}");
    let config = GameConfig::load(&data_path("config.toml"))
        .and_then(GameConfig::with_env_overrides)
        .context("while loading game config")?;

    info!("Loading labyrinth world...");
    let mut world = load_world(&config).context("while loading LabyrinthWorld")?;
    info!("LabyrinthWorld loaded successfully.");

    let mut input = InputManager::new(config.history);
    let mut output = ConsoleOutput;
    info!("Starting the game!");
    let end = run_repl(&mut world, &mut input, &mut output)?;
    match end {
        GameEnd::Quit => info!("player left the labyrinth after {} turns", world.turn_count),
        GameEnd::Over(outcome) => info!("game ended in {outcome:?} after {} turns", world.turn_count),
    }
    Ok(())
}
