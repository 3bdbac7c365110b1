//! Loader utilities for building a `LabyrinthWorld` from serialized data.
//!
//! World content is a TOML `WorldDef`. The default labyrinth is compiled into the binary,
//! and a `world.toml` in the data directory replaces it when present.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use labyrinth_data::WorldDef;
use log::info;

use crate::config::GameConfig;
use crate::data_paths::data_path;
use crate::world::LabyrinthWorld;

/// The shipped world definition.
pub const BUILTIN_WORLD: &str = include_str!("../data/world.toml");

/// Load the `LabyrinthWorld`, preferring `world.toml` in the data directory over the built-in one.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, validation or missing references.
pub fn load_world(config: &GameConfig) -> Result<LabyrinthWorld> {
    load_world_from(&data_path("world.toml"), config)
}

/// Load the world from `world_path`, falling back to the built-in labyrinth if no file is there.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, validation or missing references.
pub fn load_world_from(world_path: &Path, config: &GameConfig) -> Result<LabyrinthWorld> {
    let def = if world_path.is_file() {
        load_worlddef(world_path).context("while loading worlddef from file")?
    } else {
        info!("no world file at '{}', using the built-in labyrinth", world_path.display());
        parse_worlddef(BUILTIN_WORLD).context("while parsing built-in worlddef")?
    };
    build_world(&def, config)
}

/// Read a `WorldDef` from a TOML file.
///
/// # Errors
/// - if the file cannot be read or parsed
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    parse_worlddef(&text).with_context(|| format!("parsing worlddef TOML from '{}'", path.display()))
}

/// # Errors
/// - on malformed TOML or a document that does not describe a world
pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    Ok(toml::from_str(text)?)
}

/// Validate `def` and build a ready-to-play world, puzzles shuffled and assigned.
///
/// # Errors
/// - every validation problem, aggregated into one error
/// - failures building the room graph or puzzle bank
pub fn build_world(def: &WorldDef, config: &GameConfig) -> Result<LabyrinthWorld> {
    validate_worlddef(def)?;
    let mut world = LabyrinthWorld::from_def(def, config.seed).context("while building world from worlddef")?;
    world.reroll_threshold = config.reroll_threshold;
    info!("{} rooms added to LabyrinthWorld", world.rooms.len());
    info!("{} items placed in LabyrinthWorld", world.total_items());
    info!("{} puzzles in the bank", world.bank.len());
    info!("player starts in {}", world.state.location);
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = labyrinth_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> GameConfig {
        GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        }
    }

    #[test]
    fn builtin_world_is_the_celestial_labyrinth() {
        let def = parse_worlddef(BUILTIN_WORLD).unwrap();
        assert_eq!(def.game.title, "Lost in the Celestial Labyrinth");
        assert_eq!(def.rooms.len(), 8);
        assert_eq!(def.puzzles.len(), 20);
        assert!(labyrinth_data::validate_world(&def).is_empty());

        let world = build_world(&def, &seeded(3)).unwrap();
        assert_eq!(world.state.location, "Crash Site");
        assert_eq!(world.rooms.final_room(), "AI Chamber");
        assert_eq!(world.total_items(), 6);
        assert_eq!(world.bank.pulls(), 6);
        assert!(world.rooms.iter().all(|room| room.item.is_some() == room.puzzle.is_some()));
    }

    #[test]
    fn same_seed_same_assignment() {
        let def = parse_worlddef(BUILTIN_WORLD).unwrap();
        let first = build_world(&def, &seeded(99)).unwrap();
        let second = build_world(&def, &seeded(99)).unwrap();
        let puzzles = |world: &LabyrinthWorld| world.rooms.iter().map(|r| r.puzzle.clone()).collect::<Vec<_>>();
        assert_eq!(puzzles(&first), puzzles(&second));
    }

    #[test]
    fn threshold_comes_from_config() {
        let def = parse_worlddef(BUILTIN_WORLD).unwrap();
        let config = GameConfig {
            reroll_threshold: 5,
            ..GameConfig::default()
        };
        assert_eq!(build_world(&def, &config).unwrap().reroll_threshold, 5);
    }

    #[test]
    fn validation_errors_are_aggregated() {
        let mut def = parse_worlddef(BUILTIN_WORLD).unwrap();
        def.game.start_room = "Bridge".into();
        def.puzzles.clear();
        let message = format!("{:#}", build_world(&def, &GameConfig::default()).unwrap_err());
        assert!(message.contains("worlddef validation failed"));
        assert!(message.contains("Bridge"));
        assert!(message.lines().filter(|line| line.starts_with("- ")).count() >= 2);
    }

    const TINY_WORLD: &str = r#"
[game]
title = "Tiny Labyrinth"
start_room = "Hatch"
final_room = "Core"

[[rooms]]
name = "Hatch"
item = "Fuse"
exits = { east = "Core" }

[[rooms]]
name = "Core"

[[puzzles]]
question = "What is 2 + 2?"
answer = "4"
"#;

    #[test]
    fn world_file_replaces_builtin_world() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.toml");
        fs::write(&path, TINY_WORLD).unwrap();
        let world = load_world_from(&path, &seeded(1)).unwrap();
        assert_eq!(world.text.title, "Tiny Labyrinth");
        assert_eq!(world.rooms.len(), 2);
        assert_eq!(world.state.location, "Hatch");
        assert_eq!(world.visible_item(), Some("Fuse"));
    }

    #[test]
    fn missing_world_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let world = load_world_from(&dir.path().join("world.toml"), &seeded(1)).unwrap();
        assert_eq!(world.text.title, "Lost in the Celestial Labyrinth");
        assert_eq!(world.rooms.len(), 8);
    }

    #[test]
    fn invalid_world_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.toml");
        fs::write(&path, TINY_WORLD.replace("answer = \"4\"", "answer = \" \"")).unwrap();
        let message = format!("{:#}", load_world_from(&path, &seeded(1)).unwrap_err());
        assert!(message.contains("answer is blank"));
    }

    #[test]
    fn loads_worlddef_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.toml");
        fs::write(&path, BUILTIN_WORLD).unwrap();
        let def = load_worlddef(&path).unwrap();
        assert_eq!(def.rooms[0].name, "Crash Site");
        assert!(load_worlddef(&dir.path().join("missing.toml")).is_err());
    }
}
