//! `repl::system` module
//!
//! Contains repl loop handlers for the parts of a game that are not moves: the opening
//! instructions, the per-turn status line, bad input, quitting and the ending.

use log::info;

use crate::outcome::Outcome;
use crate::view::{View, ViewItem};
use crate::world::LabyrinthWorld;

/// Show the title, objective and command list. Called once, before the first turn.
pub fn instructions_handler(world: &LabyrinthWorld, view: &mut View) {
    view.push(ViewItem::Instructions {
        title: world.text.title.clone(),
        intro: world.text.intro.clone(),
    });
}

/// Show the current room, the inventory and any item lying here.
pub fn status_handler(world: &LabyrinthWorld, view: &mut View) {
    view.push(ViewItem::Status {
        room: world.state.location.clone(),
        inventory: world.state.inventory.clone(),
        item: world.visible_item().map(str::to_string),
    });
}

pub fn invalid_command_handler(view: &mut View, text: &str) {
    info!("unrecognized command \"{text}\"");
    view.push(ViewItem::InvalidCommand(text.to_string()));
}

/// Quit the game.
pub fn quit_handler(world: &LabyrinthWorld, view: &mut View) {
    info!(
        "player quit in {} after {} turns holding {}/{} items",
        world.state.location,
        world.turn_count,
        world.state.inventory.len(),
        world.total_items()
    );
    info!("ending inventory:");
    world.state.inventory.iter().for_each(|i| info!("- {i}"));
    view.push(ViewItem::Quit);
}

/// Show the victory or defeat narrative.
pub fn outcome_handler(world: &LabyrinthWorld, view: &mut View, outcome: Outcome) {
    info!("game over after {} turns: {outcome:?}", world.turn_count);
    view.push(match outcome {
        Outcome::Victory => ViewItem::Victory(world.text.victory.clone()),
        Outcome::Defeat => ViewItem::Defeat(world.text.defeat.clone()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Puzzle, PuzzleBank};
    use crate::room::{Room, RoomGraph};
    use crate::world::GameText;

    fn world() -> LabyrinthWorld {
        let rooms = RoomGraph::new(vec![Room::new("Crash Site"), Room::new("AI Chamber")], "Crash Site", "AI Chamber")
            .unwrap();
        let bank = PuzzleBank::new(vec![Puzzle::new("q", "a")]).unwrap();
        let text = GameText {
            title: "Lost in the Celestial Labyrinth".into(),
            intro: vec!["Objective: escape.".into()],
            victory: vec!["You escaped!".into()],
            defeat: vec!["GAME OVER!".into()],
        };
        LabyrinthWorld::new(rooms, bank, text).unwrap()
    }

    #[test]
    fn status_reflects_world_state() {
        let mut world = world();
        world.state.inventory.push("Plasma Cell".into());
        let mut view = View::new(false);
        status_handler(&world, &mut view);
        assert_eq!(
            view.items,
            vec![ViewItem::Status {
                room: "Crash Site".into(),
                inventory: vec!["Plasma Cell".into()],
                item: None,
            }]
        );
    }

    #[test]
    fn outcome_picks_matching_narrative() {
        let world = world();
        let mut view = View::new(false);
        outcome_handler(&world, &mut view, Outcome::Defeat);
        outcome_handler(&world, &mut view, Outcome::Victory);
        assert_eq!(
            view.items,
            vec![
                ViewItem::Defeat(vec!["GAME OVER!".into()]),
                ViewItem::Victory(vec!["You escaped!".into()]),
            ]
        );
    }

    #[test]
    fn instructions_carry_title_and_intro() {
        let world = world();
        let mut view = View::new(false);
        instructions_handler(&world, &mut view);
        let ViewItem::Instructions { title, intro } = &view.items[0] else {
            panic!("expected instructions");
        };
        assert_eq!(title, "Lost in the Celestial Labyrinth");
        assert_eq!(intro.len(), 1);
    }
}
