use labyrinth_engine as le;
use le::loader::{BUILTIN_WORLD, build_world, parse_worlddef};
use le::repl::{ANSWER_PROMPT, MOVE_PROMPT, REROLL_PROMPT};
use le::*;

fn world() -> LabyrinthWorld {
    let def = parse_worlddef(BUILTIN_WORLD).unwrap();
    let config = GameConfig {
        seed: Some(2024),
        ..GameConfig::default()
    };
    build_world(&def, &config).unwrap()
}

fn answer(world: &LabyrinthWorld, room: &str) -> String {
    world.rooms.room(room).unwrap().puzzle.as_ref().unwrap().answer.clone()
}

fn play(world: &mut LabyrinthWorld, lines: Vec<String>) -> (GameEnd, Transcript, ScriptedInput) {
    let mut input = ScriptedInput::new(lines);
    let mut out = Transcript::new();
    let end = run_repl(world, &mut input, &mut out).unwrap();
    (end, out, input)
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
}

#[test]
fn test_instructions_then_status() {
    let mut world = world();
    let (end, out, input) = play(&mut world, Vec::new());
    assert_eq!(end, GameEnd::Quit);
    assert_eq!(out.lines[1], "Welcome to 'Lost in the Celestial Labyrinth'!");
    assert!(out.contains("Avoid Eris, the rogue AI Sentinel, until you have all cores."));
    assert!(out.contains("You are in the Crash Site."));
    assert!(out.contains("Inventory: []"));
    assert!(out.contains("You have exited the game. Thanks for playing!"));
    assert_eq!(input.prompts, vec![MOVE_PROMPT]);
    assert_eq!(out.count("Welcome to"), 1);
}

#[test]
fn test_moves_follow_exits() {
    let mut world = world();
    let (end, out, _) = play(&mut world, lines(&["go east", "GO North", "exit"]));
    assert_eq!(end, GameEnd::Quit);
    assert_eq!(world.state.location, "Observation Deck");
    assert!(out.contains("You are in the Cryo Chamber."));
    assert!(out.contains("You see a Stellar Core."));
}

#[test]
fn test_bad_commands_leave_state_alone() {
    let mut world = world();
    let (_, out, _) = play(
        &mut world,
        lines(&["dance", "go up", "go west", "get plasma cell", "exit"]),
    );
    assert_eq!(world.state.location, "Crash Site");
    assert!(world.state.inventory.is_empty());
    assert_eq!(out.count("Invalid command. Please try again."), 1);
    assert_eq!(out.count("You can't go that way!"), 2);
    assert_eq!(out.count("There is no such item to collect here."), 1);
    assert_eq!(out.count("You are in the Crash Site."), 5);
}

#[test]
fn test_partial_item_name_is_rejected() {
    let mut world = world();
    let (_, out, input) = play(&mut world, lines(&["go east", "get frozen", "exit"]));
    assert!(out.contains("There is no such item to collect here."));
    assert!(!input.prompts.iter().any(|p| p == ANSWER_PROMPT));
    assert_eq!(world.visible_item(), Some("Frozen Relic"));
}

#[test]
fn test_abandoned_puzzle_keeps_item() {
    let mut world = world();
    let (end, out, _) = play(
        &mut world,
        lines(&["go east", "get frozen relic", "not it", "exit", "exit"]),
    );
    assert_eq!(end, GameEnd::Quit);
    assert!(out.contains("To collect the item, solve this puzzle:"));
    assert!(out.contains("Incorrect."));
    assert!(out.contains("You have exited the puzzle. The item remains in the room."));
    assert!(out.contains("You must solve the puzzle to collect the item!"));
    assert!(world.state.inventory.is_empty());
    assert_eq!(world.visible_item(), Some("Frozen Relic"));
}

#[test]
fn test_solving_collects_item() {
    let mut world = world();
    let core = answer(&world, "Observation Deck");
    let mut script = lines(&["go east", "go north", "Get Stellar Core"]);
    script.push(core.to_uppercase());
    script.push("exit".into());
    let (_, out, _) = play(&mut world, script);
    assert!(out.contains("Correct! You can now collect the item."));
    assert!(out.contains("You collected the Stellar Core."));
    assert!(out.contains("Inventory: ['Stellar Core']"));
    assert_eq!(world.state.inventory, vec!["Stellar Core"]);
    assert_eq!(world.visible_item(), None);
}

#[test]
fn test_reroll_after_three_misses() {
    let mut world = world();
    let before = world.bank.pulls();
    let next = world.bank.puzzles()[world.bank.cursor()].clone();
    let mut script = lines(&["go east", "get frozen relic", "wrong one", "wrong two", "wrong three", "yes"]);
    script.push(next.answer.clone());
    script.push("exit".into());
    let (_, out, input) = play(&mut world, script);

    assert!(out.contains(&format!("New puzzle: {}", next.question)));
    assert_eq!(out.count("Incorrect."), 3);
    assert!(out.contains("You collected the Frozen Relic."));
    assert_eq!(input.prompts.iter().filter(|p| *p == REROLL_PROMPT).count(), 1);
    assert_eq!(world.bank.pulls(), before + 1);
}

#[test]
fn test_declined_reroll_keeps_question() {
    let mut world = world();
    let relic = answer(&world, "Cryo Chamber");
    let mut script = lines(&["go east", "get frozen relic", "a", "b", "c", "no"]);
    script.push(relic.clone());
    script.push("exit".into());
    let pulls = world.bank.pulls();
    let (_, out, _) = play(&mut world, script);
    assert!(!out.contains("New puzzle:"));
    assert!(out.contains("You collected the Frozen Relic."));
    assert_eq!(world.bank.pulls(), pulls);
}

#[test]
fn test_entering_final_room_early_is_defeat() {
    let mut world = world();
    let (end, out, _) = play(&mut world, lines(&["go east", "go east", "go south", "go south", "exit"]));
    assert_eq!(end, GameEnd::Over(Outcome::Defeat));
    assert!(out.contains("Eris, the rogue AI Sentinel, captures you!"));
    assert_eq!(out.lines.last().map(String::as_str), Some("NOM NOM...GAME OVER!"));
    assert_eq!(out.count("You are in the"), 4);
}

#[test]
fn test_full_run_is_victory() {
    let mut world = world();
    let mut script = Vec::new();
    let mut step = |command: &str, room: Option<&str>| {
        script.push(command.to_string());
        if let Some(room) = room {
            script.push(answer(&world, room));
        }
    };
    step("go east", None);
    step("get frozen relic", Some("Cryo Chamber"));
    step("go north", None);
    step("get stellar core", Some("Observation Deck"));
    step("go south", None);
    step("go east", None);
    step("get holo-key", Some("Control Room"));
    step("go south", None);
    step("get quantum chip", Some("Data Core"));
    step("go north", None);
    step("go west", None);
    step("go south", None);
    step("get bioluminescent orb", Some("Botanical Lab"));
    step("go south", None);
    step("get plasma cell", Some("Generator Room"));
    step("go east", None);

    let (end, out, input) = play(&mut world, script);
    assert_eq!(end, GameEnd::Over(Outcome::Victory));
    assert_eq!(world.state.location, "AI Chamber");
    assert_eq!(world.state.inventory.len(), 6);
    assert_eq!(input.remaining(), 0);
    assert!(out.contains("Congratulations! You've collected all energy cores and powered your escape pod!"));
    assert_eq!(
        out.lines.last().map(String::as_str),
        Some("You successfully escaped the Celestial Labyrinth!")
    );
}

#[test]
fn test_interrupts_cancel_command_and_abandon_puzzle() {
    let mut world = world();
    let mut input = ScriptedInput::events([
        InputEvent::Interrupted,
        InputEvent::Line("go east".into()),
        InputEvent::Line("get frozen relic".into()),
        InputEvent::Interrupted,
        InputEvent::Line("exit".into()),
    ]);
    let mut out = Transcript::new();
    let end = run_repl(&mut world, &mut input, &mut out).unwrap();

    assert_eq!(end, GameEnd::Quit);
    assert_eq!(out.count("Command canceled."), 1);
    assert_eq!(out.count("You are in the Crash Site."), 2);
    assert!(out.contains("You have exited the puzzle. The item remains in the room."));
    assert!(out.contains("You must solve the puzzle to collect the item!"));
    assert_eq!(world.state.location, "Cryo Chamber");
    assert!(world.state.inventory.is_empty());
    assert_eq!(world.visible_item(), Some("Frozen Relic"));
    assert_eq!(input.remaining(), 0);
    assert_eq!(
        input.prompts,
        vec![MOVE_PROMPT, MOVE_PROMPT, MOVE_PROMPT, ANSWER_PROMPT, MOVE_PROMPT]
    );
}
