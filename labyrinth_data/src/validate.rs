use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
    Unreachable { room: String, start: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
            ValidationError::Unreachable { room, start } => {
                write!(f, "room '{room}' cannot be reached from start room '{start}'")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use labyrinth_data::{GameDef, PuzzleDef, RoomDef, WorldDef, validate_world};
/// use std::collections::BTreeMap;
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         start_room: "Start".into(),
///         final_room: "End".into(),
///         ..GameDef::default()
///     },
///     rooms: vec![
///         RoomDef {
///             name: "Start".into(),
///             exits: BTreeMap::from([("east".to_string(), "End".to_string())]),
///             item: Some("Lamp".into()),
///         },
///         RoomDef { name: "End".into(), ..RoomDef::default() },
///     ],
///     puzzles: vec![PuzzleDef { question: "2 + 2?".into(), answer: "4".into() }],
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();

    track_ids("room", world.rooms.iter().map(|r| r.name.as_str()), &mut rooms, &mut errors);
    track_ids(
        "item",
        world.rooms.iter().filter_map(|r| r.item.as_deref()),
        &mut items,
        &mut errors,
    );

    check_named_room(&world.game.start_room, "game start room", &rooms, &mut errors);
    check_named_room(&world.game.final_room, "game final room", &rooms, &mut errors);

    for room in &world.rooms {
        for (direction, to) in &room.exits {
            if !DIRECTIONS.contains(&direction.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' exit direction '{direction}'", room.name),
                });
            }
            check_ref(
                "room",
                to,
                &rooms,
                format!("room '{}' exit '{direction}'", room.name),
                &mut errors,
            );
        }
        if let Some(item) = &room.item {
            if item.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has a blank item name", room.name),
                });
            } else if item.trim() != item {
                // `get` input is trimmed, so a padded name never matches
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' item '{item}' has leading or trailing whitespace", room.name),
                });
            }
            if room.name == world.game.final_room {
                errors.push(ValidationError::InvalidValue {
                    context: format!("final room '{}' holds item '{item}' which can never be collected", room.name),
                });
            }
        }
    }

    if world.puzzles.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "puzzle bank empty".to_string(),
        });
    }
    for (idx, puzzle) in world.puzzles.iter().enumerate() {
        if puzzle.question.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("puzzle #{idx} question is blank"),
            });
        }
        if puzzle.answer.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("puzzle #{idx} answer is blank"),
            });
        }
    }

    // only meaningful once the start room itself resolves
    if rooms.contains(world.game.start_room.as_str()) {
        let reached = reachable_rooms(world, &world.game.start_room);
        for room in &world.rooms {
            if !reached.contains(room.name.as_str()) {
                errors.push(ValidationError::Unreachable {
                    room: room.name.clone(),
                    start: world.game.start_room.clone(),
                });
            }
        }
    }

    errors
}

/// Breadth-first walk over exits starting at `start`, returning every room name reached.
pub fn reachable_rooms<'a>(world: &'a WorldDef, start: &'a str) -> HashSet<&'a str> {
    let by_name: HashMap<&str, &RoomDef> = world.rooms.iter().map(|r| (r.name.as_str(), r)).collect();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(name) = queue.pop_front() {
        let Some(&room) = by_name.get(name) else { continue };
        for next in room.destinations() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn check_named_room(name: &str, context: &str, rooms: &HashSet<String>, errors: &mut Vec<ValidationError>) {
    if name.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context} missing"),
        });
    } else {
        check_ref("room", name, rooms, context.to_string(), errors);
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
