//! Game setup.
//!
//! Inserts the world resources, spawns the avatar, registers maps (either a
//! map data file from the configuration or the built-in demo) and runs the
//! start actions.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::actions::condition::{CmpOp, Condition};
use crate::actions::{ActionGenerator, GameAction, ObjectAction};
use crate::components::avatar::Avatar;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::error::GameError;
use crate::modal::conversation::{Conversation, Question};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::eventqueue::EventQueue;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::mapstore::MapStore;
use crate::resources::pendingactions::{PendingActions, StartActions};
use crate::resources::screensize::ScreenSize;
use crate::resources::tilemap::TileMap;
use crate::resources::tilemap::mapdata::{
    LayerData, MapData, ObjectData, TileAnimation, TileDefault,
};
use crate::resources::tilemap::object::AnimationFrame;
use crate::resources::tilemap::tile::TileTrigger;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::actions::apply_game_action;

/// Default avatar collider size when no texture provides one.
pub const DEFAULT_AVATAR_SIZE: f32 = 16.0;
/// Map name used for a map data file without a configured `start_map`.
pub const DEFAULT_MAP_NAME: &str = "main";

const TILE_SIZE: u32 = 32;

/// Insert every resource the tick schedule needs.
pub fn init_world(world: &mut World, config: GameConfig) {
    let (w, h) = config.window_size();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(MapStore::new());
    world.insert_resource(EventQueue::new());
    world.insert_resource(PendingActions::default());
    world.insert_resource(StartActions::default());
    world.insert_resource(ScreenSize {
        w: w as i32,
        h: h as i32,
    });
    world.insert_resource(Camera2DRes::centered(
        Vector2::new(w as f32 / 2.0, h as f32 / 2.0),
        1.0,
    ));
    world.insert_resource(config);
}

/// Spawn the avatar at the origin. `start_game` places it.
pub fn spawn_avatar(world: &mut World, size: Vector2, tex_key: Option<String>) -> Entity {
    let mut avatar = world.spawn((
        Avatar,
        MapPosition::new(0.0, 0.0),
        BoxCollider::new(size.x, size.y),
    ));
    if let Some(tex_key) = tex_key {
        avatar.insert(Sprite {
            tex_key,
            width: size.x,
            height: size.y,
        });
    }
    avatar.id()
}

/// Register the configured map file, or the demo maps when none is set.
pub fn load_maps(world: &mut World) -> Result<(), GameError> {
    let config = world.resource::<GameConfig>().clone();
    match &config.map_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let data: MapData = serde_json::from_str(&text)?;
            let name = config
                .start_map
                .clone()
                .unwrap_or_else(|| DEFAULT_MAP_NAME.to_string());
            let map = TileMap::from_data(&data)?;
            info!("loaded map '{}' from {}", name, path.display());
            world.resource_mut::<MapStore>().add_map(name.clone(), map)?;
            world.insert_resource(StartActions(vec![
                GameAction::EnterMap { name },
                GameAction::TeleportToTile { i: 1, j: 1 },
            ]));
        }
        None => {
            {
                let mut maps = world.resource_mut::<MapStore>();
                maps.add_map("village", village_map()?)?;
                maps.add_map("cellar", cellar_map()?)?;
            }
            world.insert_resource(StartActions(demo_start_actions()));
        }
    }
    Ok(())
}

/// Apply the start actions once. They are consumed.
pub fn start_game(world: &mut World) -> Result<(), GameError> {
    let actions = std::mem::take(&mut world.resource_mut::<StartActions>().0);
    for action in &actions {
        apply_game_action(world, action)?;
    }
    Ok(())
}

/// Row-major tile ids from an ASCII layout.
///
/// `#` wall, `.` floor, `~` water, `,` swamp, `D` doorway, anything else empty.
fn layer_from_rows(rows: &[&str]) -> Vec<u32> {
    rows.iter()
        .flat_map(|row| row.chars())
        .map(|c| match c {
            '#' => 2,
            '.' => 1,
            '~' => 3,
            ',' => 4,
            'D' => 5,
            _ => 0,
        })
        .collect()
}

fn demo_tile_defaults() -> Vec<TileDefault> {
    vec![
        TileDefault {
            tile_id: 2,
            passable: false,
            trigger: None,
        },
        TileDefault {
            tile_id: 3,
            passable: false,
            trigger: None,
        },
        TileDefault {
            tile_id: 4,
            passable: true,
            trigger: Some(TileTrigger::All(vec![
                TileTrigger::Dwell {
                    key: "poison".into(),
                    rate: 1.0,
                },
                TileTrigger::Distance {
                    key: "mud_walked".into(),
                    rate: 1.0,
                },
            ])),
        },
        TileDefault {
            tile_id: 5,
            passable: true,
            trigger: Some(TileTrigger::Flag {
                key: "found_doorway".into(),
            }),
        },
    ]
}

fn object_at(name: &str, tile_id: u32, i: u32, j: u32, visible: bool) -> ObjectData {
    ObjectData {
        x: (i * TILE_SIZE) as f32,
        y: (j * TILE_SIZE) as f32,
        tile_id,
        name: name.to_string(),
        visible,
        width: None,
        height: None,
    }
}

fn guard_conversation() -> Conversation {
    Conversation::new(vec![
        Question::new("Who are you?").answer("Guard", "I keep watch over the village."),
        Question::new("What is in the well?")
            .answer("Guard", "Nobody knows. Folk say the old mayor dropped something down there.")
            .available_when(Condition::lacks_flag("asked_about_well"))
            .then(ObjectAction::run(GameAction::set_flag("asked_about_well"))),
        Question::new("I found a key in the well.")
            .answer("Guard", "That is the cellar key!")
            .answer("Guard", "Go on then, the stairs are by the east wall.")
            .available_when(Condition::All(vec![
                Condition::has_flag("found_key"),
                Condition::lacks_flag("cellar_allowed"),
            ]))
            .then(ObjectAction::run(GameAction::set_flag("cellar_allowed"))),
        Question::new("You look tired.")
            .answer("Guard", "Swamp air. Stay off the green if you can.")
            .available_when(Condition::ScalarCmp {
                key: "poison".into(),
                op: CmpOp::Gt,
                value: 0.0,
            }),
    ])
}

fn village_map() -> Result<TileMap, GameError> {
    let rows = [
        "############",
        "#..........#",
        "#..,,,.....#",
        "#..,,,..~~.#",
        "#.......~~.#",
        "#..........D",
        "#..........#",
        "############",
    ];
    let data = MapData {
        tile_width: TILE_SIZE,
        tile_height: TILE_SIZE,
        map_width: 12,
        map_height: rows.len() as u32,
        layers: vec![LayerData {
            tile_ids: layer_from_rows(&rows),
            visible: true,
        }],
        objects: vec![
            object_at("guard", 10, 6, 2, true),
            object_at("well", 11, 7, 5, true),
            object_at("stairs", 12, 10, 1, true),
            object_at("torch", 20, 1, 1, true),
            object_at("hidden switch", 13, 10, 6, false),
        ],
        tile_defaults: demo_tile_defaults(),
        tile_animations: vec![TileAnimation {
            tile_id: 20,
            frames: vec![
                AnimationFrame {
                    tile_id: 20,
                    duration_ms: 250,
                },
                AnimationFrame {
                    tile_id: 21,
                    duration_ms: 250,
                },
            ],
        }],
    };

    let mut map = TileMap::from_data(&data)?.on_enter(GameAction::SetValue {
        key: "village_visits".into(),
        value: 1,
    });

    map.set_collision_action(
        "guard",
        ObjectAction::Converse {
            conversation: guard_conversation(),
        },
    )?;

    map.set_collision_action("well", ObjectAction::ShowInteractionMenu)?;
    map.set_action_generator(
        "well",
        ActionGenerator::new()
            .with_choice(
                "Look",
                ObjectAction::run(GameAction::message("The water is dark and still.")),
            )
            .with_choice_when(
                "Search",
                ObjectAction::run(GameAction::sequence([
                    GameAction::message("You fish out a rusty key."),
                    GameAction::set_flag("found_key"),
                ])),
                Condition::All(vec![
                    Condition::has_flag("asked_about_well"),
                    Condition::lacks_flag("found_key"),
                ]),
            ),
    )?;

    map.set_collision_action("stairs", ObjectAction::ShowInteractionMenu)?;
    map.set_action_generator(
        "stairs",
        ActionGenerator::new()
            .with_choice(
                "Look",
                ObjectAction::run(GameAction::message("Stairs lead down to a locked cellar.")),
            )
            .with_choice_when(
                "Go down",
                ObjectAction::run(GameAction::sequence([
                    GameAction::message("You unlock the cellar and climb down."),
                    GameAction::queued(GameAction::EnterMap {
                        name: "cellar".into(),
                    }),
                    GameAction::queued(GameAction::TeleportToTile { i: 1, j: 1 }),
                ])),
                Condition::has_flag("cellar_allowed"),
            ),
    )?;

    map.set_collision_action(
        "hidden switch",
        ObjectAction::run(GameAction::sequence([
            GameAction::message("Something clicks under your hand."),
            GameAction::set_flag("switch_pressed"),
        ])),
    )?;

    Ok(map)
}

fn cellar_map() -> Result<TileMap, GameError> {
    let rows = [
        "########",
        "#......#",
        "#.,,,..#",
        "#......#",
        "########",
    ];
    let data = MapData {
        tile_width: TILE_SIZE,
        tile_height: TILE_SIZE,
        map_width: 8,
        map_height: rows.len() as u32,
        layers: vec![LayerData {
            tile_ids: layer_from_rows(&rows),
            visible: true,
        }],
        objects: vec![
            object_at("ladder", 12, 6, 1, true),
            object_at("chest", 14, 6, 3, true),
        ],
        tile_defaults: demo_tile_defaults(),
        tile_animations: vec![],
    };

    let mut map = TileMap::from_data(&data)?.on_enter(GameAction::AddValue {
        key: "cellar_visits".into(),
        amount: 1,
    });
    map.set_collision_action(
        "ladder",
        ObjectAction::run(GameAction::sequence([
            GameAction::message("You climb back up."),
            GameAction::queued(GameAction::EnterMap {
                name: "village".into(),
            }),
            GameAction::queued(GameAction::TeleportToTile { i: 9, j: 1 }),
        ])),
    )?;
    map.set_collision_action(
        "chest",
        ObjectAction::run(GameAction::message("The chest is empty. Someone got here first.")),
    )?;
    Ok(map)
}

fn demo_start_actions() -> Vec<GameAction> {
    vec![
        GameAction::EnterMap {
            name: "village".into(),
        },
        GameAction::TeleportToTile { i: 2, j: 5 },
        GameAction::message(
            "Welcome to the village.\nArrow keys move, Enter confirms.\nHold V to reveal hidden things, F11 toggles debug.",
        ),
    ]
}
