//! Tilequest main entry point.
//!
//! A small tile-based adventure built on:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for the world, resources and the tick schedule
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, load the optional font and avatar texture
//! 2. Build the world: resources, avatar, maps, then apply the start actions
//! 3. Each frame:
//!    - advance the clocks and sample input
//!    - run the tick schedule (event queue, movement, animation, actions)
//!    - follow the avatar with the camera and draw
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::Vector2;

use tilequest::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use tilequest::game::{self, DEFAULT_AVATAR_SIZE};
use tilequest::resources::fontstore::FontStore;
use tilequest::resources::gameconfig::GameConfig;
use tilequest::resources::input::InputState;
use tilequest::resources::screensize::ScreenSize;
use tilequest::resources::texturestore::TextureStore;
use tilequest::systems::input::poll_input;
use tilequest::systems::render::{camera_follow_avatar, render_frame};
use tilequest::systems::time::update_world_time;
use tilequest::systems::{TickSet, add_tick_systems};

/// Tilequest, a tile-based adventure.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Map data file (JSON). Overrides the configured map.
    #[arg(long, value_name = "PATH")]
    map: Option<PathBuf>,

    /// Name to register the map data file under.
    #[arg(long, value_name = "NAME")]
    start_map: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{} ({}), using defaults", e, cli.config.display());
    }
    if cli.map.is_some() {
        config.map_path = cli.map;
    }
    if cli.start_map.is_some() {
        config.start_map = cli.start_map;
    }

    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title("Tilequest");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    let mut textures = TextureStore::new();
    let mut fonts = FontStore::new();

    let font_key = config
        .font_path
        .as_ref()
        .map(|path| path.to_string_lossy().into_owned());
    if let Some(key) = &font_key {
        if let Err(e) = fonts.load(&mut rl, &thread, key) {
            error!("{}", e);
            std::process::exit(1);
        }
    }

    let mut avatar_size = Vector2::new(DEFAULT_AVATAR_SIZE, DEFAULT_AVATAR_SIZE);
    let avatar_key = config
        .avatar_texture
        .as_ref()
        .map(|path| path.to_string_lossy().into_owned());
    if let Some(key) = &avatar_key {
        match textures.load(&mut rl, &thread, key) {
            Ok(texture) => avatar_size = Vector2::new(texture.width as f32, texture.height as f32),
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::init_world(&mut world, config);
    game::spawn_avatar(&mut world, avatar_size, avatar_key);
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    if let Err(e) = game::load_maps(&mut world).and_then(|_| game::start_game(&mut world)) {
        error!("failed to start: {}", e);
        std::process::exit(1);
    }
    info!("game started");

    let mut update = Schedule::default();
    add_tick_systems(&mut update);
    update.add_systems(camera_follow_avatar.after(TickSet));

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);

        poll_input(&rl, &mut world.resource_mut::<InputState>());
        if world.resource::<InputState>().mode_debug.just_pressed {
            world.trigger(SwitchDebugEvent {});
        }
        {
            let mut screen = world.resource_mut::<ScreenSize>();
            screen.w = rl.get_screen_width();
            screen.h = rl.get_screen_height();
        }

        update.run(&mut world);

        render_frame(
            &mut world,
            &mut rl,
            &thread,
            &textures,
            &fonts,
            font_key.as_deref(),
        );

        world.clear_trackers(); // Clear changed components for next frame
    }
    info!("bye");
}
