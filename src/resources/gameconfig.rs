//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file. Missing files and keys
//! keep the safe defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! vsync = true
//!
//! [game]
//! avatar_speed = 45
//! map = ./assets/maps/village.json
//! start_map = village
//! font = ./assets/fonts/font.ttf
//! avatar_texture = ./assets/textures/avatar.png
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_AVATAR_SPEED: f32 = 45.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Avatar speed in world units per simulation second.
    pub avatar_speed: f32,
    /// Map data file; the built-in demo maps are used when absent.
    pub map_path: Option<PathBuf>,
    /// Name under which a loaded map is registered and entered.
    pub start_map: Option<String>,
    pub font_path: Option<PathBuf>,
    pub avatar_texture: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            avatar_speed: DEFAULT_AVATAR_SPEED,
            map_path: None,
            start_map: None,
            font_path: None,
            avatar_texture: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, avatar_speed={}",
            self.window_width, self.window_height, self.target_fps, self.vsync, self.avatar_speed
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [game] section
        if let Some(speed) = config.getfloat("game", "avatar_speed").ok().flatten() {
            self.avatar_speed = speed as f32;
        }
        if let Some(map) = config.get("game", "map") {
            self.map_path = Some(PathBuf::from(map));
        }
        if let Some(start) = config.get("game", "start_map") {
            self.start_map = Some(start);
        }
        if let Some(font) = config.get("game", "font") {
            self.font_path = Some(PathBuf::from(font));
        }
        if let Some(texture) = config.get("game", "avatar_texture") {
            self.avatar_texture = Some(PathBuf::from(texture));
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
