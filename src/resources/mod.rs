//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles optional debug overlays
//! - `eventqueue` – FIFO of modal events and the scheduler state
//! - `fontstore` – loaded fonts keyed by path (frame loop owned)
//! - `gameconfig` – INI-backed settings
//! - `input` – per-frame state of the keys relevant to the game
//! - `mapstore` – registered maps and the current one
//! - `pendingactions` – actions raised by systems, applied later in the tick
//! - `screensize` – current framebuffer dimensions in pixels
//! - `texturestore` – loaded textures keyed by path (frame loop owned)
//! - `tilemap` – tiles, objects, collision and sweep
//! - `worldsignals` – global scalars, integers and flags
//! - `worldtime` – game time, simulation delta and time scale
pub mod camera2d;
pub mod debugmode;
pub mod eventqueue;
pub mod fontstore;
pub mod gameconfig;
pub mod input;
pub mod mapstore;
pub mod pendingactions;
pub mod screensize;
pub mod texturestore;
pub mod tilemap;
pub mod worldsignals;
pub mod worldtime;
